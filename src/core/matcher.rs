use std::cmp::Ordering;
use std::sync::Arc;

use crate::core::{relatedness::RelatednessTable, scoring::calculate_skill_match, skills::SkillSet};
use crate::models::{Candidate, MatchResult, ScoringWeights};

/// Default number of matches returned
pub const DEFAULT_MATCH_LIMIT: usize = 25;

/// Result of a skill-matching run
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Skill-match orchestrator
///
/// # Pipeline Stages
/// 1. Score every candidate's skills against the query
/// 2. Drop candidates that scored zero
/// 3. Rank by score, then availability, then recency
/// 4. Truncate to the limit
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    weights: ScoringWeights,
    table: Arc<RelatednessTable>,
    limit: usize,
}

impl SkillMatcher {
    pub fn new(weights: ScoringWeights, table: Arc<RelatednessTable>, limit: usize) -> Self {
        Self { weights, table, limit }
    }

    pub fn with_default_weights() -> Self {
        Self::new(
            ScoringWeights::default(),
            RelatednessTable::standard(),
            DEFAULT_MATCH_LIMIT,
        )
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Find the candidates whose skills best match the query
    ///
    /// # Arguments
    /// * `query` - Recruiter-entered skills
    /// * `candidates` - Candidate pool from the data layer
    /// * `limit` - Optional tighter cap than the configured one
    pub fn find_matches(
        &self,
        query: &SkillSet,
        candidates: Vec<Candidate>,
        limit: Option<usize>,
    ) -> MatchOutcome {
        let total_candidates = candidates.len();
        let limit = limit.map_or(self.limit, |l| l.min(self.limit));

        let mut matches: Vec<MatchResult> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let skill_match =
                    calculate_skill_match(query, &candidate.skills, &self.weights, &self.table);

                if skill_match.score == 0 {
                    return None;
                }

                Some(MatchResult {
                    candidate,
                    match_score: skill_match.score,
                    matching_skills: skill_match.matching_skills,
                    match_details: skill_match.details,
                })
            })
            .collect();

        // Score (descending), then available first, then newest first
        matches.sort_by(|a, b| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| availability_first(&a.candidate, &b.candidate))
                .then_with(|| newest_first(&a.candidate, &b.candidate))
        });

        matches.truncate(limit);

        tracing::debug!(
            "Skill match: {} of {} candidates matched {} query skills",
            matches.len(),
            total_candidates,
            query.len()
        );

        MatchOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Orders available candidates ahead of busy ones
pub(crate) fn availability_first(a: &Candidate, b: &Candidate) -> Ordering {
    b.availability
        .is_available()
        .cmp(&a.availability.is_available())
}

/// Orders by creation time, newest first; missing timestamps sort last
pub(crate) fn newest_first(a: &Candidate, b: &Candidate) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;
    use chrono::{Duration, Utc};

    fn create_candidate(id: &str, skills: &[&str], availability: Availability, age_days: i64) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidate {}", id),
            email: format!("{}@example.com", id),
            phone: None,
            location: "Berlin".to_string(),
            title: String::new(),
            bio: String::new(),
            experience: "mid".to_string(),
            availability,
            expected_salary: String::new(),
            skills: SkillSet::from_list(skills),
            certificates: vec![],
            created_at: Some(Utc::now() - Duration::days(age_days)),
        }
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = SkillMatcher::with_default_weights();
        let query = SkillSet::parse("react, node");

        let candidates = vec![
            create_candidate("1", &["React", "Express", "MongoDB"], Availability::Available, 1),
            create_candidate("2", &["Photoshop"], Availability::Available, 1),
            create_candidate("3", &[], Availability::Available, 1),
        ];

        let result = matcher.find_matches(&query, candidates, None);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].candidate.id, "1");
        assert_eq!(result.matches[0].match_score, 67);
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let matcher = SkillMatcher::with_default_weights();
        let query = SkillSet::parse("rust, go");

        let candidates = vec![
            create_candidate("half", &["Rust"], Availability::Available, 1),
            create_candidate("full", &["Rust", "Go"], Availability::Busy, 1),
        ];

        let result = matcher.find_matches(&query, candidates, None);

        assert_eq!(result.matches[0].candidate.id, "full");
        assert_eq!(result.matches[1].candidate.id, "half");
    }

    #[test]
    fn test_tie_breaks_availability_then_recency() {
        let matcher = SkillMatcher::with_default_weights();
        let query = SkillSet::parse("python");

        let candidates = vec![
            create_candidate("busy", &["Python"], Availability::Busy, 0),
            create_candidate("old", &["Python"], Availability::Available, 30),
            create_candidate("new", &["Python"], Availability::Available, 2),
        ];

        let result = matcher.find_matches(&query, candidates, None);
        let order: Vec<&str> = result.matches.iter().map(|m| m.candidate.id.as_str()).collect();

        assert_eq!(order, vec!["new", "old", "busy"]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = SkillMatcher::with_default_weights();
        let query = SkillSet::parse("docker");

        let candidates: Vec<Candidate> = (0..40)
            .map(|i| create_candidate(&i.to_string(), &["Docker"], Availability::Available, i))
            .collect();

        assert_eq!(matcher.find_matches(&query, candidates.clone(), None).matches.len(), 25);
        assert_eq!(matcher.find_matches(&query, candidates.clone(), Some(5)).matches.len(), 5);
        // a request cannot raise the configured cap
        assert_eq!(matcher.find_matches(&query, candidates, Some(100)).matches.len(), 25);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let matcher = SkillMatcher::with_default_weights();
        let candidates = vec![create_candidate("1", &["React"], Availability::Available, 1)];

        let result = matcher.find_matches(&SkillSet::parse(""), candidates, None);

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 1);
    }

    #[test]
    fn test_missing_timestamp_sorts_last() {
        let mut undated = create_candidate("undated", &["Go"], Availability::Available, 0);
        undated.created_at = None;
        let dated = create_candidate("dated", &["Go"], Availability::Available, 100);

        let result = SkillMatcher::default().find_matches(&SkillSet::parse("go"), vec![undated, dated], None);

        assert_eq!(result.matches[0].candidate.id, "dated");
    }
}
