use crate::core::relatedness::RelatednessTable;
use crate::core::skills::SkillSet;
use crate::models::{MatchDetails, ScoringWeights};

/// How a query skill relates to a candidate skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillRelation {
    /// Case-insensitive equality
    Exact,
    /// One is a substring of the other
    Partial,
    /// Listed together in the relatedness table
    Related,
}

/// Outcome of scoring one candidate's skills against a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMatch {
    pub score: u8,
    pub matching_skills: Vec<String>,
    pub details: MatchDetails,
}

/// Classify a pair of lowercase skills
#[inline]
pub fn classify_pair(
    query: &str,
    candidate: &str,
    table: &RelatednessTable,
) -> Option<SkillRelation> {
    if query == candidate {
        Some(SkillRelation::Exact)
    } else if candidate.contains(query) || query.contains(candidate) {
        Some(SkillRelation::Partial)
    } else if table.are_related(query, candidate) {
        Some(SkillRelation::Related)
    } else {
        None
    }
}

/// Score a candidate's skills (0-100) against the recruiter's query skills
///
/// Scoring formula:
/// raw = exact * 3 + partial * 2 + related * 1
/// max = 3 * |query|
/// score = round(100 * raw / max), capped at 100
///
/// Every (query, candidate) pair contributes, so one candidate skill can
/// count for several query terms.
pub fn calculate_skill_match(
    query: &SkillSet,
    candidate: &SkillSet,
    weights: &ScoringWeights,
    table: &RelatednessTable,
) -> SkillMatch {
    let query_terms = query.lowercased();
    let mut details = MatchDetails::default();
    let mut matching_skills: Vec<String> = Vec::new();

    for skill in candidate.iter() {
        let lowered = skill.to_lowercase();

        for term in &query_terms {
            let relation = match classify_pair(term, &lowered, table) {
                Some(relation) => relation,
                None => continue,
            };

            match relation {
                SkillRelation::Exact => details.exact_matches += 1,
                SkillRelation::Partial => details.partial_matches += 1,
                SkillRelation::Related => details.related_matches += 1,
            }

            if !matching_skills.iter().any(|s| s == skill) {
                matching_skills.push(skill.to_string());
            }
        }
    }

    let max_score = weights.exact as u64 * query_terms.len() as u64;

    SkillMatch {
        score: normalize_score(raw_score(&details, weights), max_score),
        matching_skills,
        details,
    }
}

/// Weighted sum of match counts
#[inline]
pub fn raw_score(details: &MatchDetails, weights: &ScoringWeights) -> u64 {
    details.exact_matches as u64 * weights.exact as u64
        + details.partial_matches as u64 * weights.partial as u64
        + details.related_matches as u64 * weights.related as u64
}

#[inline]
fn normalize_score(raw: u64, max: u64) -> u8 {
    if max == 0 {
        return 0;
    }

    let percent = (100.0 * raw as f64 / max as f64).round();
    percent.min(100.0) as u8
}
