use crate::core::filters::{matches_filters, SearchFilters};
use crate::core::matcher::{availability_first, newest_first};
use crate::models::{Candidate, SearchHit};

/// Default number of search results returned
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

const TITLE_POINTS: u32 = 3;
const BIO_POINTS: u32 = 2;
const SKILL_POINTS: u32 = 2;

/// Free-text query plus structured filters
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub filters: SearchFilters,
}

impl SearchCriteria {
    /// Lowercased, trimmed query; `None` when absent or blank
    pub fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty())
    }
}

/// Result of a search run
#[derive(Debug)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHit>,
    pub total_candidates: usize,
}

/// Text search ranker
#[derive(Debug, Clone)]
pub struct SearchRanker {
    limit: usize,
}

impl SearchRanker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Filter and order candidates for a search
    ///
    /// With a text query, only candidates mentioning it in title, bio or a
    /// skill are kept, ranked by relevance. Without one, available
    /// candidates come first, newest first.
    pub fn search(
        &self,
        criteria: &SearchCriteria,
        candidates: Vec<Candidate>,
        limit: Option<usize>,
    ) -> SearchOutcome {
        let total_candidates = candidates.len();
        let limit = limit.map_or(self.limit, |l| l.min(self.limit));
        let query = criteria.normalized_query();

        let mut hits: Vec<SearchHit> = candidates
            .into_iter()
            .filter(|candidate| matches_filters(candidate, &criteria.filters))
            .filter_map(|candidate| match &query {
                Some(q) => {
                    let relevance = relevance_score(&candidate, q);
                    (relevance > 0).then_some(SearchHit { candidate, relevance })
                }
                None => Some(SearchHit {
                    candidate,
                    relevance: 0,
                }),
            })
            .collect();

        if query.is_some() {
            hits.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        } else {
            hits.sort_by(|a, b| {
                availability_first(&a.candidate, &b.candidate)
                    .then_with(|| newest_first(&a.candidate, &b.candidate))
            });
        }

        hits.truncate(limit);

        tracing::debug!(
            "Search {:?}: {} of {} candidates returned",
            query,
            hits.len(),
            total_candidates
        );

        SearchOutcome {
            hits,
            total_candidates,
        }
    }
}

impl Default for SearchRanker {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_LIMIT)
    }
}

/// Relevance of a candidate to a lowercase query
///
/// +3 title, +2 bio, +2 per skill containing the query.
#[inline]
pub fn relevance_score(candidate: &Candidate, query: &str) -> u32 {
    let mut score = 0;

    if candidate.title.to_lowercase().contains(query) {
        score += TITLE_POINTS;
    }

    if candidate.bio.to_lowercase().contains(query) {
        score += BIO_POINTS;
    }

    let skill_hits = candidate
        .skills
        .iter()
        .filter(|skill| skill.to_lowercase().contains(query))
        .count() as u32;

    score + skill_hits * SKILL_POINTS
}
