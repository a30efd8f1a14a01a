use serde::Serialize;

use crate::models::domain::{CategoryCount, MatchResult, SearchHit};

/// Response for a skill match
#[derive(Debug, Clone, Serialize)]
pub struct SkillMatchResponse {
    pub matches: Vec<MatchResult>,
    #[serde(rename = "querySkills")]
    pub query_skills: Vec<String>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for a text search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub candidates: Vec<SearchHit>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Category breakdown of the candidate pool
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummaryResponse {
    pub categories: Vec<CategoryCount>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}
