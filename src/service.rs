use std::sync::Arc;

use validator::Validate;

use crate::config::Settings;
use crate::core::{
    CategoryTaxonomy, RelatednessTable, SearchCriteria, SearchFilters, SearchRanker, SkillMatcher,
};
use crate::core::matcher::newest_first;
use crate::error::Result;
use crate::models::{
    Candidate, CategorySummaryResponse, SearchRequest, SearchResponse, SkillMatchRequest,
    SkillMatchResponse,
};

/// Entry point for the API layer
///
/// Holds the configured matcher, ranker and taxonomy. Candidates are fetched
/// by the caller and handed in per request; nothing here keeps state between
/// calls, so one instance can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CandidateService {
    matcher: SkillMatcher,
    ranker: SearchRanker,
    taxonomy: Arc<CategoryTaxonomy>,
}

impl CandidateService {
    pub fn new(matcher: SkillMatcher, ranker: SearchRanker, taxonomy: Arc<CategoryTaxonomy>) -> Self {
        Self {
            matcher,
            ranker,
            taxonomy,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let weights = settings.scoring_weights();

        tracing::info!(
            "Candidate service initialized (match limit: {}, search limit: {}, weights: {:?})",
            settings.matching.match_limit,
            settings.matching.search_limit,
            weights
        );

        Self::new(
            SkillMatcher::new(weights, RelatednessTable::standard(), settings.matching.match_limit),
            SearchRanker::new(settings.matching.search_limit),
            CategoryTaxonomy::standard(),
        )
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }

    /// Rank candidates by how well their skills match the requested ones
    pub fn match_skills(
        &self,
        req: &SkillMatchRequest,
        candidates: Vec<Candidate>,
    ) -> Result<SkillMatchResponse> {
        if let Err(errors) = req.validate() {
            tracing::info!("Validation failed for skill match request: {:?}", errors);
            return Err(errors.into());
        }

        tracing::info!(
            "Matching {} candidates against skills {:?}",
            candidates.len(),
            req.skills.as_slice()
        );

        let outcome = self.matcher.find_matches(&req.skills, candidates, req.limit);

        tracing::info!(
            "Returning {} matches (from {} candidates)",
            outcome.matches.len(),
            outcome.total_candidates
        );

        Ok(SkillMatchResponse {
            matches: outcome.matches,
            query_skills: req.skills.as_slice().to_vec(),
            total_candidates: outcome.total_candidates,
        })
    }

    /// Text search with optional structured filters
    pub fn search(&self, req: &SearchRequest, candidates: Vec<Candidate>) -> Result<SearchResponse> {
        if let Err(errors) = req.validate() {
            tracing::info!("Validation failed for search request: {:?}", errors);
            return Err(errors.into());
        }

        let criteria = SearchCriteria {
            query: req.query.clone(),
            filters: SearchFilters {
                location: req.location.clone(),
                experience: req.experience.clone(),
                availability: req.availability,
                salary: req.salary_range,
            },
        };

        let outcome = self.ranker.search(&criteria, candidates, req.limit);

        tracing::info!(
            "Search returned {} of {} candidates",
            outcome.hits.len(),
            outcome.total_candidates
        );

        Ok(SearchResponse {
            total_results: outcome.hits.len(),
            candidates: outcome.hits,
        })
    }

    /// Category breakdown of the whole candidate pool
    pub fn category_summary(&self, candidates: &[Candidate]) -> CategorySummaryResponse {
        let summary = self.taxonomy.summarize(candidates);

        tracing::debug!(
            "Categorized {} candidates into {} categories",
            summary.total_candidates,
            summary.categories.len()
        );

        CategorySummaryResponse {
            categories: summary.categories,
            total_candidates: summary.total_candidates,
        }
    }

    /// Candidates classified under `category`, newest first
    pub fn candidates_in_category(&self, category: &str, candidates: &[Candidate]) -> Vec<Candidate> {
        let mut selected: Vec<Candidate> = self
            .taxonomy
            .filter_by_category(category, candidates)
            .into_iter()
            .cloned()
            .collect();

        selected.sort_by(newest_first);
        selected
    }
}

impl Default for CandidateService {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
