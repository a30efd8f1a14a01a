//! Talent Match - skill matching and categorization engine for the talent marketplace
//!
//! This library scores candidates' skills against a recruiter's query, ranks
//! free-text searches, and sorts candidates into professional categories.
//! Fetching candidates and serving HTTP are left to the caller.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod service;
pub mod telemetry;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{CategoryTaxonomy, RelatednessTable, SearchRanker, SkillMatcher, SkillSet};
pub use error::ServiceError;
pub use models::{Availability, Candidate, MatchResult, SearchRequest, SkillMatchRequest};
pub use service::CandidateService;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let skills = SkillSet::parse("rust, go");
        assert_eq!(skills.len(), 2);
        assert!(RelatednessTable::standard().are_related("go", "golang"));
    }
}
