// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Availability, Candidate, CategoryCount, MatchDetails, MatchResult, ScoringWeights, SearchHit};
pub use requests::{SearchRequest, SkillMatchRequest};
pub use responses::{CategorySummaryResponse, SearchResponse, SkillMatchResponse};
