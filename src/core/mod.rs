// Core algorithm exports
pub mod categories;
pub mod filters;
pub mod matcher;
pub mod relatedness;
pub mod scoring;
pub mod search;
pub mod skills;

pub use categories::{Category, CategorySummary, CategoryTaxonomy, OTHERS};
pub use filters::{matches_filters, SalaryBracket, SearchFilters};
pub use matcher::{MatchOutcome, SkillMatcher};
pub use relatedness::RelatednessTable;
pub use scoring::{calculate_skill_match, classify_pair, SkillMatch, SkillRelation};
pub use search::{relevance_score, SearchCriteria, SearchOutcome, SearchRanker};
pub use skills::SkillSet;
