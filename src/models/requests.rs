use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::filters::SalaryBracket;
use crate::core::skills::SkillSet;
use crate::models::domain::Availability;

/// Request to rank candidates by skill match
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SkillMatchRequest {
    /// Accepts a list, a JSON-encoded list or a comma separated string
    #[serde(default)]
    pub skills: SkillSet,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request to search candidates by text and filters
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(max = 200))]
    #[serde(default, alias = "q")]
    pub query: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub location: Option<String>,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(rename = "salaryRange", default)]
    pub salary_range: Option<SalaryBracket>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<usize>,
}
