use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::skills::SkillSet;

/// Candidate availability for new work
///
/// Deserializes strictly (`available` | `busy`); candidate records go
/// through the lenient [`From<String>`] mapping instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Busy,
}

impl Availability {
    pub fn is_available(self) -> bool {
        self == Availability::Available
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
        }
    }
}

impl From<String> for Availability {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("available") {
            Availability::Available
        } else {
            Availability::Busy
        }
    }
}

/// Read-only projection of a candidate profile
///
/// Rows from the data layer may carry `null` for any field; those fall back
/// to the field's default rather than rejecting the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(default, deserialize_with = "lenient_availability")]
    pub availability: Availability,
    #[serde(rename = "expectedSalary", default, deserialize_with = "null_as_default")]
    pub expected_salary: String,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certificates: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected a string or number id, got {}", other))),
    }
}

/// Unknown values count as busy; `null` falls back to the default
fn lenient_availability<'de, D>(deserializer: D) -> Result<Availability, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Availability::default(),
        Value::String(s) => Availability::from(s),
        _ => Availability::Busy,
    })
}

impl Candidate {
    /// Lowercased title, bio and skills used for keyword classification
    pub fn profile_text(&self) -> String {
        format!("{} {} {}", self.title, self.bio, self.skills.joined()).to_lowercase()
    }
}

/// Breakdown of how a candidate's skills matched a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(rename = "exactMatches")]
    pub exact_matches: u32,
    #[serde(rename = "partialMatches")]
    pub partial_matches: u32,
    #[serde(rename = "relatedMatches")]
    pub related_matches: u32,
}

impl MatchDetails {
    pub fn total(&self) -> u32 {
        self.exact_matches + self.partial_matches + self.related_matches
    }
}

/// Scored skill match for a single candidate
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "matchDetails")]
    pub match_details: MatchDetails,
}

/// Candidate returned by text search along with its relevance
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub relevance: u32,
}

/// Number of candidates assigned to one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub icon: String,
    pub count: usize,
}

/// Point weights per match kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub exact: u32,
    pub partial: u32,
    pub related: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact: 3,
            partial: 2,
            related: 1,
        }
    }
}
