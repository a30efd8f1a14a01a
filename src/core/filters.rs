use serde::{Deserialize, Serialize};

use crate::models::{Availability, Candidate};

/// Coarse expected-salary bracket
///
/// Matching is a substring heuristic over free-text salary fields, so
/// "170k" also falls into the 70k-100k bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryBracket {
    #[serde(rename = "under-30k")]
    Under30k,
    #[serde(rename = "30k-50k")]
    From30kTo50k,
    #[serde(rename = "50k-70k")]
    From50kTo70k,
    #[serde(rename = "70k-100k")]
    From70kTo100k,
    #[serde(rename = "100k+")]
    Over100k,
}

impl SalaryBracket {
    /// Substrings that place a salary text in this bracket
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            SalaryBracket::Under30k => &["10", "15", "20", "25"],
            SalaryBracket::From30kTo50k => &["30", "35", "40", "45"],
            SalaryBracket::From50kTo70k => &["50", "55", "60", "65"],
            SalaryBracket::From70kTo100k => &["70", "75", "80", "85", "90", "95"],
            SalaryBracket::Over100k => &["100", "120", "150", "200"],
        }
    }

    #[inline]
    pub fn matches(self, salary_text: &str) -> bool {
        let salary = salary_text.to_lowercase();
        self.markers().iter().any(|marker| salary.contains(marker))
    }
}

/// Structured search filters; `None` means "don't filter"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub location: Option<String>,
    pub experience: Option<String>,
    pub availability: Option<Availability>,
    pub salary: Option<SalaryBracket>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.experience.is_none()
            && self.availability.is_none()
            && self.salary.is_none()
    }
}

/// Check if a candidate passes every structured filter
///
/// - location: case-insensitive substring
/// - experience: exact level
/// - availability: exact
/// - salary: bracket marker heuristic
#[inline]
pub fn matches_filters(candidate: &Candidate, filters: &SearchFilters) -> bool {
    if let Some(location) = non_blank(&filters.location) {
        if !candidate
            .location
            .to_lowercase()
            .contains(&location.to_lowercase())
        {
            return false;
        }
    }

    if let Some(experience) = non_blank(&filters.experience) {
        if candidate.experience != experience {
            return false;
        }
    }

    if let Some(availability) = filters.availability {
        if candidate.availability != availability {
            return false;
        }
    }

    if let Some(bracket) = filters.salary {
        if !bracket.matches(&candidate.expected_salary) {
            return false;
        }
    }

    true
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
