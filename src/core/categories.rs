//! Keyword-based professional categorization of candidates.
//!
//! The taxonomy is an ordered rule list: the first category with a keyword
//! found in the candidate's title, bio or skills wins, and everything else
//! lands in the catch-all "Others" bucket.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::models::{Candidate, CategoryCount};

pub const OTHERS: &str = "Others";

/// One taxonomy entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub keywords: &'static [&'static str],
}

const OTHERS_CATEGORY: Category = Category {
    name: OTHERS,
    icon: "users",
    keywords: &[],
};

/// Declaration order is significant.
const STANDARD_CATEGORIES: &[Category] = &[
    Category {
        name: "Full Stack Developer",
        icon: "layers",
        keywords: &["full stack", "fullstack", "full-stack", "mern", "mean stack"],
    },
    Category {
        name: "Frontend Developer",
        icon: "monitor",
        keywords: &["frontend", "front-end", "front end", "react", "angular", "vue", "ui developer"],
    },
    Category {
        name: "Backend Developer",
        icon: "server",
        keywords: &["backend", "back-end", "back end", "node", "django", "spring", "laravel", "api developer"],
    },
    Category {
        name: "Mobile Developer",
        icon: "smartphone",
        keywords: &["mobile", "android", "ios", "flutter", "react native", "swift", "kotlin"],
    },
    Category {
        name: "Data Scientist",
        icon: "bar-chart",
        keywords: &["data scien", "machine learning", "deep learning", "data analyst", "tensorflow", "pytorch", "pandas"],
    },
    Category {
        name: "DevOps Engineer",
        icon: "cloud",
        keywords: &["devops", "kubernetes", "docker", "terraform", "ci/cd", "site reliability", "cloud engineer"],
    },
    Category {
        name: "UI/UX Designer",
        icon: "pen-tool",
        keywords: &["ui/ux", "ux designer", "ui designer", "user experience", "product designer", "figma"],
    },
    Category {
        name: "QA Engineer",
        icon: "check-circle",
        keywords: &["qa ", "quality assurance", "test automation", "tester", "selenium", "cypress"],
    },
    Category {
        name: "Project Manager",
        icon: "briefcase",
        keywords: &["project manager", "product manager", "scrum master", "program manager"],
    },
    Category {
        name: "Security Engineer",
        icon: "shield",
        keywords: &["security", "cyber", "penetration", "infosec"],
    },
];

static STANDARD_TAXONOMY: Lazy<Arc<CategoryTaxonomy>> =
    Lazy::new(|| Arc::new(CategoryTaxonomy::new(STANDARD_CATEGORIES.to_vec())));

/// Category totals across a candidate collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub categories: Vec<CategoryCount>,
    pub total_candidates: usize,
}

/// Ordered keyword taxonomy, always terminated by "Others"
#[derive(Debug, Clone)]
pub struct CategoryTaxonomy {
    categories: Vec<Category>,
}

impl CategoryTaxonomy {
    /// Build a taxonomy; any caller-supplied "Others" entry is replaced by
    /// the keyword-less catch-all at the end
    pub fn new(mut categories: Vec<Category>) -> Self {
        categories.retain(|c| c.name != OTHERS);
        categories.push(OTHERS_CATEGORY);
        Self { categories }
    }

    /// The built-in taxonomy, constructed once per process
    pub fn standard() -> Arc<CategoryTaxonomy> {
        Arc::clone(&STANDARD_TAXONOMY)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn ruled(&self) -> &[Category] {
        &self.categories[..self.categories.len() - 1]
    }

    fn others_index(&self) -> usize {
        self.categories.len() - 1
    }

    /// Index of the first category matching a lowercase profile text
    fn classify_text(&self, text: &str) -> usize {
        // trailing space lets word-terminated keywords ("qa ") match at the end
        let text = format!("{} ", text);
        self.ruled()
            .iter()
            .position(|category| category.keywords.iter().any(|kw| text.contains(kw)))
            .unwrap_or_else(|| self.others_index())
    }

    /// Assign a candidate to exactly one category
    pub fn classify(&self, candidate: &Candidate) -> &Category {
        &self.categories[self.classify_text(&candidate.profile_text())]
    }

    /// Count candidates per category
    ///
    /// Only non-empty categories are returned, largest first, with "Others"
    /// always last.
    pub fn summarize<'a, I>(&self, candidates: I) -> CategorySummary
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        let mut counts = vec![0usize; self.categories.len()];
        let mut total_candidates = 0;

        for candidate in candidates {
            counts[self.classify_text(&candidate.profile_text())] += 1;
            total_candidates += 1;
        }

        let others = self.others_index();
        let mut ranked: Vec<(usize, usize)> = counts
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect();

        // stable: ties keep taxonomy order
        ranked.sort_by_key(|&(index, count)| (index == others, std::cmp::Reverse(count)));

        let categories = ranked
            .into_iter()
            .map(|(index, count)| {
                let category = &self.categories[index];
                CategoryCount {
                    name: category.name.to_string(),
                    icon: category.icon.to_string(),
                    count,
                }
            })
            .collect();

        CategorySummary {
            categories,
            total_candidates,
        }
    }

    /// Candidates classified into the named category (case-insensitive)
    pub fn filter_by_category<'a>(
        &self,
        name: &str,
        candidates: &'a [Candidate],
    ) -> Vec<&'a Candidate> {
        candidates
            .iter()
            .filter(|candidate| self.classify(candidate).name.eq_ignore_ascii_case(name.trim()))
            .collect()
    }
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self::new(STANDARD_CATEGORIES.to_vec())
    }
}
