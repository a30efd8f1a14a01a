use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Related skills per key skill (synonyms and ecosystem neighbours).
/// Lookups are symmetric, so each pair only needs to be listed once.
const STANDARD_RELATIONS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "typescript", "ecmascript", "jquery", "es6"]),
    ("typescript", &["ts", "javascript"]),
    ("react", &["redux", "jsx", "next.js", "nextjs", "gatsby", "react native"]),
    ("angular", &["angularjs", "rxjs", "ngrx", "typescript"]),
    ("vue", &["vuex", "nuxt", "nuxt.js", "pinia"]),
    ("node", &["express", "nestjs", "koa", "npm", "fastify"]),
    ("nodejs", &["express", "nestjs", "koa", "npm", "fastify"]),
    ("python", &["django", "flask", "fastapi", "pandas", "numpy", "pytorch"]),
    ("java", &["spring", "spring boot", "hibernate", "maven", "gradle", "kotlin"]),
    ("c#", &[".net", "dotnet", "asp.net", "unity", "blazor"]),
    ("php", &["laravel", "symfony", "wordpress", "composer"]),
    ("ruby", &["rails", "ruby on rails", "sinatra"]),
    ("go", &["golang", "gin", "goroutines"]),
    ("rust", &["cargo", "tokio", "actix", "wasm"]),
    ("html", &["css", "sass", "scss", "bootstrap", "tailwind"]),
    ("css", &["sass", "scss", "less", "tailwind", "bootstrap"]),
    ("sql", &["mysql", "postgresql", "postgres", "sqlite", "oracle", "sql server"]),
    ("mongodb", &["mongoose", "nosql"]),
    ("nosql", &["cassandra", "dynamodb", "redis", "couchdb"]),
    ("aws", &["ec2", "s3", "lambda", "cloudformation", "amazon web services"]),
    ("azure", &["microsoft azure", "azure devops"]),
    ("gcp", &["google cloud", "bigquery", "firebase"]),
    ("docker", &["kubernetes", "k8s", "containers", "docker compose"]),
    ("kubernetes", &["k8s", "helm", "openshift"]),
    ("devops", &["ci/cd", "jenkins", "terraform", "ansible", "github actions"]),
    ("machine learning", &["ml", "deep learning", "tensorflow", "pytorch", "scikit-learn"]),
    ("data science", &["pandas", "numpy", "statistics", "r", "jupyter"]),
    ("android", &["kotlin", "java", "jetpack compose"]),
    ("ios", &["swift", "objective-c", "swiftui", "xcode"]),
    ("flutter", &["dart"]),
    ("figma", &["sketch", "adobe xd", "ui design", "prototyping"]),
    ("ui/ux", &["ux", "ui", "user research", "wireframing", "figma"]),
    ("testing", &["jest", "cypress", "selenium", "mocha", "pytest", "qa"]),
    ("graphql", &["apollo", "rest"]),
    ("git", &["github", "gitlab", "bitbucket"]),
];

static STANDARD_TABLE: Lazy<Arc<RelatednessTable>> =
    Lazy::new(|| Arc::new(RelatednessTable::from_pairs(STANDARD_RELATIONS.iter().copied())));

/// Static mapping from a skill to its related skills
///
/// Keys and entries are stored lowercase; lookups expect lowercase input.
#[derive(Debug, Clone, Default)]
pub struct RelatednessTable {
    relations: HashMap<String, Vec<String>>,
}

impl RelatednessTable {
    /// The built-in table, constructed once per process
    pub fn standard() -> Arc<RelatednessTable> {
        Arc::clone(&STANDARD_TABLE)
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut relations: HashMap<String, Vec<String>> = HashMap::new();

        for (skill, related) in pairs {
            let entry = relations.entry(skill.to_lowercase()).or_default();
            for other in related {
                let other = other.to_lowercase();
                if !entry.contains(&other) {
                    entry.push(other);
                }
            }
        }

        Self { relations }
    }

    /// True if either skill lists the other as related
    pub fn are_related(&self, a: &str, b: &str) -> bool {
        self.lists(a, b) || self.lists(b, a)
    }

    fn lists(&self, key: &str, other: &str) -> bool {
        self.relations
            .get(key)
            .map_or(false, |related| related.iter().any(|r| r == other))
    }

    /// All skills related to `skill` in either direction, sorted
    pub fn related_to(&self, skill: &str) -> Vec<String> {
        let skill = skill.to_lowercase();
        let mut related: Vec<String> = self
            .relations
            .get(&skill)
            .cloned()
            .unwrap_or_default();

        for (key, entries) in &self.relations {
            if entries.iter().any(|e| *e == skill) && !related.contains(key) {
                related.push(key.clone());
            }
        }

        related.sort();
        related
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_direction() {
        let table = RelatednessTable::standard();
        assert!(table.are_related("node", "express"));
    }

    #[test]
    fn test_reverse_direction() {
        let table = RelatednessTable::standard();
        assert!(table.are_related("express", "node"));
        assert!(table.are_related("django", "python"));
    }

    #[test]
    fn test_unrelated() {
        let table = RelatednessTable::standard();
        assert!(!table.are_related("react", "express"));
        assert!(!table.are_related("node", "mongodb"));
        assert!(!table.are_related("react", "mongodb"));
    }

    #[test]
    fn test_related_to_is_symmetric_union() {
        let table = RelatednessTable::from_pairs([("a", &["b", "c"][..]), ("d", &["a"][..])]);
        assert_eq!(table.related_to("A"), vec!["b", "c", "d"]);
        assert_eq!(table.related_to("b"), vec!["a"]);
        assert!(table.related_to("zzz").is_empty());
    }

    #[test]
    fn test_standard_table_is_shared() {
        let first = RelatednessTable::standard();
        let second = RelatednessTable::standard();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!first.is_empty());
    }
}
