use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of skills kept per set
pub const MAX_SKILLS: usize = 20;

/// Maximum length (in characters) of a single skill entry
pub const MAX_SKILL_LEN: usize = 50;

const EMPTY_ARRAY_MARKER: &str = "[]";
const DELIMITERS: [char; 4] = [',', ';', '|', '\n'];

/// Normalized, ordered list of skills
///
/// Entries are trimmed, between 1 and 50 characters long, and there are never
/// more than 20 of them. Original case is kept for display; comparisons go
/// through [`SkillSet::lowercased`].
///
/// Deserializes from any JSON shape (array, JSON-encoded string, delimited
/// string, null) and never fails doing so.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Vec<String>")]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    /// Build a skill set from an already-split list
    pub fn from_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::finish(items.into_iter().map(|s| s.as_ref().to_string()))
    }

    /// Parse free text, a JSON-encoded array, or a delimited list
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == EMPTY_ARRAY_MARKER {
            return Self::default();
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            match serde_json::from_str::<Vec<Value>>(trimmed) {
                Ok(values) => return Self::from_values(&values),
                Err(e) => {
                    tracing::debug!("Malformed JSON skill list {:?}, splitting instead: {}", trimmed, e);
                    let inner = trimmed[1..trimmed.len() - 1].replace(['"', '\''], "");
                    return Self::split_delimited(&inner);
                }
            }
        }

        Self::split_delimited(trimmed)
    }

    /// Normalize a raw JSON value of unknown shape
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Array(values) => Self::from_values(values),
            Value::String(raw) => Self::parse(raw),
            other => {
                tracing::debug!("Unsupported skill input {}, treating as empty", other);
                Self::default()
            }
        }
    }

    /// Normalize an optional raw value; absent input yields an empty set
    pub fn from_optional(value: Option<&Value>) -> Self {
        value.map(Self::from_value).unwrap_or_default()
    }

    fn from_values(values: &[Value]) -> Self {
        Self::finish(values.iter().filter_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => {
                tracing::debug!("Dropping non-scalar skill entry {}", other);
                None
            }
        }))
    }

    fn split_delimited(raw: &str) -> Self {
        Self::finish(raw.split(DELIMITERS).map(str::to_string))
    }

    fn finish(entries: impl Iterator<Item = String>) -> Self {
        let skills = entries
            .map(|s| s.trim().to_string())
            .filter(|s| {
                let len = s.chars().count();
                len > 0 && len <= MAX_SKILL_LEN
            })
            .take(MAX_SKILLS)
            .collect();

        SkillSet(skills)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Lowercased comparison keys, in order
    pub fn lowercased(&self) -> Vec<String> {
        self.0.iter().map(|s| s.to_lowercase()).collect()
    }

    /// Skills joined with a single space, as used for text classification
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for SkillSet {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl From<&str> for SkillSet {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(skills: SkillSet) -> Self {
        skills.0
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_null_are_empty() {
        assert!(SkillSet::from_optional(None).is_empty());
        assert!(SkillSet::from_value(&Value::Null).is_empty());
    }

    #[test]
    fn test_empty_string_and_marker() {
        assert!(SkillSet::parse("").is_empty());
        assert!(SkillSet::parse("   ").is_empty());
        assert!(SkillSet::parse("[]").is_empty());
        assert!(SkillSet::parse(" [] ").is_empty());
    }

    #[test]
    fn test_comma_split_trims() {
        let skills = SkillSet::parse(" React ,  Node.js,SQL ");
        assert_eq!(skills.as_slice(), &["React", "Node.js", "SQL"]);
    }

    #[test]
    fn test_other_delimiters() {
        let skills = SkillSet::parse("rust;go|python\nc++");
        assert_eq!(skills.as_slice(), &["rust", "go", "python", "c++"]);
    }

    #[test]
    fn test_json_array_string() {
        let skills = SkillSet::parse(r#"["React", "TypeScript"]"#);
        assert_eq!(skills.as_slice(), &["React", "TypeScript"]);
    }

    #[test]
    fn test_malformed_json_falls_back_to_split() {
        // no closing bracket, so this is a plain delimited string
        let skills = SkillSet::parse(r#"["React", "Node"#);
        assert_eq!(skills.len(), 2);

        let skills = SkillSet::parse("[React, 'Node', \"Go]");
        assert_eq!(skills.as_slice(), &["React", "Node", "Go"]);
    }

    #[test]
    fn test_native_array_stringifies_scalars() {
        let skills = SkillSet::from_value(&json!(["Rust", 5, true, null, {"a": 1}, ["x"]]));
        assert_eq!(skills.as_slice(), &["Rust", "5", "true"]);
    }

    #[test]
    fn test_drops_empty_and_overlong_entries() {
        let long = "x".repeat(MAX_SKILL_LEN + 1);
        let exact = "y".repeat(MAX_SKILL_LEN);
        let skills = SkillSet::from_list(["", "  ", long.as_str(), exact.as_str(), "ok"]);
        assert_eq!(skills.as_slice(), &[exact.as_str(), "ok"]);
    }

    #[test]
    fn test_caps_at_twenty_in_order() {
        let raw: Vec<String> = (0..30).map(|i| format!("skill{}", i)).collect();
        let skills = SkillSet::from_list(&raw);
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills.as_slice()[0], "skill0");
        assert_eq!(skills.as_slice()[19], "skill19");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = SkillSet::parse(" Docker | Kubernetes ;; AWS ");
        let twice = SkillSet::from_list(once.iter());
        assert_eq!(once, twice);

        let reparsed: SkillSet = serde_json::from_value(serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, reparsed);
    }

    #[test]
    fn test_other_json_types_are_empty() {
        assert!(SkillSet::from_value(&json!(42)).is_empty());
        assert!(SkillSet::from_value(&json!({"skills": ["a"]})).is_empty());
    }

    #[test]
    fn test_deserialize_from_any_shape() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default)]
            skills: SkillSet,
        }

        let from_array: Holder = serde_json::from_value(json!({"skills": ["A", "B"]})).unwrap();
        let from_string: Holder = serde_json::from_value(json!({"skills": "A, B"})).unwrap();
        let from_encoded: Holder = serde_json::from_value(json!({"skills": "[\"A\",\"B\"]"})).unwrap();
        let from_null: Holder = serde_json::from_value(json!({"skills": null})).unwrap();
        let missing: Holder = serde_json::from_value(json!({})).unwrap();

        assert_eq!(from_array.skills.as_slice(), &["A", "B"]);
        assert_eq!(from_string.skills, from_array.skills);
        assert_eq!(from_encoded.skills, from_array.skills);
        assert!(from_null.skills.is_empty());
        assert!(missing.skills.is_empty());
    }

    #[test]
    fn test_lowercased_keys() {
        let skills = SkillSet::from_list(["React", "AWS"]);
        assert_eq!(skills.lowercased(), vec!["react", "aws"]);
        assert_eq!(skills.joined(), "React AWS");
    }
}
