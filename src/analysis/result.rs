// src/analysis/result.rs
use serde_json::{Map, Value};

pub const RESUME_SUMMARY: &str = "resume_summary";
pub const ATS: &str = "ats";
pub const COVER_LETTER: &str = "cover_letter";
pub const INTERVIEW_QUESTIONS: &str = "interview_questions";
pub const OPTIMIZED_RESUME: &str = "optimized_resume";
pub const JOBS: &str = "jobs";

/// Tab selected when a fresh result arrives, whether or not the backend sent it.
pub const DEFAULT_SECTION: &str = RESUME_SUMMARY;

/// Leading marker the backend puts on a payload it failed to produce.
pub const ERROR_MARKER: &str = "❌";

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: String,
    pub payload: String,
}

/// Section payloads in the order the backend emitted them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    sections: Vec<Section>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_map(map: Map<String, Value>) -> Self {
        let sections = map
            .into_iter()
            .map(|(key, value)| {
                let payload = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                Section { key, payload }
            })
            .collect();
        Self { sections }
    }

    /// Inserts or replaces a section; a replaced section keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, payload: impl Into<String>) {
        let key = key.into();
        let payload = payload.into();
        match self.sections.iter_mut().find(|s| s.key == key) {
            Some(existing) => existing.payload = payload,
            None => self.sections.push(Section { key, payload }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keeps_backend_order() {
        let value = json!({
            "resume_summary": "a",
            "jobs": "b",
            "ats": "c",
            "cover_letter": "d",
        });
        let Value::Object(map) = value else { unreachable!() };

        let result = AnalysisResult::from_json_map(map);
        let keys: Vec<_> = result.keys().collect();
        assert_eq!(keys, vec!["resume_summary", "jobs", "ats", "cover_letter"]);
    }

    #[test]
    fn test_non_string_values_become_json_text() {
        let Value::Object(map) = json!({ "count": 3, "nested": { "a": [1, 2] } }) else {
            unreachable!()
        };

        let result = AnalysisResult::from_json_map(map);
        assert_eq!(result.get("count").unwrap().payload, "3");
        assert_eq!(result.get("nested").unwrap().payload, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut result = AnalysisResult::new();
        result.insert("jobs", "first");
        result.insert("ats", "{}");
        result.insert("jobs", "second");

        assert_eq!(result.len(), 2);
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["jobs", "ats"]);
        assert_eq!(result.get("jobs").unwrap().payload, "second");
    }
}
