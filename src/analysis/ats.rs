// src/analysis/ats.rs
use serde_json::Value;

pub const SCORE_FIELD: &str = "ATS Score";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Success,
    Warning,
    Danger,
}

impl ScoreTier {
    /// A missing score lands in `Danger`, same as any score below 60.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= 80.0 => ScoreTier::Success,
            Some(s) if s >= 60.0 => ScoreTier::Warning,
            _ => ScoreTier::Danger,
        }
    }
}

/// ATS evaluation as the backend encodes it:
/// `{"ATS Score": 72, "strengths": [...], "suggestions": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtsReport {
    pub score: Option<f64>,
    pub score_label: String,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AtsReport {
    /// Never fails on shape: anything missing or mistyped reads as empty.
    pub fn from_value(value: &Value) -> Self {
        let raw_score = value.get(SCORE_FIELD);
        let score = raw_score.and_then(|s| match s {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });
        let score_label = match raw_score {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => "—".to_string(),
        };

        Self {
            score,
            score_label,
            strengths: string_list(value.get("strengths")),
            suggestions: string_list(value.get("suggestions")),
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tier_thresholds() {
        for score in [80.0, 80.5, 95.0, 100.0] {
            assert_eq!(ScoreTier::from_score(Some(score)), ScoreTier::Success, "{score}");
        }
        for score in [60.0, 72.0, 79.99] {
            assert_eq!(ScoreTier::from_score(Some(score)), ScoreTier::Warning, "{score}");
        }
        for score in [59.99, 0.0, -5.0] {
            assert_eq!(ScoreTier::from_score(Some(score)), ScoreTier::Danger, "{score}");
        }
        assert_eq!(ScoreTier::from_score(None), ScoreTier::Danger);
    }

    #[test]
    fn test_report_from_backend_payload() {
        let value = json!({
            "ATS Score": 72,
            "strengths": ["clear formatting"],
            "suggestions": []
        });

        let report = AtsReport::from_value(&value);
        assert_eq!(report.score, Some(72.0));
        assert_eq!(report.score_label, "72");
        assert_eq!(report.tier(), ScoreTier::Warning);
        assert_eq!(report.strengths, vec!["clear formatting".to_string()]);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let report = AtsReport::from_value(&json!({ "ATS Score": 91 }));
        assert_eq!(report.tier(), ScoreTier::Success);
        assert!(report.strengths.is_empty());
        assert!(report.suggestions.is_empty());

        let report = AtsReport::from_value(&json!([1, 2, 3]));
        assert_eq!(report.score, None);
        assert_eq!(report.score_label, "—");
        assert_eq!(report.tier(), ScoreTier::Danger);
    }

    #[test]
    fn test_string_score_is_numeric() {
        let report = AtsReport::from_value(&json!({ "ATS Score": " 85 " }));
        assert_eq!(report.score, Some(85.0));
        assert_eq!(report.tier(), ScoreTier::Success);
    }
}
