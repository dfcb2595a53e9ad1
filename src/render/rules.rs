// src/render/rules.rs
use std::fmt;

use serde_json::Value;
use tracing::trace;

use super::SectionView;
use crate::analysis::result::{
    ATS, COVER_LETTER, ERROR_MARKER, INTERVIEW_QUESTIONS, JOBS, OPTIMIZED_RESUME, RESUME_SUMMARY,
};
use crate::analysis::AtsReport;

/// One entry of the dispatch table. Returns `None` to let the next rule try.
pub trait RenderRule {
    fn name(&self) -> &'static str;
    fn apply(&self, key: &str, payload: &str) -> Option<SectionView>;
}

fn parse_json(payload: &str) -> Option<Value> {
    serde_json::from_str(payload).ok()
}

pub struct ErrorMarkerRule;
impl RenderRule for ErrorMarkerRule {
    fn name(&self) -> &'static str {
        "error_marker"
    }

    fn apply(&self, _key: &str, payload: &str) -> Option<SectionView> {
        payload
            .starts_with(ERROR_MARKER)
            .then(|| SectionView::Warning(payload.to_string()))
    }
}

pub struct CoverLetterRule;
impl RenderRule for CoverLetterRule {
    fn name(&self) -> &'static str {
        "cover_letter"
    }

    fn apply(&self, key: &str, payload: &str) -> Option<SectionView> {
        (key == COVER_LETTER).then(|| SectionView::Markdown(payload.to_string()))
    }
}

pub struct AtsRule;
impl RenderRule for AtsRule {
    fn name(&self) -> &'static str {
        "ats"
    }

    fn apply(&self, key: &str, payload: &str) -> Option<SectionView> {
        if key != ATS {
            return None;
        }
        parse_json(payload).map(|value| SectionView::Ats(AtsReport::from_value(&value)))
    }
}

pub struct StructuredRule {
    keys: &'static [&'static str],
}

impl StructuredRule {
    pub const DEFAULT_KEYS: &'static [&'static str] =
        &[RESUME_SUMMARY, INTERVIEW_QUESTIONS, OPTIMIZED_RESUME, JOBS];

    pub fn new(keys: &'static [&'static str]) -> Self {
        Self { keys }
    }
}

impl Default for StructuredRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEYS)
    }
}

impl RenderRule for StructuredRule {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn apply(&self, key: &str, payload: &str) -> Option<SectionView> {
        if !self.keys.iter().any(|k| *k == key) {
            return None;
        }
        parse_json(payload).map(SectionView::JsonTree)
    }
}

pub struct VerbatimRule;
impl RenderRule for VerbatimRule {
    fn name(&self) -> &'static str {
        "verbatim"
    }

    fn apply(&self, _key: &str, payload: &str) -> Option<SectionView> {
        Some(SectionView::Verbatim(payload.to_string()))
    }
}

/// Ordered rules; the first one that matches decides the view.
pub struct RuleTable {
    rules: Vec<Box<dyn RenderRule + Send + Sync>>,
}

impl RuleTable {
    pub fn new(rules: Vec<Box<dyn RenderRule + Send + Sync>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn classify(&self, key: &str, payload: &str) -> SectionView {
        for rule in &self.rules {
            if let Some(view) = rule.apply(key, payload) {
                trace!(section = key, rule = rule.name(), view = view.kind(), "section classified");
                return view;
            }
        }
        SectionView::Verbatim(payload.to_string())
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ErrorMarkerRule),
            Box::new(CoverLetterRule),
            Box::new(AtsRule),
            Box::new(StructuredRule::default()),
            Box::new(VerbatimRule),
        ])
    }
}
