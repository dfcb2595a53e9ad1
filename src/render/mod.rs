// src/render/mod.rs
pub mod rules;

use serde_json::Value;
use crate::analysis::AtsReport;

pub use rules::RuleTable;

/// How a single section payload is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView {
    /// Backend flagged this payload as a failure.
    Warning(String),
    Markdown(String),
    Ats(AtsReport),
    JsonTree(Value),
    Verbatim(String),
}

impl SectionView {
    pub fn kind(&self) -> &'static str {
        match self {
            SectionView::Warning(_) => "warning",
            SectionView::Markdown(_) => "markdown",
            SectionView::Ats(_) => "ats",
            SectionView::JsonTree(_) => "json_tree",
            SectionView::Verbatim(_) => "verbatim",
        }
    }
}
