// src/analysis/mod.rs
pub mod ats;
pub mod result;

// Re-export commonly used types
pub use ats::{AtsReport, ScoreTier};
pub use result::AnalysisResult;
