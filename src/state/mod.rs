// src/state/mod.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::analysis::result::DEFAULT_SECTION;
use crate::analysis::AnalysisResult;
use crate::render::{RuleTable, SectionView};
use crate::utils::format_tab_label;

pub mod run;

pub use run::{RunJob, RunOutcome, GENERIC_FAILURE};

pub const MISSING_FILE_PROMPT: &str = "Please upload your resume first.";

/// A result section with its view decided once, when the run finished.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub key: String,
    pub label: String,
    /// Raw payload as received; this is what gets downloaded.
    pub payload: String,
    pub view: SectionView,
}

#[derive(Debug, Clone)]
pub struct CompletedRun {
    pub sections: Vec<RenderedSection>,
    pub finished_at: DateTime<Local>,
}

impl CompletedRun {
    pub fn new(result: AnalysisResult, rules: &RuleTable) -> Self {
        let sections = result
            .iter()
            .map(|section| RenderedSection {
                key: section.key.clone(),
                label: format_tab_label(&section.key),
                payload: section.payload.clone(),
                view: rules.classify(&section.key, &section.payload),
            })
            .collect();

        Self {
            sections,
            finished_at: Local::now(),
        }
    }
}

// idle -> loading -> {succeeded, failed}; a new run may start from any state but loading
#[derive(Debug, Clone)]
pub enum RunState {
    Idle,
    Loading,
    Succeeded(CompletedRun),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunRequest {
    Started(PathBuf),
    AlreadyRunning,
    MissingFile,
}

#[derive(Debug)]
pub struct AppState {
    pub selected_file: Option<PathBuf>,
    pub run: RunState,
    pub active_tab: String,

    // Modals
    pub prompt: Option<String>,
    pub error_message: Option<String>,

    rules: RuleTable,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selected_file: None,
            run: RunState::Idle,
            active_tab: DEFAULT_SECTION.to_string(),
            prompt: None,
            error_message: None,
            rules: RuleTable::default(),
        }
    }

    pub fn select_file(&mut self, path: PathBuf) {
        debug!(file = %path.display(), "resume selected");
        self.selected_file = Some(path);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.run, RunState::Loading)
    }

    /// Moves to `Loading` and hands back the file to upload. Leaves the state
    /// untouched when a run is in flight or no file is selected.
    pub fn begin_run(&mut self) -> RunRequest {
        if self.is_loading() {
            return RunRequest::AlreadyRunning;
        }
        let Some(path) = self.selected_file.clone() else {
            return RunRequest::MissingFile;
        };

        self.run = RunState::Loading;
        RunRequest::Started(path)
    }

    /// Applies a worker outcome. Returns false if no run was in flight.
    pub fn finish_run(&mut self, outcome: RunOutcome) -> bool {
        if !self.is_loading() {
            return false;
        }

        self.run = match outcome {
            RunOutcome::Completed(result) => {
                self.active_tab = DEFAULT_SECTION.to_string();
                RunState::Succeeded(CompletedRun::new(result, &self.rules))
            }
            RunOutcome::Rejected(message) => RunState::Failed(message),
            RunOutcome::Crashed => RunState::Failed(GENERIC_FAILURE.to_string()),
        };
        true
    }

    /// Sections to show as tabs; empty unless the last run succeeded.
    pub fn sections(&self) -> &[RenderedSection] {
        match &self.run {
            RunState::Succeeded(run) => run.sections.as_slice(),
            _ => &[],
        }
    }

    pub fn active_section(&self) -> Option<&RenderedSection> {
        self.sections().iter().find(|s| s.key == self.active_tab)
    }

    /// A prompt or error window is waiting to be dismissed.
    pub fn modal_open(&self) -> bool {
        self.prompt.is_some() || self.error_message.is_some()
    }

    pub fn error_banner(&self) -> Option<&str> {
        match &self.run {
            RunState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
