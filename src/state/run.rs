// src/state/run.rs
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, error, info, warn};

use crate::analysis::AnalysisResult;
use crate::client::{BackendClient, ClientError, RunResponse};

/// Banner text for failures the backend did not explain.
pub const GENERIC_FAILURE: &str = "❌ Something went wrong running the analysis.";

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(AnalysisResult),
    /// The backend answered with an explicit error message.
    Rejected(String),
    /// Transport failure or anything else unexpected; details are in the log.
    Crashed,
}

/// Upload, then trigger the analysis. Runs on the worker thread.
pub fn execute(client: &BackendClient, resume: &Path) -> RunOutcome {
    match client.upload_resume(resume) {
        Ok(receipt) => debug!(message = ?receipt.message, "upload accepted"),
        Err(ClientError::Backend(message)) => {
            warn!(%message, "backend rejected upload");
            return RunOutcome::Rejected(message);
        }
        Err(e) => {
            error!(error = %e, "resume upload failed");
            return RunOutcome::Crashed;
        }
    }

    match client.run_analysis() {
        Ok(RunResponse::Completed(result)) => {
            if result.is_empty() {
                warn!("analysis completed without any sections");
            } else {
                info!(sections = ?result.keys().collect::<Vec<_>>(), "analysis completed");
            }
            RunOutcome::Completed(result)
        }
        Ok(RunResponse::Failed(message)) => {
            warn!(%message, "backend reported analysis error");
            RunOutcome::Rejected(message)
        }
        Err(e) => {
            error!(error = %e, "analysis run failed");
            RunOutcome::Crashed
        }
    }
}

/// One in-flight run on a background thread.
pub struct RunJob {
    receiver: Receiver<RunOutcome>,
}

impl RunJob {
    /// `notify` is called after the outcome is sent, e.g. to request a repaint.
    pub fn spawn<F>(client: BackendClient, resume: PathBuf, notify: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let outcome = execute(&client, &resume);
            // The receiver is gone only if the app is shutting down.
            let _ = sender.send(outcome);
            notify();
        });
        Self { receiver }
    }

    /// Non-blocking. Drop the job once this returns `Some`; a finished worker
    /// reads as disconnected afterwards.
    pub fn poll(&self) -> Option<RunOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                error!("analysis worker exited without reporting");
                Some(RunOutcome::Crashed)
            }
        }
    }
}
