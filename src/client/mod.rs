// src/client/mod.rs
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{multipart, Client};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::analysis::AnalysisResult;

pub mod error;

pub use error::ClientError;

pub type Result<T> = std::result::Result<T, ClientError>;

/// What `/upload/` said about a stored file.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunResponse {
    Completed(AnalysisResult),
    /// The backend answered with an `error` field.
    Failed(String),
}

/// Blocking client for the two analysis endpoints. No timeout, no retry.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // The blocking client applies a 30s timeout unless told otherwise.
        let http = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path)
    }

    pub fn upload_resume(&self, path: &Path) -> Result<UploadReceipt> {
        let form = multipart::Form::new()
            .file("file", path)
            .map_err(|source| ClientError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(file = %path.display(), "uploading resume");
        let body = self
            .http
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()?
            .error_for_status()?
            .text()?;

        // Any 2xx counts as stored; the body is only read for optional fields.
        let Ok(object) = serde_json::from_str::<Map<String, Value>>(&body) else {
            debug!(body_len = body.len(), "upload reply carried no JSON object");
            return Ok(UploadReceipt { message: None });
        };
        if let Some(message) = error_message(&object) {
            return Err(ClientError::Backend(message));
        }

        let message = object.get("message").and_then(Value::as_str).map(str::to_string);
        if let Some(message) = &message {
            info!(%message, "resume uploaded");
        }
        Ok(UploadReceipt { message })
    }

    pub fn run_analysis(&self) -> Result<RunResponse> {
        debug!("triggering analysis run");
        let body = self
            .http
            .post(self.endpoint("run"))
            .send()?
            .error_for_status()?
            .json::<Value>()?;

        let object = into_object(body)?;
        match error_message(&object) {
            Some(message) => Ok(RunResponse::Failed(message)),
            None => Ok(RunResponse::Completed(AnalysisResult::from_json_map(object))),
        }
    }
}

fn into_object(body: Value) -> Result<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::InvalidBody(format!("expected a JSON object, got {other}"))),
    }
}

/// An `error` field counts only when it carries something: empty strings,
/// `false` and `null` are ignored.
fn error_message(object: &Map<String, Value>) -> Option<String> {
    match object.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::io::Write;

    fn resume_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .unwrap();
        file.write_all(b"%PDF-1.4 fake resume").unwrap();
        file
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = BackendClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("run"), "http://localhost:8000/run/");
    }

    #[test]
    fn test_upload_sends_multipart_file() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/upload/")
            .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file""#.into()),
                Matcher::Regex("fake resume".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "✅ Resume uploaded successfully"}"#)
            .create();

        let file = resume_file();
        let client = BackendClient::new(&server.url()).unwrap();
        let receipt = client.upload_resume(file.path()).unwrap();

        mock.assert();
        assert_eq!(receipt.message.as_deref(), Some("✅ Resume uploaded successfully"));
    }

    #[test]
    fn test_upload_missing_file() {
        let server = mockito::Server::new();
        let client = BackendClient::new(&server.url()).unwrap();
        let err = client.upload_resume(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, ClientError::Io { .. }));
    }

    #[test]
    fn test_upload_server_error_status() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/upload/").with_status(500).create();

        let file = resume_file();
        let client = BackendClient::new(&server.url()).unwrap();
        let err = client.upload_resume(file.path()).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[test]
    fn test_upload_error_field() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/upload/")
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "disk full"}"#)
            .create();

        let file = resume_file();
        let client = BackendClient::new(&server.url()).unwrap();
        match client.upload_resume(file.path()) {
            Err(ClientError::Backend(message)) => assert_eq!(message, "disk full"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_upload_plain_text_reply() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/upload/").with_body("OK").create();

        let file = resume_file();
        let client = BackendClient::new(&server.url()).unwrap();
        assert_eq!(
            client.upload_resume(file.path()).unwrap(),
            UploadReceipt { message: None }
        );
    }

    #[test]
    fn test_upload_no_content_reply() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/upload/").with_status(204).create();

        let file = resume_file();
        let client = BackendClient::new(&server.url()).unwrap();
        assert_eq!(
            client.upload_resume(file.path()).unwrap(),
            UploadReceipt { message: None }
        );
    }

    #[test]
    fn test_run_completed_keeps_order() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/run/")
            .with_header("content-type", "application/json")
            .with_body(r#"{"resume_summary": "{}", "jobs": "[]", "ats": "{\"ATS Score\": 90}"}"#)
            .create();

        let client = BackendClient::new(&server.url()).unwrap();
        let response = client.run_analysis().unwrap();
        mock.assert();

        let RunResponse::Completed(result) = response else {
            panic!("expected completed run");
        };
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["resume_summary", "jobs", "ats"]);
        assert_eq!(result.get("ats").unwrap().payload, r#"{"ATS Score": 90}"#);
    }

    #[test]
    fn test_run_error_field() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/run/")
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "parse failed"}"#)
            .create();

        let client = BackendClient::new(&server.url()).unwrap();
        assert_eq!(
            client.run_analysis().unwrap(),
            RunResponse::Failed("parse failed".to_string())
        );
    }

    #[test]
    fn test_run_rejects_non_object() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/run/")
            .with_header("content-type", "application/json")
            .with_body("[1, 2]")
            .create();

        let client = BackendClient::new(&server.url()).unwrap();
        assert!(matches!(client.run_analysis(), Err(ClientError::InvalidBody(_))));
    }

    #[test]
    fn test_error_message_truthiness() {
        let object = |v: Value| into_object(v).unwrap();
        assert_eq!(error_message(&object(serde_json::json!({"error": ""}))), None);
        assert_eq!(error_message(&object(serde_json::json!({"error": null}))), None);
        assert_eq!(error_message(&object(serde_json::json!({"ats": "x"}))), None);
        assert_eq!(
            error_message(&object(serde_json::json!({"error": {"code": 3}}))),
            Some(r#"{"code":3}"#.to_string())
        );
    }
}
