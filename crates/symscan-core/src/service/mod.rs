//! The remote detection backend, reachable only through fixed verbs and paths.

mod http;

use std::path::Path;

use crate::consts::SUPPORTED_EXTENSIONS;
use crate::error::{Result, SymscanError};
use crate::pipeline::{PipelineStep, UploadOutcome};
use crate::results::ResultSet;

pub use http::HttpDetectionService;

/// Remote operations the dashboard drives.
///
/// Every call blocks until the backend answers or the transport gives up.
pub trait DetectionService: Send {
    /// `GET /reset`: clear server-side uploads and outputs.
    fn reset(&self) -> Result<()>;

    /// `POST /upload` with the file as multipart field `file`.
    fn upload(&self, path: &Path) -> Result<UploadOutcome>;

    /// `GET` the step's path and check the acknowledgement.
    fn run_step(&self, step: PipelineStep) -> Result<()>;

    /// `GET /results`, decoded.
    fn fetch_results(&self) -> Result<ResultSet>;

    /// Raw bytes of a page image, given its locator from the result set.
    fn fetch_image(&self, locator: &str) -> Result<Vec<u8>>;
}

/// Reject files the upload endpoint does not accept, before any network traffic.
pub fn check_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(SymscanError::UnsupportedExtension(path.display().to_string()))
    }
}

/// Resolve a locator from the result set against the service base URL.
pub fn resolve_locator(base_url: &str, locator: &str) -> String {
    if locator.starts_with("http://") || locator.starts_with("https://") {
        return locator.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if locator.starts_with('/') {
        format!("{base}{locator}")
    } else {
        format!("{base}/{locator}")
    }
}

/// Inspect a step acknowledgement body.
///
/// The backend answers most failures with HTTP 200 and `"status": "failed"`
/// (or `"error"`). Non-JSON or status-less bodies count as success.
pub fn check_ack(path: &str, body: &str) -> Result<()> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Ok(());
    };
    let status = value.get("status").and_then(|s| s.as_str()).unwrap_or("");
    if !matches!(status, "failed" | "error") {
        return Ok(());
    }
    let message = ["error", "message"]
        .iter()
        .find_map(|k| value.get(*k).and_then(|v| v.as_str()))
        .unwrap_or(status)
        .to_string();
    Err(SymscanError::StepRejected {
        path: path.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_extension_case_insensitive() {
        assert!(check_extension(Path::new("plan.PDF")).is_ok());
        assert!(check_extension(Path::new("a/b/floor.dwfx")).is_ok());
        assert!(check_extension(Path::new("scan.jpeg")).is_ok());
    }

    #[test]
    fn test_check_extension_rejects_others() {
        assert!(matches!(
            check_extension(Path::new("notes.txt")),
            Err(SymscanError::UnsupportedExtension(_))
        ));
        assert!(check_extension(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_resolve_locator() {
        let base = "http://127.0.0.1:8000/";
        assert_eq!(
            resolve_locator(base, "/outputs/run/page_1.jpg"),
            "http://127.0.0.1:8000/outputs/run/page_1.jpg"
        );
        assert_eq!(
            resolve_locator(base, "outputs/page_1.jpg"),
            "http://127.0.0.1:8000/outputs/page_1.jpg"
        );
        assert_eq!(
            resolve_locator(base, "https://cdn.example.com/p.jpg"),
            "https://cdn.example.com/p.jpg"
        );
    }

    #[test]
    fn test_check_ack() {
        assert!(check_ack("/preprocess", r#"{"status":"success","pages":2}"#).is_ok());
        assert!(check_ack("/load_model", r#"{"status":"ok"}"#).is_ok());
        assert!(check_ack("/inference", "not json").is_ok());
        assert!(check_ack("/inference", "").is_ok());

        let err = check_ack("/inference", r#"{"status":"failed","error":"Model not loaded"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Model not loaded"), "got: {err}");

        let err = check_ack("/reset", r#"{"status":"error","message":"busy"}"#).unwrap_err();
        assert!(err.to_string().contains("busy"), "got: {err}");
    }
}
