use std::path::Path;

use reqwest::blocking::{multipart, Client, Response};
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::consts::UPLOAD_FIELD;
use crate::error::{Result, SymscanError};
use crate::pipeline::{PipelineStep, UploadOutcome};
use crate::results::ResultSet;

use super::{check_ack, check_extension, resolve_locator, DetectionService};

/// Blocking HTTP client for the detection backend.
pub struct HttpDetectionService {
    client: Client,
    base_url: String,
}

impl HttpDetectionService {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        resolve_locator(&self.base_url, path)
    }

    fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send()?;
        ensure_success(path, response)
    }
}

fn ensure_success(path: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SymscanError::UnexpectedStatus {
            path: path.to_string(),
            status: status.as_u16(),
        })
    }
}

impl DetectionService for HttpDetectionService {
    fn reset(&self) -> Result<()> {
        let body = self.get("/reset")?.text()?;
        check_ack("/reset", &body)?;
        info!("Server storage reset");
        Ok(())
    }

    fn upload(&self, path: &Path) -> Result<UploadOutcome> {
        check_extension(path)?;
        let form = multipart::Form::new().file(UPLOAD_FIELD, path)?;
        info!(file = %path.display(), "Uploading");
        let response = self.client.post(self.url("/upload")).multipart(form).send()?;
        let outcome = ensure_success("/upload", response)?.json::<UploadOutcome>()?;
        Ok(outcome)
    }

    fn run_step(&self, step: PipelineStep) -> Result<()> {
        let body = self.get(step.path())?.text()?;
        check_ack(step.path(), &body)
    }

    fn fetch_results(&self) -> Result<ResultSet> {
        let body = self.get(PipelineStep::FetchResults.path())?.text()?;
        ResultSet::from_json(&body)
    }

    fn fetch_image(&self, locator: &str) -> Result<Vec<u8>> {
        let bytes = self.get(locator)?.bytes()?;
        Ok(bytes.to_vec())
    }
}
