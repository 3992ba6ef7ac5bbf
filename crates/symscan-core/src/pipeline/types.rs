use serde::{Deserialize, Serialize};

use crate::results::ResultSet;

/// Discrete stage of the remote detection pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PipelinePhase {
    #[default]
    Idle,
    Uploaded,
    Preprocessing,
    ModelLoading,
    Inferencing,
    FetchingResults,
    Complete,
    Failed,
}

impl PipelinePhase {
    /// A new file may be uploaded only before a run or after a failure.
    pub fn upload_enabled(self) -> bool {
        matches!(self, Self::Idle | Self::Failed)
    }

    /// True while remote steps are still outstanding.
    pub fn is_running(self) -> bool {
        matches!(
            self,
            Self::Uploaded
                | Self::Preprocessing
                | Self::ModelLoading
                | Self::Inferencing
                | Self::FetchingResults
        )
    }
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Uploaded => write!(f, "Uploaded"),
            Self::Preprocessing => write!(f, "Preprocessing"),
            Self::ModelLoading => write!(f, "Loading model"),
            Self::Inferencing => write!(f, "Running inference"),
            Self::FetchingResults => write!(f, "Fetching results"),
            Self::Complete => write!(f, "Complete"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// One of the four remote calls issued after a successful upload, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineStep {
    Preprocess,
    LoadModel,
    Inference,
    FetchResults,
}

impl PipelineStep {
    pub const SEQUENCE: [Self; 4] = [
        Self::Preprocess,
        Self::LoadModel,
        Self::Inference,
        Self::FetchResults,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Preprocess => "/preprocess",
            Self::LoadModel => "/load_model",
            Self::Inference => "/inference",
            Self::FetchResults => "/results",
        }
    }

    pub fn phase(self) -> PipelinePhase {
        match self {
            Self::Preprocess => PipelinePhase::Preprocessing,
            Self::LoadModel => PipelinePhase::ModelLoading,
            Self::Inference => PipelinePhase::Inferencing,
            Self::FetchResults => PipelinePhase::FetchingResults,
        }
    }

    pub fn status_message(self) -> &'static str {
        match self {
            Self::Preprocess => "Preprocessing...",
            Self::LoadModel => "Loading model...",
            Self::Inference => "Running inference...",
            Self::FetchResults => "Fetching results...",
        }
    }
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preprocess => write!(f, "Preprocessing"),
            Self::LoadModel => write!(f, "Load model"),
            Self::Inference => write!(f, "Inference"),
            Self::FetchResults => write!(f, "Fetch results"),
        }
    }
}

pub const STATUS_UPLOADED: &str = "File uploaded";
pub const STATUS_UPLOAD_FAILED: &str = "Upload failed";
pub const STATUS_COMPLETE: &str = "Inference complete. Results ready.";

/// Identifies one pipeline run. Issued in increasing order, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(pub u64);

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Response of the upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl UploadOutcome {
    pub const COMPLETE: &'static str = "Complete";

    pub fn complete(filename: impl Into<String>) -> Self {
        Self {
            status: Self::COMPLETE.to_string(),
            error: None,
            filename: Some(filename.into()),
        }
    }

    /// Client-side failure, e.g. the transport broke before a response arrived.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: "failed".to_string(),
            error: Some(message.into()),
            filename: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::COMPLETE
    }
}

/// Progress of one run, emitted by the step driver and applied to the session.
#[derive(Clone, Debug)]
pub struct PipelineEvent {
    pub run: RunId,
    pub kind: PipelineEventKind,
}

#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum PipelineEventKind {
    /// Emitted before the step's remote call is issued.
    StepStarted(PipelineStep),
    StepFinished(PipelineStep),
    Completed(ResultSet),
    Failed { step: PipelineStep, message: String },
}

impl PipelineEvent {
    pub fn new(run: RunId, kind: PipelineEventKind) -> Self {
        Self { run, kind }
    }
}
