mod orchestrator;
mod session;
mod state;
mod types;

pub use orchestrator::{reset_remote, run_steps};
pub use session::Session;
pub use state::PipelineState;
pub use types::{
    PipelineEvent, PipelineEventKind, PipelinePhase, PipelineStep, RunId, UploadOutcome,
    STATUS_COMPLETE, STATUS_UPLOADED, STATUS_UPLOAD_FAILED,
};
