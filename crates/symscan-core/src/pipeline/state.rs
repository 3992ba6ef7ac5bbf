use tracing::{debug, warn};

use super::types::{
    PipelineEvent, PipelineEventKind, PipelinePhase, PipelineStep, RunId, UploadOutcome,
    STATUS_COMPLETE, STATUS_UPLOADED, STATUS_UPLOAD_FAILED,
};

/// Phase, status line and run bookkeeping for one session.
#[derive(Clone, Debug, Default)]
pub struct PipelineState {
    phase: PipelinePhase,
    status: String,
    active_run: Option<RunId>,
    failed_step: Option<PipelineStep>,
    /// Last issued run number. Survives resets so ids are never reused.
    last_run: u64,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PipelinePhase {
        self.phase
    }

    pub fn status_message(&self) -> &str {
        &self.status
    }

    pub fn upload_enabled(&self) -> bool {
        self.phase.upload_enabled()
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active_run
    }

    /// Step that failed in the last run; `None` for upload failures.
    pub fn failed_step(&self) -> Option<PipelineStep> {
        self.failed_step
    }

    pub fn is_failure(&self) -> bool {
        self.phase == PipelinePhase::Failed
    }

    /// Back to Idle. Any in-flight run becomes stale.
    pub fn reset(&mut self) {
        self.phase = PipelinePhase::Idle;
        self.status.clear();
        self.active_run = None;
        self.failed_step = None;
    }

    /// React to the upload widget's outcome.
    ///
    /// Returns the id of the new run when the upload succeeded; the caller is
    /// then expected to drive the remaining steps under that id.
    pub fn accept_upload(&mut self, outcome: &UploadOutcome) -> Option<RunId> {
        if !self.upload_enabled() {
            warn!(phase = %self.phase, "Upload ignored while pipeline is busy");
            return None;
        }

        if !outcome.is_success() {
            warn!(error = ?outcome.error, "Upload failed");
            self.phase = PipelinePhase::Failed;
            self.status = STATUS_UPLOAD_FAILED.to_string();
            self.active_run = None;
            self.failed_step = None;
            return None;
        }

        self.last_run += 1;
        let run = RunId(self.last_run);
        self.phase = PipelinePhase::Uploaded;
        self.status = STATUS_UPLOADED.to_string();
        self.active_run = Some(run);
        self.failed_step = None;
        Some(run)
    }

    /// Apply an event from the step driver.
    ///
    /// Events from any run other than the active one are dropped and `false`
    /// is returned.
    pub fn apply(&mut self, event: &PipelineEvent) -> bool {
        if self.active_run != Some(event.run) {
            debug!(run = %event.run, active = ?self.active_run, "Discarding stale pipeline event");
            return false;
        }

        match &event.kind {
            PipelineEventKind::StepStarted(step) => {
                self.phase = step.phase();
                self.status = step.status_message().to_string();
            }
            PipelineEventKind::StepFinished(_) => {}
            PipelineEventKind::Completed(_) => {
                self.phase = PipelinePhase::Complete;
                self.status = STATUS_COMPLETE.to_string();
                self.active_run = None;
            }
            PipelineEventKind::Failed { step, message } => {
                self.phase = PipelinePhase::Failed;
                self.status = format!("Pipeline failed: {message}");
                self.active_run = None;
                self.failed_step = Some(*step);
            }
        }
        true
    }
}
