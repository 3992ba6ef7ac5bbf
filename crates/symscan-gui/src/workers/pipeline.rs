use std::path::Path;
use std::sync::mpsc;

use symscan_core::pipeline::{reset_remote, run_steps, RunId, UploadOutcome};
use symscan_core::service::DetectionService;
use tracing::{info, warn};

use crate::messages::WorkerResult;

use super::send;

pub(super) fn handle_reset(service: &dyn DetectionService) {
    if reset_remote(service) {
        info!("Server storage reset");
    }
}

/// Transport failures become a failed outcome so the UI has a single path.
pub(super) fn handle_upload(
    service: &dyn DetectionService,
    path: &Path,
    generation: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let outcome = match service.upload(path) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "Upload failed");
            UploadOutcome::failed(e.to_string())
        }
    };
    send(tx, ctx, WorkerResult::UploadFinished { outcome, generation });
}

pub(super) fn handle_run_steps(
    service: &dyn DetectionService,
    run: RunId,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    run_steps(service, run, |event| {
        send(tx, ctx, WorkerResult::Pipeline(event));
    });
}
