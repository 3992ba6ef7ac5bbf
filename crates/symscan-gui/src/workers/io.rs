use std::path::Path;
use std::sync::mpsc;

use symscan_core::aggregate::AggregateRow;
use symscan_core::export::export_csv;
use symscan_core::service::DetectionService;
use tracing::warn;

use crate::convert::decode_color_image;
use crate::messages::WorkerResult;

use super::{send, send_error};

pub(super) fn handle_fetch_image(
    service: &dyn DetectionService,
    locator: String,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let decoded = service
        .fetch_image(&locator)
        .map_err(|e| e.to_string())
        .and_then(|bytes| decode_color_image(&bytes).map_err(|e| e.to_string()));

    match decoded {
        Ok(image) => send(tx, ctx, WorkerResult::ImageLoaded { locator, image }),
        Err(e) => {
            warn!(%locator, error = %e, "Page image unavailable");
            send(tx, ctx, WorkerResult::ImageFailed { locator });
        }
    }
}

pub(super) fn handle_export_csv(
    path: &Path,
    rows: &[AggregateRow],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match export_csv(rows, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::Exported {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Export failed: {e}")),
    }
}
