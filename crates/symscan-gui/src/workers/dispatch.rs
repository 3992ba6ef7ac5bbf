use std::sync::mpsc;

use symscan_core::service::DetectionService;

use crate::messages::{WorkerCommand, WorkerResult};

use super::{io, pipeline};

/// Spawn the worker thread that owns the detection service. Returns the
/// command sender.
pub fn spawn_worker(
    service: Box<dyn DetectionService>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("symscan-worker".into())
        .spawn(move || {
            worker_loop(service.as_ref(), cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

/// Commands run strictly one at a time, so a reset queued during a run
/// executes only after the run's last call.
fn worker_loop(
    service: &dyn DetectionService,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Reset => {
                pipeline::handle_reset(service);
            }
            WorkerCommand::Upload { path, generation } => {
                pipeline::handle_upload(service, &path, generation, &tx, &ctx);
            }
            WorkerCommand::RunSteps { run } => {
                pipeline::handle_run_steps(service, run, &tx, &ctx);
            }
            WorkerCommand::FetchImage { locator } => {
                io::handle_fetch_image(service, locator, &tx, &ctx);
            }
            WorkerCommand::ExportCsv { path, rows } => {
                io::handle_export_csv(&path, &rows, &tx, &ctx);
            }
        }
    }
}
