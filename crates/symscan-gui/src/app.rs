use std::sync::mpsc;

use symscan_core::config::AppConfig;
use symscan_core::pipeline::{PipelineEventKind, Session};
use symscan_core::service::HttpDetectionService;
use tracing::debug;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::workers;

pub struct SymscanApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: AppConfig,
}

impl SymscanApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> anyhow::Result<Self> {
        let service = HttpDetectionService::new(&config.service)?;
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(Box::new(service), result_tx.clone(), ctx.clone())?;

        let app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: Session::new(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            config,
        };
        // Start from clean server storage.
        app.send_command(WorkerCommand::Reset);
        Ok(app)
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FileChosen { path } => {
                    if !self.session.upload_enabled() || self.ui_state.uploading {
                        debug!(file = %path.display(), "Upload gated, ignoring chosen file");
                        continue;
                    }
                    self.ui_state.uploading = true;
                    self.ui_state.selected_file = Some(path.clone());
                    self.send_command(WorkerCommand::Upload {
                        path,
                        generation: self.session.upload_generation(),
                    });
                }
                WorkerResult::UploadFinished {
                    outcome,
                    generation,
                } => {
                    if generation != self.session.upload_generation() {
                        debug!(generation, "Dropping upload outcome from before refresh");
                        continue;
                    }
                    self.ui_state.uploading = false;
                    self.ui_state.notice = None;
                    self.viewport.clear();
                    if let Some(run) = self.session.accept_upload(&outcome) {
                        self.send_command(WorkerCommand::RunSteps { run });
                    }
                }
                WorkerResult::Pipeline(event) => {
                    let completed = matches!(event.kind, PipelineEventKind::Completed(_));
                    if self.session.apply(event) && completed {
                        self.request_current_image();
                    }
                }
                WorkerResult::ImageLoaded { locator, image } => {
                    let texture =
                        ctx.load_texture(&locator, image, egui::TextureOptions::LINEAR);
                    self.viewport.insert(locator, texture);
                }
                WorkerResult::ImageFailed { locator } => {
                    self.viewport.mark_failed(locator);
                }
                WorkerResult::Exported { path } => {
                    self.ui_state
                        .info(format!("Detection summary saved to {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.error(message);
                }
            }
        }
    }

    /// Ask the worker for the displayed page's image unless it is already
    /// cached or on its way.
    pub fn request_current_image(&mut self) {
        let Some(locator) = self.session.viewer().current_image() else {
            return;
        };
        if self.viewport.begin_loading(locator) {
            let locator = locator.to_string();
            self.send_command(WorkerCommand::FetchImage { locator });
        }
    }

    /// Reset locally, bump the upload generation, and queue the remote reset
    /// behind any in-flight work.
    pub fn refresh(&mut self) {
        self.session.refresh_local();
        self.ui_state.clear();
        self.viewport.clear();
        self.send_command(WorkerCommand::Reset);
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for SymscanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::header::show(ctx);
        panels::status::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::details::show(ctx, self);
        panels::viewer::show(ctx, self);
        panels::fullscreen::show(ctx, self);

        if self.session.pipeline().phase().is_running() || self.ui_state.uploading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
