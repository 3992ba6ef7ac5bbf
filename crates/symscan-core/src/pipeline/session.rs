use std::collections::BTreeMap;

use tracing::info;

use crate::aggregate::AggregateRow;
use crate::results::{Detection, ResultSet};
use crate::service::DetectionService;
use crate::viewer::ViewerEngine;

use super::orchestrator::{reset_remote, run_steps};
use super::state::PipelineState;
use super::types::{PipelineEvent, PipelineEventKind, RunId, UploadOutcome};

/// Everything one dashboard session owns: pipeline state, the latest result
/// set and the viewer showing it.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pipeline: PipelineState,
    results: Option<ResultSet>,
    viewer: ViewerEngine,
    upload_generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pipeline(&self) -> &PipelineState {
        &self.pipeline
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn viewer(&self) -> &ViewerEngine {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut ViewerEngine {
        &mut self.viewer
    }

    pub fn upload_enabled(&self) -> bool {
        self.pipeline.upload_enabled()
    }

    /// Bumped on every refresh; the upload widget rebuilds itself when it changes.
    pub fn upload_generation(&self) -> u64 {
        self.upload_generation
    }

    /// Local half of a reset: Idle, no results, empty viewer, upload enabled.
    pub fn clear(&mut self) {
        self.pipeline.reset();
        self.results = None;
        self.viewer.clear();
    }

    /// Best-effort remote reset followed by a local clear.
    ///
    /// A failing reset call is logged and otherwise ignored.
    pub fn reset<S: DetectionService + ?Sized>(&mut self, service: &S) {
        reset_remote(service);
        self.clear();
    }

    /// Reset plus a fresh upload widget.
    pub fn refresh<S: DetectionService + ?Sized>(&mut self, service: &S) {
        reset_remote(service);
        self.refresh_local();
    }

    /// Local part of [`Session::refresh`], for callers that issue the remote
    /// reset elsewhere (e.g. on a worker thread).
    pub fn refresh_local(&mut self) {
        self.clear();
        self.upload_generation += 1;
        info!("Session refreshed, upload re-enabled");
    }

    /// Start a run from an upload outcome without driving it.
    pub fn accept_upload(&mut self, outcome: &UploadOutcome) -> Option<RunId> {
        let run = self.pipeline.accept_upload(outcome)?;
        self.results = None;
        self.viewer.clear();
        Some(run)
    }

    /// Apply a step-driver event. Returns false for stale events.
    pub fn apply(&mut self, event: PipelineEvent) -> bool {
        if !self.pipeline.apply(&event) {
            return false;
        }
        match event.kind {
            PipelineEventKind::Completed(results) => {
                self.viewer.load(&results);
                self.results = Some(results);
            }
            PipelineEventKind::Failed { .. } => {
                self.results = None;
                self.viewer.clear();
            }
            PipelineEventKind::StepStarted(_) | PipelineEventKind::StepFinished(_) => {}
        }
        true
    }

    /// Accept the upload and drive the whole run inline.
    pub fn start_pipeline<S: DetectionService + ?Sized>(
        &mut self,
        service: &S,
        outcome: &UploadOutcome,
    ) -> Option<RunId> {
        let run = self.accept_upload(outcome)?;
        run_steps(service, run, |event| {
            self.apply(event);
        });
        Some(run)
    }

    pub fn current_page(&self) -> u32 {
        self.viewer.state().current_page
    }

    pub fn current_detections(&self) -> &[Detection] {
        self.results
            .as_ref()
            .map(|r| r.detections(self.current_page()))
            .unwrap_or(&[])
    }

    /// Aggregate rows for the page on display.
    pub fn current_rows(&self) -> Vec<AggregateRow> {
        crate::aggregate::aggregate(self.current_detections())
    }

    pub fn current_metadata(&self) -> Option<&BTreeMap<String, String>> {
        self.results
            .as_ref()
            .and_then(|r| r.metadata(self.current_page()))
    }
}
