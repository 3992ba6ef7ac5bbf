use std::time::Instant;

use tracing::{info, warn};

use crate::service::DetectionService;

use super::types::{PipelineEvent, PipelineEventKind, PipelineStep, RunId};

/// Best-effort remote reset. A failure is logged and reported as `false`.
pub fn reset_remote<S: DetectionService + ?Sized>(service: &S) -> bool {
    match service.reset() {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Failed to reset server storage");
            false
        }
    }
}

/// Drive the four post-upload steps of `run`, strictly in order.
///
/// Each step's call fully resolves before the next starts. The first failure
/// ends the run with a `Failed` event; success ends it with `Completed`
/// carrying the decoded result set. Events are handed to `emit` as they
/// happen, so the caller decides whether they are still current.
pub fn run_steps<S, F>(service: &S, run: RunId, mut emit: F)
where
    S: DetectionService + ?Sized,
    F: FnMut(PipelineEvent),
{
    let start = Instant::now();

    for step in PipelineStep::SEQUENCE {
        emit(PipelineEvent::new(run, PipelineEventKind::StepStarted(step)));
        let step_start = Instant::now();

        let outcome = match step {
            PipelineStep::FetchResults => service.fetch_results().map(Some),
            _ => service.run_step(step).map(|()| None),
        };

        match outcome {
            Ok(results) => {
                info!(
                    run = %run,
                    step = %step,
                    elapsed_ms = step_start.elapsed().as_millis() as u64,
                    "Step complete"
                );
                emit(PipelineEvent::new(run, PipelineEventKind::StepFinished(step)));
                if let Some(results) = results {
                    info!(
                        run = %run,
                        pages = results.pages().len(),
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "Pipeline complete"
                    );
                    emit(PipelineEvent::new(run, PipelineEventKind::Completed(results)));
                }
            }
            Err(e) => {
                warn!(run = %run, step = %step, error = %e, "Step failed");
                emit(PipelineEvent::new(
                    run,
                    PipelineEventKind::Failed {
                        step,
                        message: e.to_string(),
                    },
                ));
                return;
            }
        }
    }
}
