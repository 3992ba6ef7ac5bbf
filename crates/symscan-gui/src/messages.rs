use std::path::PathBuf;

use symscan_core::aggregate::AggregateRow;
use symscan_core::pipeline::{PipelineEvent, RunId, UploadOutcome};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Best-effort `GET /reset`.
    Reset,

    /// Upload a drawing. `generation` is echoed back so the UI can drop
    /// outcomes that arrive after a refresh.
    Upload { path: PathBuf, generation: u64 },

    /// Drive the four post-upload steps for an accepted run.
    RunSteps { run: RunId },

    /// Fetch and decode one page image.
    FetchImage { locator: String },

    /// Write aggregate rows to a CSV file.
    ExportCsv {
        path: PathBuf,
        rows: Vec<AggregateRow>,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Picked in the file dialog; not yet uploaded.
    FileChosen {
        path: PathBuf,
    },
    UploadFinished {
        outcome: UploadOutcome,
        generation: u64,
    },
    Pipeline(PipelineEvent),
    ImageLoaded {
        locator: String,
        image: egui::ColorImage,
    },
    ImageFailed {
        locator: String,
    },
    Exported {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
