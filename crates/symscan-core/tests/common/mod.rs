#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use symscan_core::error::{Result, SymscanError};
use symscan_core::pipeline::{PipelineStep, UploadOutcome};
use symscan_core::results::{Detection, PageRef, ResultSet, Summary};
use symscan_core::service::DetectionService;

/// Scripted stand-in for the remote backend. Records every call by path.
pub struct FakeService {
    pub calls: Mutex<Vec<String>>,
    pub fail_at: Option<PipelineStep>,
    pub reset_fails: bool,
    pub upload_outcome: UploadOutcome,
    pub results: ResultSet,
}

impl FakeService {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: None,
            reset_fails: false,
            upload_outcome: UploadOutcome::complete("file.pdf"),
            results: sample_results(),
        }
    }

    pub fn failing_at(step: PipelineStep) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, path: &str) {
        self.calls.lock().unwrap().push(path.to_string());
    }

    fn check(&self, step: PipelineStep) -> Result<()> {
        if self.fail_at == Some(step) {
            return Err(SymscanError::StepRejected {
                path: step.path().to_string(),
                message: "simulated failure".into(),
            });
        }
        Ok(())
    }
}

impl DetectionService for FakeService {
    fn reset(&self) -> Result<()> {
        self.record("/reset");
        if self.reset_fails {
            return Err(SymscanError::UnexpectedStatus {
                path: "/reset".into(),
                status: 500,
            });
        }
        Ok(())
    }

    fn upload(&self, _path: &Path) -> Result<UploadOutcome> {
        self.record("/upload");
        Ok(self.upload_outcome.clone())
    }

    fn run_step(&self, step: PipelineStep) -> Result<()> {
        self.record(step.path());
        self.check(step)
    }

    fn fetch_results(&self) -> Result<ResultSet> {
        self.record(PipelineStep::FetchResults.path());
        self.check(PipelineStep::FetchResults)?;
        Ok(self.results.clone())
    }

    fn fetch_image(&self, locator: &str) -> Result<Vec<u8>> {
        self.record(locator);
        Ok(Vec::new())
    }
}

pub fn det(class_name: &str, confidence: f64) -> Detection {
    Detection::new(class_name, confidence)
}

/// Three pages; page 2 has no detections, page 3 has metadata.
pub fn sample_results() -> ResultSet {
    let pages = (1..=3)
        .map(|page| PageRef {
            page,
            url: Some(format!("/outputs/run/run_1/page_{page}.jpg")),
        })
        .collect();

    let mut by_page = BTreeMap::new();
    by_page.insert(
        1,
        vec![
            det("Door", 0.9),
            det("Door", 0.7),
            det("Socket Outlet", 0.5),
        ],
    );
    by_page.insert(2, Vec::new());
    by_page.insert(3, vec![det("Downlight", 0.6)]);

    let mut meta = BTreeMap::new();
    let mut page3 = BTreeMap::new();
    page3.insert("drawing_title".to_string(), "Ground floor lighting".to_string());
    meta.insert(3, page3);

    ResultSet::new(
        pages,
        by_page,
        meta,
        Summary {
            total_pages: 3,
            items_found: 3,
            total_detections: 4,
        },
    )
}

pub fn backend_results_json() -> &'static str {
    r#"{
        "summary": {"total_pages": 2, "items_found": 2, "total_detections": 3, "pages": []},
        "detections": [
            {"class_id": 1, "confidence": 0.91, "class_name": "Door"},
            {"class_id": 1, "confidence": 0.71, "class_name": "Door"},
            {"class_id": 9, "confidence": 0.4, "class_name": "Unknown"}
        ],
        "page_detections": {
            "1": [
                {"class_id": 1, "confidence": 0.91, "class_name": "Door"},
                {"class_id": 1, "confidence": 0.71, "class_name": "Door"}
            ],
            "2": [
                {"class_id": 9, "confidence": 0.4, "class_name": "Unknown"}
            ]
        },
        "meta_data": {
            "1": {"drawing_title": "Level 1", "scale": null},
            "2": {}
        },
        "pages": [
            {"page": 2, "url": "/outputs/run/run_x/page_2.jpg"},
            {"page": 1, "url": "/outputs/run/run_x/page_1.jpg"}
        ],
        "preview": "/outputs/run/run_x/page_2.jpg"
    }"#
}
