use symscan_core::pipeline::{PipelinePhase, PipelineStep};

/// Labels of the steps panel, in order. The first entry is the upload itself.
pub const STEP_LABELS: [&str; 5] = [
    "File upload",
    "Preprocessing",
    "Load model",
    "Inference",
    "Fetch results",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Done,
    Failed,
}

impl StepStatus {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pending => "\u{25CB}",
            Self::Active => "\u{25CF}",
            Self::Done => "\u{2714}",
            Self::Failed => "\u{2716}",
        }
    }

    pub fn color(self) -> egui::Color32 {
        match self {
            Self::Pending => egui::Color32::from_gray(140),
            Self::Active => egui::Color32::from_rgb(47, 128, 237),
            Self::Done => egui::Color32::from_rgb(16, 185, 129),
            Self::Failed => egui::Color32::from_rgb(239, 68, 68),
        }
    }
}

fn step_index(step: PipelineStep) -> usize {
    match step {
        PipelineStep::Preprocess => 1,
        PipelineStep::LoadModel => 2,
        PipelineStep::Inference => 3,
        PipelineStep::FetchResults => 4,
    }
}

/// Status of every row in the steps panel for the current phase.
pub fn step_rows(
    phase: PipelinePhase,
    failed_step: Option<PipelineStep>,
) -> [(&'static str, StepStatus); 5] {
    let status_at = |i: usize| match phase {
        PipelinePhase::Idle => StepStatus::Pending,
        PipelinePhase::Complete => StepStatus::Done,
        PipelinePhase::Failed => {
            let failed = failed_step.map(step_index).unwrap_or(0);
            match i.cmp(&failed) {
                std::cmp::Ordering::Less => StepStatus::Done,
                std::cmp::Ordering::Equal => StepStatus::Failed,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            }
        }
        running => {
            let active = match running {
                PipelinePhase::Preprocessing | PipelinePhase::Uploaded => 1,
                PipelinePhase::ModelLoading => 2,
                PipelinePhase::Inferencing => 3,
                _ => 4,
            };
            match i.cmp(&active) {
                std::cmp::Ordering::Less => StepStatus::Done,
                std::cmp::Ordering::Equal => StepStatus::Active,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            }
        }
    };
    std::array::from_fn(|i| (STEP_LABELS[i], status_at(i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(phase: PipelinePhase, failed: Option<PipelineStep>) -> Vec<StepStatus> {
        step_rows(phase, failed).iter().map(|(_, s)| *s).collect()
    }

    #[test]
    fn test_idle_all_pending() {
        assert!(statuses(PipelinePhase::Idle, None)
            .iter()
            .all(|s| *s == StepStatus::Pending));
    }

    #[test]
    fn test_inference_running() {
        use StepStatus::*;
        assert_eq!(
            statuses(PipelinePhase::Inferencing, None),
            [Done, Done, Done, Active, Pending]
        );
    }

    #[test]
    fn test_failure_marks_step() {
        use StepStatus::*;
        assert_eq!(
            statuses(PipelinePhase::Failed, Some(PipelineStep::LoadModel)),
            [Done, Done, Failed, Pending, Pending]
        );
        assert_eq!(
            statuses(PipelinePhase::Failed, None),
            [Failed, Pending, Pending, Pending, Pending]
        );
    }

    #[test]
    fn test_complete_all_done() {
        assert!(statuses(PipelinePhase::Complete, None)
            .iter()
            .all(|s| *s == StepStatus::Done));
    }
}
