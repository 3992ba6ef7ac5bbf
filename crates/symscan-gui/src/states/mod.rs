mod steps;
mod ui;
mod viewport;

pub use steps::{step_rows, StepStatus};
pub use ui::UIState;
pub use viewport::{PageTexture, ViewportState};
