use std::path::PathBuf;

/// A one-off message shown in the status bar until the next action.
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// UI-only state not covered by the session.
#[derive(Default)]
pub struct UIState {
    /// An upload request is with the worker.
    pub uploading: bool,
    pub selected_file: Option<PathBuf>,
    pub notice: Option<Notice>,
    /// Screen rect of the fullscreen toolbar on the previous frame, used to
    /// tell control presses apart from drags on the image.
    pub fullscreen_toolbar: Option<egui::Rect>,
}

impl UIState {
    pub fn info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error: true,
        });
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
