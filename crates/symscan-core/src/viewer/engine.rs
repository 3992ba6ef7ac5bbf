use std::collections::BTreeMap;

use tracing::debug;

use crate::consts::{DEFAULT_SCALE, FULLSCREEN_SCALE, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_STEP, ZOOM_STEP};
use crate::results::ResultSet;

use super::geometry::{clamp_pan, Offset, Size};
use super::input::{PointerInput, PointerTarget};

/// How one page's image is currently displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    /// 1-based, always within `1..=total_pages`.
    pub current_page: u32,
    pub total_pages: u32,
    /// Always within `MIN_SCALE..=MAX_SCALE`.
    pub scale: f32,
    /// Zero whenever `scale <= 1`.
    pub pan: Offset,
    pub fullscreen: bool,
    /// Pointer position minus pan at drag start; `Some` while dragging.
    pub drag_anchor: Option<Offset>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            scale: DEFAULT_SCALE,
            pan: Offset::ZERO,
            fullscreen: false,
            drag_anchor: None,
        }
    }
}

impl ViewerState {
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Paginated image viewer with bounded zoom and pan.
#[derive(Clone, Debug, Default)]
pub struct ViewerEngine {
    state: ViewerState,
    images: BTreeMap<u32, String>,
    /// Last container size reported by a drag, wheel or layout pass.
    container: Size,
}

impl ViewerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Install a fresh result set and show its first page.
    pub fn load(&mut self, results: &ResultSet) {
        if results.is_empty() {
            self.clear();
            return;
        }
        self.images = results
            .pages()
            .iter()
            .filter_map(|p| Some((p.page, p.url.clone()?)))
            .collect();
        self.state = ViewerState {
            total_pages: results.total_pages(),
            ..ViewerState::default()
        };
        debug!(pages = self.state.total_pages, "Viewer loaded result set");
    }

    /// Back to the empty viewer: no images, one page, default zoom, windowed.
    pub fn clear(&mut self) {
        self.images.clear();
        self.state = ViewerState::default();
    }

    /// Image locator for the page on display, if the backend provided one.
    pub fn current_image(&self) -> Option<&str> {
        self.images
            .get(&self.state.current_page)
            .map(String::as_str)
    }

    pub fn set_container(&mut self, container: Size) {
        self.container = container;
        self.state.pan = clamp_pan(self.state.pan, container, self.state.scale);
    }

    /// Navigate to `page`, clamped into range.
    ///
    /// Returns true if the page actually changed; zoom and pan are reset in
    /// that case.
    pub fn set_page(&mut self, page: i64) -> bool {
        let target = page.clamp(1, i64::from(self.state.total_pages)) as u32;
        if target == self.state.current_page {
            return false;
        }
        self.state.current_page = target;
        self.state.scale = DEFAULT_SCALE;
        self.state.pan = Offset::ZERO;
        self.state.drag_anchor = None;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_page(i64::from(self.state.current_page) - 1)
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(i64::from(self.state.current_page) + 1)
    }

    pub fn zoom_in(&mut self) {
        self.apply_scale(self.state.scale + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.apply_scale(self.state.scale - ZOOM_STEP);
    }

    pub fn zoom_reset(&mut self) {
        self.state.scale = DEFAULT_SCALE;
        self.state.pan = Offset::ZERO;
    }

    /// Open the lightbox at 2x. No effect when the current page has no image.
    pub fn enter_fullscreen(&mut self) -> bool {
        if self.current_image().is_none() {
            return false;
        }
        self.state.fullscreen = true;
        self.state.scale = FULLSCREEN_SCALE;
        self.state.pan = Offset::ZERO;
        true
    }

    pub fn exit_fullscreen(&mut self) {
        self.state.fullscreen = false;
        self.state.scale = DEFAULT_SCALE;
        self.state.pan = Offset::ZERO;
        self.state.drag_anchor = None;
    }

    pub fn begin_drag(&mut self, pos: Offset, target: PointerTarget) {
        if !self.state.fullscreen || target == PointerTarget::Control {
            return;
        }
        self.state.drag_anchor = Some(pos - self.state.pan);
    }

    pub fn update_drag(&mut self, pos: Offset, container: Size) {
        if !self.state.fullscreen {
            return;
        }
        let Some(anchor) = self.state.drag_anchor else {
            return;
        };
        self.container = container;
        self.state.pan = clamp_pan(pos - anchor, container, self.state.scale);
    }

    pub fn end_drag(&mut self) {
        self.state.drag_anchor = None;
    }

    /// One wheel notch while fullscreen: scrolling down zooms out.
    pub fn zoom_by_wheel(&mut self, delta: f32, container: Size) {
        if !self.state.fullscreen || delta == 0.0 || delta.is_nan() {
            return;
        }
        self.container = container;
        let step = if delta > 0.0 {
            -WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        };
        self.apply_scale(self.state.scale + step);
    }

    /// Clamp and store a new scale, then re-clamp pan for it.
    ///
    /// Scale is kept at two decimals so repeated wheel steps land exactly on 1.0.
    fn apply_scale(&mut self, scale: f32) {
        let rounded = (scale * 100.0).round() / 100.0;
        self.state.scale = rounded.clamp(MIN_SCALE, MAX_SCALE);
        self.state.pan = clamp_pan(self.state.pan, self.container, self.state.scale);
    }
}

impl PointerInput for ViewerEngine {
    fn pointer_down(&mut self, pos: Offset, target: PointerTarget) {
        self.begin_drag(pos, target);
    }

    fn pointer_move(&mut self, pos: Offset, container: Size) {
        self.update_drag(pos, container);
    }

    fn pointer_up(&mut self) {
        self.end_drag();
    }

    fn wheel(&mut self, delta: f32, container: Size) {
        self.zoom_by_wheel(delta, container);
    }
}
