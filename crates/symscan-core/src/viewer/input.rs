use super::geometry::{Offset, Size};

/// What the pointer went down on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The image surface itself.
    Surface,
    /// A button or other control drawn over the surface; never starts a drag.
    Control,
}

/// Toolkit-independent pointer and scroll input.
///
/// A rendering surface translates its native events into these calls, so the
/// viewer's clamping logic can be driven without a real display.
pub trait PointerInput {
    fn pointer_down(&mut self, pos: Offset, target: PointerTarget);

    /// `pos` is the absolute pointer position of the latest event.
    fn pointer_move(&mut self, pos: Offset, container: Size);

    /// Also called when the pointer leaves the tracking surface.
    fn pointer_up(&mut self);

    /// `delta` follows the usual scroll convention: positive scrolls down.
    fn wheel(&mut self, delta: f32, container: Size);
}
