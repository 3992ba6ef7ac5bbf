mod engine;
pub mod geometry;
mod input;

pub use engine::{ViewerEngine, ViewerState};
pub use geometry::{Offset, Size};
pub use input::{PointerInput, PointerTarget};
