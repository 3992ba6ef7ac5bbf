use std::ops::{Add, Sub};

/// Screen-space point or displacement in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Size of the surface the image is drawn into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Largest pan magnitude per axis that keeps a `scale`-zoomed image covering `container`.
pub fn pan_limit(container: Size, scale: f32) -> Offset {
    if scale <= 1.0 {
        return Offset::ZERO;
    }
    Offset::new(
        (container.width.max(0.0) * (scale - 1.0)) / 2.0,
        (container.height.max(0.0) * (scale - 1.0)) / 2.0,
    )
}

/// Clamp a candidate pan offset into the legal range for `scale`.
pub fn clamp_pan(candidate: Offset, container: Size, scale: f32) -> Offset {
    if scale <= 1.0 {
        return Offset::ZERO;
    }
    let limit = pan_limit(container, scale);
    Offset::new(
        candidate.x.clamp(-limit.x, limit.x),
        candidate.y.clamp(-limit.y, limit.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_limit_zero_at_unit_scale() {
        assert_eq!(pan_limit(Size::new(800.0, 600.0), 1.0), Offset::ZERO);
        assert_eq!(pan_limit(Size::new(800.0, 600.0), 0.5), Offset::ZERO);
    }

    #[test]
    fn test_pan_limit_grows_with_scale() {
        let limit = pan_limit(Size::new(800.0, 600.0), 2.0);
        assert_eq!(limit, Offset::new(400.0, 300.0));
    }

    #[test]
    fn test_clamp_pan_each_axis() {
        let c = clamp_pan(Offset::new(1000.0, -1000.0), Size::new(800.0, 600.0), 2.0);
        assert_eq!(c, Offset::new(400.0, -300.0));

        let inside = clamp_pan(Offset::new(10.0, -20.0), Size::new(800.0, 600.0), 2.0);
        assert_eq!(inside, Offset::new(10.0, -20.0));
    }
}
