#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are signed pixels: a cursor is allowed to move outside its
//! viewport (the edge policy in the context crate pulls it back), so
//! positions must be able to represent "off the left/top edge" as negative
//! values. All arithmetic saturates at the `i32` range.

/// A mutable pixel position.
///
/// Two independently owned instances exist per display context: the text
/// cursor and the graphics cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a pixel delta, saturating at the `i32` range.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// An axis-aligned viewport rectangle with **inclusive** edges.
///
/// Invariant: `x2 >= x1` and `y2 >= y1`. The constructor normalizes
/// swapped corners so the invariant always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge (inclusive).
    pub x1: i32,
    /// Top edge (inclusive).
    pub y1: i32,
    /// Right edge (inclusive).
    pub x2: i32,
    /// Bottom edge (inclusive).
    pub y2: i32,
}

impl Viewport {
    /// Create a new viewport, normalizing swapped corners.
    #[inline]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// The full-canvas viewport for a `width x height` pixel canvas.
    #[inline]
    pub const fn full(width: u16, height: u16) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: width.saturating_sub(1) as i32,
            y2: height.saturating_sub(1) as i32,
        }
    }

    /// Width in pixels (edges are inclusive).
    #[inline]
    pub const fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    /// Height in pixels (edges are inclusive).
    #[inline]
    pub const fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    /// Check whether a point lies inside the viewport.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x1 && p.x <= self.x2 && p.y >= self.y1 && p.y <= self.y2
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::full(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Viewport};

    #[test]
    fn point_translate_saturates() {
        let p = Point::new(i32::MAX - 1, i32::MIN + 1);
        let moved = p.translate(10, -10);
        assert_eq!(moved, Point::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn viewport_normalizes_swapped_corners() {
        let vp = Viewport::new(10, 20, 0, 5);
        assert_eq!(vp, Viewport::new(0, 5, 10, 20));
        assert!(vp.x2 >= vp.x1);
        assert!(vp.y2 >= vp.y1);
    }

    #[test]
    fn viewport_extents_are_inclusive() {
        let vp = Viewport::new(0, 0, 639, 479);
        assert_eq!(vp.width(), 640);
        assert_eq!(vp.height(), 480);
    }

    #[test]
    fn viewport_full_covers_canvas() {
        let vp = Viewport::full(640, 480);
        assert_eq!(vp, Viewport::new(0, 0, 639, 479));
        assert!(vp.contains(Point::new(0, 0)));
        assert!(vp.contains(Point::new(639, 479)));
        assert!(!vp.contains(Point::new(640, 479)));
        assert!(!vp.contains(Point::new(0, -1)));
    }

    #[test]
    fn viewport_full_of_empty_canvas() {
        let vp = Viewport::full(0, 0);
        assert_eq!(vp.width(), 1);
        assert_eq!(vp.height(), 1);
    }
}
