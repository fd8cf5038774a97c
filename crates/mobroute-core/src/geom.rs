//! Geometry primitives: world [`Point`] and the [`Bounds`] rectangle
//! ("vrBounds") used to project world coordinates onto a minimap image.

use serde::{Deserialize, Serialize};

/// A world-space integer point. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
}

/// The visible world rectangle of a map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Map `p` to `(0..1, 0..1)` fractions of the rectangle.
    ///
    /// Returns `None` for a degenerate rectangle. Points outside the
    /// rectangle yield fractions outside `0..1`; callers decide whether to
    /// clamp.
    pub fn normalize(&self, p: Point) -> Option<(f64, f64)> {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return None;
        }
        let nx = (p.x as i64 - self.left as i64) as f64 / w as f64;
        let ny = (p.y as i64 - self.top as i64) as f64 / h as f64;
        Some((nx, ny))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_inside() {
        let b = Bounds::new(-2008, 1050, -300, 290);
        let (nx, ny) = b.normalize(Point::new(-2008, 290)).unwrap();
        assert_eq!(nx, 0.0);
        assert_eq!(ny, 1.0);

        let (nx, _) = b.normalize(Point::new(-479, 0)).unwrap();
        assert!((nx - 0.5).abs() < 1e-9);
    }

    #[test]
    fn normalize_degenerate_is_none() {
        let b = Bounds::new(10, 10, 0, 100);
        assert_eq!(b.normalize(Point::new(10, 50)), None);
    }
}
