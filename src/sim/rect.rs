//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! Screen space: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Closest point of the rectangle (edges included) to `p`
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.left(), self.right()),
            clamp(p.y, self.top(), self.bottom()),
        )
    }

    /// Interiors overlap (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Rectangle lies entirely within `[0, size.x] x [0, size.y]`
    pub fn within(&self, size: Vec2) -> bool {
        self.left() >= 0.0 && self.top() >= 0.0 && self.right() <= size.x && self.bottom() <= size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn test_nearest_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Inside: the point itself
        assert_eq!(r.nearest_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
        // Outside a corner: the corner
        assert_eq!(r.nearest_point(Vec2::new(15.0, -5.0)), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Shared edge only
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(20.0, 20.0, 1.0, 1.0)));
    }
}
