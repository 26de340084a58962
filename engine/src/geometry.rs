//! Geometric primitives for the docking engine.
//!
//! This module defines the point and rectangle types used for item
//! positioning, zone bounds, and collision testing. All coordinates are
//! in logical pixels with the origin at the top-left corner.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Point
// ============================================================================

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Returns the component-wise difference `self - other`.
    #[must_use]
    pub fn delta_from(&self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Rounds both coordinates to the nearest multiple of `pitch`.
    ///
    /// Used for snap-to-grid placement. A non-positive pitch returns the
    /// point unchanged.
    #[must_use]
    pub fn snapped_to_grid(&self, pitch: f64) -> Self {
        if pitch <= 0.0 {
            return *self;
        }

        Self {
            x: (self.x / pitch).round() * pitch,
            y: (self.y / pitch).round() * pitch,
        }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rect {
    /// X coordinate of the origin (top-left corner).
    pub x: f64,
    /// Y coordinate of the origin (top-left corner).
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from an origin point and a size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, width: f64, height: f64) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width,
            height,
        }
    }

    /// Returns the origin point of the rectangle.
    #[must_use]
    pub const fn origin(&self) -> Point { Point { x: self.x, y: self.y } }

    /// Returns the right edge coordinate.
    #[must_use]
    pub fn right(&self) -> f64 { self.x + self.width }

    /// Returns the bottom edge coordinate.
    #[must_use]
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Returns whether a point is inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Returns whether two rectangles overlap.
    ///
    /// Standard AABB test with strict inequalities: rectangles that merely
    /// share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_point_delta() {
        let a = Point::new(100.0, 50.0);
        let b = Point::new(30.0, 20.0);
        assert_eq!(a.delta_from(b), Point::new(70.0, 30.0));
    }

    #[test]
    fn test_snap_rounds_to_nearest_multiple() {
        let p = Point::new(27.0, 33.0);
        assert_eq!(p.snapped_to_grid(20.0), Point::new(20.0, 40.0));

        let exact = Point::new(40.0, 60.0);
        assert_eq!(exact.snapped_to_grid(20.0), exact);
    }

    #[test]
    fn test_snap_negative_coordinates() {
        let p = Point::new(-27.0, -33.0);
        assert_eq!(p.snapped_to_grid(20.0), Point::new(-20.0, -40.0));
    }

    #[test]
    fn test_snap_non_positive_pitch_is_identity() {
        let p = Point::new(27.0, 33.0);
        assert_eq!(p.snapped_to_grid(0.0), p);
        assert_eq!(p.snapped_to_grid(-5.0), p);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Point::new(50.0, 50.0)));
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(100.0, 100.0)));
        assert!(!r.contains(Point::new(101.0, 50.0)));
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(200.0, 0.0, 100.0, 100.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_intersects_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_containment() {
        let outer = Rect::new(0.0, 0.0, 300.0, 300.0);
        let inner = Rect::new(100.0, 100.0, 50.0, 50.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_from_origin_size() {
        let r = Rect::from_origin_size(Point::new(5.0, 6.0), 10.0, 12.0);
        assert_eq!(r, Rect::new(5.0, 6.0, 10.0, 12.0));
        assert_eq!(r.origin(), Point::new(5.0, 6.0));
    }
}
