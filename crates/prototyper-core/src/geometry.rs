//! Page geometry: points and straight segments.

use serde::{Deserialize, Serialize};

/// Tolerance used when deciding whether two points coincide.
pub const POINT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns true when both coordinates agree within [`POINT_EPSILON`].
    pub fn approx_eq(&self, other: &Point) -> bool {
        (self.x - other.x).abs() <= POINT_EPSILON && (self.y - other.y).abs() <= POINT_EPSILON
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A straight segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Builds a segment from raw coordinates `(x1, y1) -> (x2, y2)`.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn length(&self) -> f64 {
        self.p1.distance_to(&self.p2)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.p1.translated(dx, dy), self.p2.translated(dx, dy))
    }

    pub fn approx_eq(&self, other: &Segment) -> bool {
        self.p1.approx_eq(&other.p1) && self.p2.approx_eq(&other.p2)
    }
}
