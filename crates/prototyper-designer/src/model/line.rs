use prototyper_core::{Point, Segment};
use serde::{Deserialize, Serialize};

/// A single straight line between two endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineShape {
    line: Segment,
}

impl LineShape {
    pub fn new(line: Segment) -> Self {
        Self { line }
    }

    pub fn line(&self) -> Segment {
        self.line
    }

    pub fn set_line(&mut self, line: Segment) {
        self.line = line;
    }

    /// Handle positions: one per endpoint.
    pub fn handle_points(&self) -> Vec<Point> {
        vec![self.line.p1, self.line.p2]
    }
}
