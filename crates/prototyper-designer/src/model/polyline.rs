use prototyper_core::{Point, Segment};
use serde::{Deserialize, Serialize};

/// The segments meeting at one polyline node, with their positions in
/// the chain.
///
/// For an open polyline the first node has no incoming segment and the
/// last node has no outgoing segment. On a closed polyline every node has
/// both, the first node's incoming segment being the last segment.
///
/// Positions are fixed when captured. A drag can open or close the chain,
/// which renumbers nodes but never moves segments.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeSegments {
    pub incoming: Option<(usize, Segment)>,
    pub outgoing: Option<(usize, Segment)>,
}

impl NodeSegments {
    pub fn incoming_line(&self) -> Option<Segment> {
        self.incoming.map(|(_, line)| line)
    }

    pub fn outgoing_line(&self) -> Option<Segment> {
        self.outgoing.map(|(_, line)| line)
    }
}

/// An ordered chain of connected segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolylineShape {
    lines: Vec<Segment>,
}

impl PolylineShape {
    pub fn new(lines: Vec<Segment>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Segment] {
        &self.lines
    }

    pub fn count_of_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn append_line(&mut self, line: Segment) {
        self.lines.push(line);
    }

    /// Removes the most recently appended segment equal to `line`.
    pub fn remove_line(&mut self, line: &Segment) -> bool {
        match self.lines.iter().rposition(|l| l.approx_eq(line)) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    /// True when the last endpoint coincides with the first.
    pub fn is_closed(&self) -> bool {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) if self.lines.len() >= 2 => last.p2.approx_eq(&first.p1),
            _ => false,
        }
    }

    /// Number of distinct nodes. A closed polyline shares its first and
    /// last node.
    pub fn node_count(&self) -> usize {
        match self.lines.len() {
            0 => 0,
            n if self.is_closed() => n,
            n => n + 1,
        }
    }

    pub fn node_position(&self, index: usize) -> Option<Point> {
        if index >= self.node_count() {
            return None;
        }
        match self.lines.get(index) {
            Some(line) => Some(line.p1),
            None => self.lines.last().map(|l| l.p2),
        }
    }

    pub fn adjacent_segments(&self, index: usize) -> Option<NodeSegments> {
        if index >= self.node_count() {
            return None;
        }
        let len = self.lines.len();
        let incoming_index = if self.is_closed() {
            Some((index + len - 1) % len)
        } else {
            index.checked_sub(1)
        };
        Some(NodeSegments {
            incoming: incoming_index.map(|i| (i, self.lines[i])),
            outgoing: self.lines.get(index).map(|line| (index, *line)),
        })
    }

    /// Writes `segments` back at their captured positions.
    ///
    /// Returns false, changing nothing, when a position is past the end of
    /// the chain.
    pub fn replace_segments(&mut self, segments: &NodeSegments) -> bool {
        let sides = [segments.incoming, segments.outgoing];
        if sides.iter().flatten().any(|(i, _)| *i >= self.lines.len()) {
            return false;
        }
        for (i, line) in sides.into_iter().flatten() {
            self.lines[i] = line;
        }
        true
    }

    /// Replaces the segments adjacent to node `index`.
    ///
    /// Sides given as `None` are left untouched. Returns false when the
    /// index is out of range.
    pub fn move_node(&mut self, index: usize, incoming: Option<Segment>, outgoing: Option<Segment>) -> bool {
        let Some(current) = self.adjacent_segments(index) else {
            return false;
        };
        let segments = NodeSegments {
            incoming: current.incoming.zip(incoming).map(|((i, _), line)| (i, line)),
            outgoing: current.outgoing.zip(outgoing).map(|((i, _), line)| (i, line)),
        };
        self.replace_segments(&segments)
    }

    /// Segments adjacent to node `index` after dragging the node to `to`.
    pub fn dragged_node(&self, index: usize, to: Point) -> Option<NodeSegments> {
        let current = self.adjacent_segments(index)?;
        Some(NodeSegments {
            incoming: current.incoming.map(|(i, l)| (i, Segment::new(l.p1, to))),
            outgoing: current.outgoing.map(|(i, l)| (i, Segment::new(to, l.p2))),
        })
    }

    /// Handle positions: one per node.
    pub fn handle_points(&self) -> Vec<Point> {
        (0..self.node_count())
            .filter_map(|i| self.node_position(i))
            .collect()
    }
}
