//! Edge (undirected link) in the chord graph.

use serde::{Deserialize, Serialize};
use super::NodeId;

/// An undirected edge between two chords that share notes.
///
/// Endpoints are stored normalised so that `a < b`; each unordered pair
/// appears at most once in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    /// Number of notes the two chords have in common.
    pub shared: usize,
}

impl Edge {
    pub fn new(x: NodeId, y: NodeId, shared: usize) -> Self {
        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        Self { a, b, shared }
    }

    /// The "other" end of the edge from the given node.
    pub fn other(&self, from: NodeId) -> Option<NodeId> {
        if from == self.a { Some(self.b) }
        else if from == self.b { Some(self.a) }
        else { None }
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalised_endpoints() {
        let e = Edge::new(NodeId(7), NodeId(2), 2);
        assert_eq!(e.endpoints(), (NodeId(2), NodeId(7)));
        assert_eq!(e, Edge::new(NodeId(2), NodeId(7), 2));
    }

    #[test]
    fn test_other() {
        let e = Edge::new(NodeId(1), NodeId(4), 1);
        assert_eq!(e.other(NodeId(1)), Some(NodeId(4)));
        assert_eq!(e.other(NodeId(4)), Some(NodeId(1)));
        assert_eq!(e.other(NodeId(3)), None);
        assert!(e.touches(NodeId(4)));
        assert!(!e.touches(NodeId(0)));
    }
}
