//! Similarity graph builder.
//!
//! ```text
//! chords ──► one node per distinct NoteSet ──► all-pairs |a ∩ b| ≥ homology ──► edges
//! ```
//!
//! The pair scan is O(n²) in the node count. At catalog scale (79 distinct
//! note sets) that is ~3k intersections. A note → chords inverted index would
//! be the next step for much larger inputs.

use hashbrown::HashMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog;
use crate::model::{Chord, ChordNode, Edge, NodeId, NoteSet};

/// Undirected, simple graph of chords linked by shared notes.
#[derive(Debug, Clone, Serialize)]
pub struct ChordGraph {
    homology: usize,
    nodes: Vec<ChordNode>,
    edges: Vec<Edge>,
    /// NoteSet → node
    #[serde(skip)]
    index: HashMap<NoteSet, NodeId>,
    /// node → indices into `edges`
    #[serde(skip)]
    adjacency: Vec<Vec<usize>>,
}

impl ChordGraph {
    /// Build the graph from chords in iteration order.
    ///
    /// Chords with an already-seen note set do not add a node; they replace
    /// that node's name, type and color (last one wins) while the node keeps
    /// its original position in the node order.
    pub fn build<I>(chords: I, homology: usize) -> Self
    where
        I: IntoIterator<Item = Chord>,
    {
        let mut index: HashMap<NoteSet, NodeId> = HashMap::new();
        let mut nodes: Vec<ChordNode> = Vec::new();

        for chord in chords {
            if let Some(&id) = index.get(&chord.notes) {
                let node = &mut nodes[id.0];
                debug!(
                    notes = %chord.notes,
                    previous = %node.name,
                    replacement = %chord.name,
                    "duplicate note set, relabelling node"
                );
                node.relabel(chord);
            } else {
                let id = NodeId(nodes.len());
                index.insert(chord.notes.clone(), id);
                nodes.push(ChordNode::new(id, chord));
            }
        }

        let mut edges = Vec::new();
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let shared = nodes[i].shared_notes(&nodes[j]);
                if shared >= homology {
                    adjacency[i].push(edges.len());
                    adjacency[j].push(edges.len());
                    edges.push(Edge::new(NodeId(i), NodeId(j), shared));
                }
            }
        }

        info!(
            nodes = nodes.len(),
            edges = edges.len(),
            homology,
            "built chord graph"
        );

        Self { homology, nodes, edges, index, adjacency }
    }

    /// Build from the built-in catalog.
    pub fn from_catalog(homology: usize) -> Self {
        Self::build(catalog::chords(), homology)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn homology(&self) -> usize {
        self.homology
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in first-insertion order; `nodes()[i].id == NodeId(i)`.
    pub fn nodes(&self) -> &[ChordNode] {
        &self.nodes
    }

    /// Edges in scan order (by lower endpoint, then upper endpoint).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&ChordNode> {
        self.nodes.get(id.0)
    }

    pub fn find_by_notes(&self, notes: &NoteSet) -> Option<&ChordNode> {
        self.index.get(notes).map(|id| &self.nodes[id.0])
    }

    /// First node carrying this display name.
    ///
    /// Names are not unique in the catalog (`F#mMaj7` is declared with two
    /// different note sets), so prefer `find_by_notes` when it matters.
    pub fn find_by_name(&self, name: &str) -> Option<&ChordNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Symmetric: `has_edge(a, b) == has_edge(b, a)`.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edge_between(a, b).is_some()
    }

    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.adjacency
            .get(a.0)?
            .iter()
            .map(|&e| &self.edges[e])
            .find(|edge| edge.other(a) == Some(b))
    }

    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(id.0)
            .into_iter()
            .flatten()
            .filter_map(move |&e| self.edges[e].other(id))
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(id.0).map_or(0, Vec::len)
    }

    pub fn isolated_nodes(&self) -> impl Iterator<Item = &ChordNode> + '_ {
        self.nodes.iter().filter(|n| self.degree(n.id) == 0)
    }

    /// Fraction of possible edges present; 0.0 for fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.nodes.len();
        if n < 2 {
            return 0.0;
        }
        (2 * self.edges.len()) as f64 / (n * (n - 1)) as f64
    }
}
