//! End-to-end tests for graph construction over the built-in catalog.
//!
//! Covers node collapsing, threshold edge cases, edge uniqueness and the
//! documented last-entry-wins labelling.

use std::collections::{BTreeSet, HashSet};

use pretty_assertions::assert_eq;
use tonnetz_graph::{catalog, Chord, ChordGraph, ChordType, Color, NodeId, NoteSet};

fn edge_set(graph: &ChordGraph) -> BTreeSet<(NodeId, NodeId)> {
    graph.edges().iter().map(|e| e.endpoints()).collect()
}

// ============================================================================
// Nodes
// ============================================================================

#[test]
fn test_node_count_is_distinct_note_sets() {
    let distinct: HashSet<NoteSet> = catalog::chords().map(|c| c.notes).collect();
    let graph = ChordGraph::from_catalog(2);

    assert_eq!(catalog::len(), 96);
    assert_eq!(distinct.len(), 79);
    assert_eq!(graph.node_count(), distinct.len());
}

#[test]
fn test_node_ids_are_dense() {
    let graph = ChordGraph::from_catalog(2);
    for (i, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.id, NodeId(i));
        assert_eq!(graph.node(node.id), Some(node));
    }
    assert!(graph.node(NodeId(graph.node_count())).is_none());
}

#[test]
fn test_bm_bdim_collapse() {
    let graph = ChordGraph::from_catalog(2);
    let node = graph.find_by_notes(&NoteSet::new(["B", "D", "F"])).unwrap();

    // Minor is declared first, Diminished later; the later label sticks.
    assert_eq!(node.name, "Bdim");
    assert_eq!(node.chord_type, ChordType::Diminished);
    assert_eq!(node.color, Color::PURPLE);
    assert!(graph.find_by_name("Bm").is_none());
}

#[test]
fn test_triple_collision_takes_last_section() {
    let graph = ChordGraph::from_catalog(2);
    let node = graph
        .find_by_notes(&NoteSet::new(["A#", "C#", "E", "G#"]))
        .unwrap();
    assert_eq!(node.name, "A#m7♭5");
    assert_eq!(node.chord_type, ChordType::HalfDiminished);
    assert_eq!(node.color, Color::DARK_RED);
}

#[test]
fn test_first_insertion_order_kept() {
    let graph = ChordGraph::from_catalog(2);
    // {B, D, F} was first seen as the third Minor entry.
    let node = graph.find_by_notes(&NoteSet::new(["B", "D", "F"])).unwrap();
    assert_eq!(node.id, NodeId(2));
    assert_eq!(graph.nodes()[0].name, "Am");
}

#[test]
fn test_only_catalogued_types_appear() {
    let graph = ChordGraph::from_catalog(2);
    for node in graph.nodes() {
        assert!(node.chord_type.in_catalog(), "{}", node.name);
        assert_eq!(node.color, node.chord_type.color());
    }
}

// ============================================================================
// Edges
// ============================================================================

#[test]
fn test_edge_counts_by_threshold() {
    let counts: Vec<usize> = (0..=5)
        .map(|h| ChordGraph::from_catalog(h).edge_count())
        .collect();
    assert_eq!(counts, vec![3081, 1749, 634, 113, 0, 0]);
}

#[test]
fn test_zero_threshold_is_complete() {
    let graph = ChordGraph::from_catalog(0);
    let n = graph.node_count();
    assert_eq!(graph.edge_count(), n * (n - 1) / 2);
    assert!((graph.density() - 1.0).abs() < 1e-12);
    for node in graph.nodes() {
        assert_eq!(graph.degree(node.id), n - 1);
    }
}

#[test]
fn test_threshold_above_largest_chord_has_no_edges() {
    let graph = ChordGraph::from_catalog(catalog::max_chord_size() + 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.isolated_nodes().count(), graph.node_count());
}

#[test]
fn test_am_cm_share_one_note() {
    let am = NoteSet::new(["A", "C", "E"]);
    let cm = NoteSet::new(["C", "E♭", "G"]);

    for (homology, linked) in [(0, true), (1, true), (2, false)] {
        let graph = ChordGraph::from_catalog(homology);
        let a = graph.find_by_notes(&am).unwrap().id;
        let c = graph.find_by_notes(&cm).unwrap().id;
        assert_eq!(graph.has_edge(a, c), linked, "homology {homology}");
    }
}

#[test]
fn test_edge_iff_shared_at_least_threshold() {
    for homology in 0..=4 {
        let graph = ChordGraph::from_catalog(homology);
        let edges = edge_set(&graph);
        let nodes = graph.nodes();
        for a in nodes {
            for b in nodes {
                if a.id >= b.id {
                    continue;
                }
                let expected = a.shared_notes(b) >= homology;
                assert_eq!(edges.contains(&(a.id, b.id)), expected, "{} / {}", a.name, b.name);
            }
        }
    }
}

#[test]
fn test_edges_unique_and_symmetric() {
    let graph = ChordGraph::from_catalog(2);
    let pairs: Vec<(NodeId, NodeId)> = graph.edges().iter().map(|e| e.endpoints()).collect();
    let unique: HashSet<_> = pairs.iter().copied().collect();
    assert_eq!(unique.len(), pairs.len());

    for edge in graph.edges() {
        assert!(edge.a < edge.b);
        assert!(graph.has_edge(edge.a, edge.b));
        assert!(graph.has_edge(edge.b, edge.a));
        assert!(graph.neighbors(edge.a).any(|n| n == edge.b));
        assert!(graph.neighbors(edge.b).any(|n| n == edge.a));
        assert!(edge.shared >= 2);
    }
}

#[test]
fn test_degree_sum() {
    let graph = ChordGraph::from_catalog(3);
    let total: usize = graph.nodes().iter().map(|n| graph.degree(n.id)).sum();
    assert_eq!(total, 2 * graph.edge_count());
}

#[test]
fn test_monotone_over_catalog() {
    let graphs: Vec<ChordGraph> = (0..=4).map(ChordGraph::from_catalog).collect();
    for pair in graphs.windows(2) {
        let looser = edge_set(&pair[0]);
        let stricter = edge_set(&pair[1]);
        assert!(stricter.is_subset(&looser));
    }
}

#[test]
fn test_rebuild_is_identical() {
    let a = ChordGraph::from_catalog(2);
    let b = ChordGraph::from_catalog(2);
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.edges(), b.edges());
}

#[test]
fn test_graph_serializes() {
    let graph = ChordGraph::from_catalog(3);
    let json = serde_json::to_value(&graph).unwrap();

    assert_eq!(json["homology"], 3);
    assert_eq!(json["nodes"].as_array().unwrap().len(), graph.node_count());
    assert_eq!(json["edges"].as_array().unwrap().len(), graph.edge_count());
    assert_eq!(json["nodes"][0]["name"], "Am");
    assert_eq!(json["nodes"][0]["chord_type"], "Minor");
    assert!(json.get("index").is_none());
}

#[test]
fn test_deserialized_chords_keep_note_set_identity() {
    let json = r#"{"notes":["E","C","A","C"],"name":"Am (inverted)","chord_type":"Minor"}"#;
    let inverted: Chord = serde_json::from_str(json).unwrap();

    let canonical = NoteSet::new(["A", "C", "E"]);
    assert_eq!(inverted.notes, canonical);
    assert_eq!(inverted.notes.shared_count(&canonical), 3);

    let am = Chord::new(["A", "C", "E"], "Am", ChordType::Minor);
    let cm = Chord::new(["C", "E♭", "G"], "Cm", ChordType::Minor);
    let graph = ChordGraph::build(vec![am, cm, inverted], 2);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.node(NodeId(0)).unwrap().name, "Am (inverted)");
    assert_eq!(graph.edge_count(), 0);
}
