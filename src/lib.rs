//! # tonnetz-graph: Chord Homology Graph
//!
//! Builds a graph of chords in which two chords are linked when they share at
//! least `homology` notes, lays it out with a seeded force-directed embedding
//! in three dimensions, and renders the result as an SVG scene.
//!
//! ## Design Principles
//!
//! 1. **Static catalog**: the chord table is read-only data, never mutated
//! 2. **Note set is identity**: chords with the same notes are one node
//! 3. **Builder is pure**: `ChordGraph::build` is infallible and deterministic
//! 4. **Reproducible output**: fixed seed → same layout → same SVG bytes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tonnetz_graph::{create_chord_graph, Config};
//!
//! # fn example() -> tonnetz_graph::Result<()> {
//! let config = Config::default().with_homology(2);
//! let graph = create_chord_graph(&config, "chords.svg")?;
//!
//! for node in graph.nodes() {
//!     println!("{} {} (degree {})", node.name, node.notes, graph.degree(node.id));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Catalog | `catalog` | 96 `Chord`s in 8 sections |
//! | Builder | `graph` | `ChordGraph` |
//! | Layout | `layout` | `Layout` (3D positions) |
//! | Renderer | `render` | `Scene` → SVG |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod catalog;
pub mod graph;
pub mod layout;
pub mod render;
pub mod config;

use std::path::Path;

use tracing::{info, warn};

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Chord, ChordType, ChordNode, Color, Edge, NodeId, NoteSet,
};

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use graph::ChordGraph;
pub use layout::{spring_layout, Layout, LayoutConfig};
pub use render::{render, render_graph, RenderConfig, Scene};
pub use config::Config;

// ============================================================================
// Entry point
// ============================================================================

/// Build the catalog graph at `config.homology`, render it and write the
/// SVG scene to `output`. Returns the graph for further use.
pub fn create_chord_graph(config: &Config, output: impl AsRef<Path>) -> Result<ChordGraph> {
    config.validate()?;

    let uncatalogued: Vec<&str> = ChordType::ALL
        .iter()
        .filter(|t| !t.in_catalog())
        .map(|t| t.display_name())
        .collect();
    if !uncatalogued.is_empty() {
        warn!(types = ?uncatalogued, "color table has chord types with no catalog entries");
    }

    let graph = ChordGraph::from_catalog(config.homology);
    let scene = render_graph(&graph, &config.layout, &config.render)?;
    scene.write_svg(output.as_ref())?;

    info!(
        homology = config.homology,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        density = graph.density(),
        "chord graph rendered"
    );
    Ok(graph)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
