//! Chord homology graph renderer.
//!
//! # Usage
//!
//! ```bash
//! # Chords sharing at least two notes, written to chord_graph.svg
//! cargo run --release
//!
//! # Stricter threshold, different seed, custom output path
//! cargo run --release -- --homology 3 --seed 7 --output triads.svg
//!
//! # Per-duplicate and layout detail
//! RUST_LOG=tonnetz_graph=debug cargo run
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tonnetz_graph::{config::DEFAULT_HOMOLOGY, create_chord_graph, Config};

/// Render the chord homology graph as a 3D SVG scene
#[derive(Parser, Debug)]
#[command(name = "tonnetz")]
#[command(about = "Link chords that share notes and draw the graph in 3D", long_about = None)]
struct Args {
    /// Minimum number of shared notes for two chords to be linked
    #[arg(long, default_value_t = DEFAULT_HOMOLOGY)]
    homology: usize,

    /// Where to write the SVG scene
    #[arg(short, long, default_value = "chord_graph.svg")]
    output: PathBuf,

    /// Layout RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Optimal node distance for the spring layout
    #[arg(long, default_value_t = 0.3)]
    k: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let mut config = Config::default()
        .with_homology(args.homology)
        .with_seed(args.seed);
    config.layout.k = args.k;

    let graph = create_chord_graph(&config, &args.output)?;

    println!(
        "{} chords, {} links (homology ≥ {}) → {}",
        graph.node_count(),
        graph.edge_count(),
        graph.homology(),
        args.output.display()
    );
    Ok(())
}
