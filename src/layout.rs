//! Force-directed 3D layout (Fruchterman–Reingold).
//!
//! Every pair of nodes repels with `k²/d`, every edge attracts with `d²/k`.
//! Each iteration moves a node along its net displacement by at most the
//! current temperature, which cools linearly to zero. The result is centred
//! on the origin and scaled so the furthest coordinate sits at `±scale`.
//!
//! Initial positions come from a seeded `ChaCha8Rng`, so a given graph and
//! config always produce the same layout.

use nalgebra::{Point3, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::graph::ChordGraph;
use crate::model::NodeId;
use crate::{Error, Result};

/// Minimum pair distance used in force terms.
const MIN_DISTANCE: f64 = 0.01;

/// Layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// RNG seed for the initial positions.
    pub seed: u64,
    /// Optimal distance between nodes. Larger spreads the graph out.
    pub k: f64,
    /// Maximum number of iterations.
    pub iterations: usize,
    /// Stop once the mean per-node step drops below this.
    pub threshold: f64,
    /// Half-extent of the final bounding cube.
    pub scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            k: 0.3,
            iterations: 50,
            threshold: 1e-4,
            scale: 1.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(Error::InvalidConfig(format!("layout k must be positive, got {}", self.k)));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::InvalidConfig(format!("layout scale must be positive, got {}", self.scale)));
        }
        if !(self.threshold.is_finite() && self.threshold >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "layout threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Node positions, indexed by `NodeId`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    positions: Vec<Point3<f64>>,
}

impl Layout {
    pub fn position(&self, id: NodeId) -> Option<Point3<f64>> {
        self.positions.get(id.0).copied()
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Axis-aligned bounding box, `None` for an empty layout.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }
}

/// Compute a spring layout for `graph`.
pub fn spring_layout(graph: &ChordGraph, config: &LayoutConfig) -> Result<Layout> {
    config.validate()?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(Layout { positions: Vec::new() });
    }
    if n == 1 {
        return Ok(Layout { positions: vec![Point3::origin()] });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut pos: Vec<Point3<f64>> = (0..n)
        .map(|_| {
            Point3::new(
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
            )
        })
        .collect();

    // Dense adjacency; n is small.
    let mut adjacent = vec![false; n * n];
    for edge in graph.edges() {
        adjacent[edge.a.0 * n + edge.b.0] = true;
        adjacent[edge.b.0 * n + edge.a.0] = true;
    }

    let k = config.k;
    let mut temperature = initial_temperature(&pos);
    let cooling = temperature / (config.iterations as f64 + 1.0);
    let mut displacement = vec![Vector3::<f64>::zeros(); n];
    let mut iterations_run = 0;

    for _ in 0..config.iterations {
        iterations_run += 1;

        for (i, disp) in displacement.iter_mut().enumerate() {
            *disp = Vector3::zeros();
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = pos[i] - pos[j];
                let d = delta.norm().max(MIN_DISTANCE);
                let attraction = if adjacent[i * n + j] { d / k } else { 0.0 };
                *disp += delta * (k * k / (d * d) - attraction);
            }
        }

        let mut moved = 0.0;
        for (p, disp) in pos.iter_mut().zip(&displacement) {
            let mut length = disp.norm();
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            let step = disp * (temperature / length);
            *p += step;
            moved += step.norm();
        }

        temperature -= cooling;
        if moved / (n as f64) < config.threshold {
            break;
        }
    }

    rescale(&mut pos, config.scale);

    if let Some(bad) = pos.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
        return Err(Error::Layout(format!("non-finite position for node {bad}")));
    }

    debug!(nodes = n, iterations = iterations_run, seed = config.seed, "spring layout done");
    Ok(Layout { positions: pos })
}

/// One tenth of the widest extent of the starting positions.
fn initial_temperature(pos: &[Point3<f64>]) -> f64 {
    let (lo, hi) = pos.iter().fold(
        (Point3::from(Vector3::repeat(f64::INFINITY)), Point3::from(Vector3::repeat(f64::NEG_INFINITY))),
        |(lo, hi), p| (lo.inf(p), hi.sup(p)),
    );
    (hi - lo).max() * 0.1
}

/// Centre on the mean and scale the largest |coordinate| to `scale`.
fn rescale(pos: &mut [Point3<f64>], scale: f64) {
    let mean = pos.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords) / pos.len() as f64;
    let mut limit: f64 = 0.0;
    for p in pos.iter_mut() {
        *p -= mean;
        limit = limit.max(p.coords.amax());
    }
    if limit > 0.0 {
        for p in pos.iter_mut() {
            *p = Point3::from(p.coords * (scale / limit));
        }
    }
}
