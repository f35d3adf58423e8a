//! # Spatial Renderer
//!
//! Turns a `ChordGraph` plus a `Layout` into a flat `Scene` of screen-space
//! primitives, then serialises that scene as SVG.
//!
//! ```text
//! ChordGraph ──spring_layout──► Layout ──Camera──► Scene ──► SVG
//! ```
//!
//! Draw order: axes, edges, markers (far to near), labels, title.

pub mod camera;
mod svg;

use nalgebra::{Point2, Point3, Vector3};
use tracing::debug;

use crate::graph::ChordGraph;
use crate::layout::{spring_layout, Layout, LayoutConfig};
use crate::model::{Color, NodeId};
use crate::{Error, Result};

pub use camera::{Camera, Projected, Viewport};

// ============================================================================
// Configuration
// ============================================================================

/// Rendering parameters. Sizes are in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Height of the band above the plot reserved for the title.
    pub title_band: u32,
    pub background: Color,
    pub marker_radius: f64,
    pub marker_stroke: Color,
    pub marker_stroke_width: f64,
    /// Offset applied on every axis to a node's label anchor, as a fraction
    /// of the layout's half-extent.
    pub label_offset: f64,
    pub font_size: f64,
    pub text_color: Color,
    pub edge_color: Color,
    pub edge_opacity: f64,
    pub edge_width: f64,
    pub axis_color: Color,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title_band: 40,
            background: Color::WHITE,
            marker_radius: 7.0,
            marker_stroke: Color::BLACK,
            marker_stroke_width: 1.0,
            label_offset: 0.02,
            font_size: 12.0,
            text_color: Color::BLACK,
            edge_color: Color::GRAY,
            edge_opacity: 0.6,
            edge_width: 1.5,
            axis_color: Color::rgb(64, 64, 64),
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height <= self.title_band {
            return Err(Error::InvalidConfig(format!(
                "canvas {}x{} leaves no room below a {}px title band",
                self.width, self.height, self.title_band
            )));
        }
        if !(0.0..=1.0).contains(&self.edge_opacity) {
            return Err(Error::InvalidConfig(format!(
                "edge opacity must be within [0, 1], got {}",
                self.edge_opacity
            )));
        }
        for (name, value) in [
            ("marker radius", self.marker_radius),
            ("font size", self.font_size),
            ("edge width", self.edge_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.marker_stroke_width.is_finite() && self.marker_stroke_width >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "marker stroke width must be non-negative, got {}",
                self.marker_stroke_width
            )));
        }
        if !self.label_offset.is_finite() || !self.azimuth_deg.is_finite() {
            return Err(Error::InvalidConfig("label offset and azimuth must be finite".into()));
        }
        if !(self.elevation_deg.is_finite() && self.elevation_deg.abs() < 90.0) {
            return Err(Error::InvalidConfig(format!(
                "elevation must be strictly between -90 and 90 degrees, got {}",
                self.elevation_deg
            )));
        }
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        let band = self.title_band as f64;
        Viewport {
            x: 0.0,
            y: band,
            width: self.width as f64,
            height: self.height as f64 - band,
        }
    }
}

// ============================================================================
// Scene primitives
// ============================================================================

/// A straight line in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
    pub color: Color,
    pub opacity: f64,
    pub width: f64,
}

/// A node marker: filled, outlined circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub node: NodeId,
    pub center: Point2<f64>,
    pub depth: f64,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// Centred text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point2<f64>,
    pub font_size: f64,
    pub color: Color,
}

/// Everything needed to draw the graph, already projected to pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: Label,
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub axes: Vec<Segment>,
    pub axis_labels: Vec<Label>,
    pub edges: Vec<Segment>,
    /// Sorted far to near.
    pub markers: Vec<Marker>,
    /// One per node, in node order.
    pub labels: Vec<Label>,
}

/// Title text for a given threshold.
pub fn title(homology: usize) -> String {
    format!("3D Chord Transition Graph (Homology ≥ {homology})")
}

// ============================================================================
// Rendering
// ============================================================================

/// Lay out `graph` and draw it.
pub fn render_graph(
    graph: &ChordGraph,
    layout_config: &LayoutConfig,
    config: &RenderConfig,
) -> Result<Scene> {
    let layout = spring_layout(graph, layout_config)?;
    render(graph, &layout, config)
}

/// Draw `graph` at the positions in `layout`.
pub fn render(graph: &ChordGraph, layout: &Layout, config: &RenderConfig) -> Result<Scene> {
    config.validate()?;

    if layout.len() != graph.node_count() {
        return Err(Error::Render(format!(
            "layout has {} positions for {} nodes",
            layout.len(),
            graph.node_count()
        )));
    }

    let extent = match layout.positions().iter().map(|p| p.coords.amax()).fold(0.0_f64, f64::max) {
        e if e > 0.0 => e,
        _ => 1.0,
    };
    // Project in units of `extent` so the frustum does not depend on the
    // layout scale.
    let positions: Vec<Point3<f64>> = graph
        .nodes()
        .iter()
        .map(|node| {
            layout
                .position(node.id)
                .map(|p| Point3::from(p.coords / extent))
                .ok_or_else(|| Error::Render(format!("no position for node {} ({})", node.id, node.name)))
        })
        .collect::<Result<_>>()?;

    // The axis box is the unit cube; fit its corners.
    let camera = Camera::orbit(config.elevation_deg, config.azimuth_deg, 3f64.sqrt(), config.viewport());

    let projected: Vec<Projected> = positions.iter().map(|p| camera.project(p)).collect();

    let (axes, axis_labels) = axis_box(&camera, config);

    let edges: Vec<Segment> = graph
        .edges()
        .iter()
        .map(|edge| Segment {
            from: projected[edge.a.0].screen,
            to: projected[edge.b.0].screen,
            color: config.edge_color,
            opacity: config.edge_opacity,
            width: config.edge_width,
        })
        .collect();

    let mut markers: Vec<Marker> = graph
        .nodes()
        .iter()
        .zip(&projected)
        .map(|(node, p)| Marker {
            node: node.id,
            center: p.screen,
            depth: p.depth,
            radius: config.marker_radius,
            fill: node.color,
            stroke: config.marker_stroke,
            stroke_width: config.marker_stroke_width,
        })
        .collect();
    markers.sort_by(|a, b| b.depth.total_cmp(&a.depth).then(a.node.cmp(&b.node)));

    let offset = Vector3::repeat(config.label_offset);
    let labels: Vec<Label> = graph
        .nodes()
        .iter()
        .zip(&positions)
        .map(|(node, p)| Label {
            text: node.name.clone(),
            at: camera.project(&(*p + offset)).screen,
            font_size: config.font_size,
            color: config.text_color,
        })
        .collect();

    let title = Label {
        text: title(graph.homology()),
        at: Point2::new(config.width as f64 / 2.0, config.title_band as f64 * 0.6),
        font_size: config.font_size * 1.4,
        color: config.text_color,
    };

    debug!(
        markers = markers.len(),
        edges = edges.len(),
        width = config.width,
        height = config.height,
        "scene assembled"
    );

    Ok(Scene {
        title,
        width: config.width,
        height: config.height,
        background: config.background,
        axes,
        axis_labels,
        edges,
        markers,
        labels,
    })
}

/// Three edges of the unit cube meeting at its (-, -, -) corner, with
/// X / Y / Z captions just past their far ends.
fn axis_box(camera: &Camera, config: &RenderConfig) -> (Vec<Segment>, Vec<Label>) {
    let corner = Point3::new(-1.0, -1.0, -1.0);
    let mut axes = Vec::with_capacity(3);
    let mut labels = Vec::with_capacity(3);

    for (axis, name) in [(Vector3::x(), "X"), (Vector3::y(), "Y"), (Vector3::z(), "Z")] {
        let end = corner + axis * 2.0;
        axes.push(Segment {
            from: camera.project(&corner).screen,
            to: camera.project(&end).screen,
            color: config.axis_color,
            opacity: 1.0,
            width: 1.0,
        });
        labels.push(Label {
            text: name.to_string(),
            at: camera.project(&(end + axis * 0.12)).screen,
            font_size: config.font_size,
            color: config.axis_color,
        });
    }

    (axes, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Chord, ChordType};

    fn scene(homology: usize) -> (ChordGraph, Scene) {
        let graph = ChordGraph::from_catalog(homology);
        let scene = render_graph(&graph, &LayoutConfig::default(), &RenderConfig::default()).unwrap();
        (graph, scene)
    }

    #[test]
    fn test_one_primitive_per_node_and_edge() {
        let (graph, scene) = scene(2);
        assert_eq!(scene.markers.len(), graph.node_count());
        assert_eq!(scene.labels.len(), graph.node_count());
        assert_eq!(scene.edges.len(), graph.edge_count());
        assert_eq!(scene.axes.len(), 3);
        assert_eq!(
            scene.axis_labels.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            vec!["X", "Y", "Z"]
        );
    }

    #[test]
    fn test_title_echoes_homology() {
        let (_, scene) = scene(3);
        assert_eq!(scene.title.text, "3D Chord Transition Graph (Homology ≥ 3)");
    }

    #[test]
    fn test_markers_far_to_near() {
        let (_, scene) = scene(2);
        assert!(scene.markers.windows(2).all(|w| w[0].depth >= w[1].depth));
    }

    #[test]
    fn test_marker_style() {
        let (graph, scene) = scene(2);
        let config = RenderConfig::default();
        for marker in &scene.markers {
            let node = graph.node(marker.node).unwrap();
            assert_eq!(marker.fill, node.color);
            assert_eq!(marker.stroke, Color::BLACK);
            assert_eq!(marker.radius, config.marker_radius);
        }
        for edge in &scene.edges {
            assert_eq!(edge.color, Color::GRAY);
            assert_eq!(edge.opacity, 0.6);
        }
    }

    #[test]
    fn test_labels_offset_from_markers() {
        let (graph, scene) = scene(2);
        for node in graph.nodes() {
            let label = &scene.labels[node.id.0];
            assert_eq!(label.text, node.name);
            let marker = scene.markers.iter().find(|m| m.node == node.id).unwrap();
            let shift = (label.at - marker.center).norm();
            assert!(shift > 0.0 && shift < 40.0, "{}: shift {shift}", node.name);
        }
    }

    #[test]
    fn test_mismatched_layout_rejected() {
        let small = ChordGraph::build(vec![Chord::new(["C", "E", "G"], "C", ChordType::Major)], 2);
        let layout = spring_layout(&small, &LayoutConfig::default()).unwrap();
        let big = ChordGraph::from_catalog(2);
        let err = render(&big, &layout, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_layout_for_larger_graph_rejected() {
        let big = ChordGraph::from_catalog(2);
        let layout = spring_layout(&big, &LayoutConfig::default()).unwrap();
        let small = ChordGraph::build(vec![Chord::new(["C", "E", "G"], "C", ChordType::Major)], 2);
        let err = render(&small, &layout, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_projection_independent_of_layout_scale() {
        let graph = ChordGraph::from_catalog(2);
        let config = RenderConfig::default();
        let reference = render_graph(&graph, &LayoutConfig::default(), &config).unwrap();

        for scale in [1e-17, 1e-3, 1e6] {
            let layout_config = LayoutConfig { scale, ..Default::default() };
            layout_config.validate().unwrap();
            let scene = render_graph(&graph, &layout_config, &config).unwrap();

            assert_eq!(scene.markers.len(), reference.markers.len());
            for marker in &scene.markers {
                let expected = reference.markers.iter().find(|m| m.node == marker.node).unwrap();
                assert!((marker.center - expected.center).norm() < 1e-6, "scale {scale}");
            }
        }
    }

    #[test]
    fn test_invalid_render_config() {
        let bad = [
            RenderConfig { width: 0, ..Default::default() },
            RenderConfig { height: 40, ..Default::default() },
            RenderConfig { edge_opacity: 1.5, ..Default::default() },
            RenderConfig { elevation_deg: 90.0, ..Default::default() },
            RenderConfig { marker_radius: -1.0, ..Default::default() },
            RenderConfig { edge_width: -1.5, ..Default::default() },
            RenderConfig { edge_width: f64::NAN, ..Default::default() },
            RenderConfig { marker_stroke_width: -1.0, ..Default::default() },
            RenderConfig { marker_stroke_width: f64::INFINITY, ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))), "{config:?}");
        }
    }
}
