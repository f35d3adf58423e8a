//! SVG serialisation of a `Scene`.

use std::io::Write;
use std::path::Path;

use tracing::info;

use super::{Label, Scene, Segment};
use crate::{Error, Result};

impl Scene {
    /// Stream the scene as a standalone SVG document.
    pub fn write_svg_to(&self, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="sans-serif">"#,
            w = self.width,
            h = self.height
        )?;
        writeln!(writer, r#"  <rect width="100%" height="100%" fill="{}"/>"#, self.background)?;

        writeln!(writer, r#"  <g id="axes">"#)?;
        for axis in &self.axes {
            write_segment(writer, axis)?;
        }
        for label in &self.axis_labels {
            write_label(writer, label, false)?;
        }
        writeln!(writer, "  </g>")?;

        writeln!(writer, r#"  <g id="edges">"#)?;
        for edge in &self.edges {
            write_segment(writer, edge)?;
        }
        writeln!(writer, "  </g>")?;

        writeln!(writer, r#"  <g id="nodes">"#)?;
        for m in &self.markers {
            writeln!(
                writer,
                r#"    <circle data-node="{}" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="{:.2}"/>"#,
                m.node, m.center.x, m.center.y, m.radius, m.fill, m.stroke, m.stroke_width
            )?;
        }
        writeln!(writer, "  </g>")?;

        writeln!(writer, r#"  <g id="labels">"#)?;
        for label in &self.labels {
            write_label(writer, label, false)?;
        }
        writeln!(writer, "  </g>")?;

        write_label(writer, &self.title, true)?;
        writeln!(writer, "</svg>")?;
        Ok(())
    }

    /// The SVG document as a string.
    pub fn to_svg(&self) -> Result<String> {
        let mut buf = Vec::with_capacity(256 * (self.markers.len() + self.edges.len() + 8));
        self.write_svg_to(&mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::Render(format!("SVG output is not UTF-8: {e}")))
    }

    /// Write the SVG document to a file at `path`.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        self.write_svg_to(&mut file)?;
        file.flush()?;
        info!(path = %path.display(), nodes = self.markers.len(), edges = self.edges.len(), "wrote scene");
        Ok(())
    }
}

fn write_segment(writer: &mut dyn Write, s: &Segment) -> std::io::Result<()> {
    writeln!(
        writer,
        r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{}" stroke-width="{:.2}"/>"#,
        s.from.x, s.from.y, s.to.x, s.to.y, s.color, s.opacity, s.width
    )
}

fn write_label(writer: &mut dyn Write, label: &Label, bold: bool) -> std::io::Result<()> {
    let weight = if bold { r#" font-weight="bold""# } else { "" };
    writeln!(
        writer,
        r#"    <text x="{:.2}" y="{:.2}" font-size="{:.1}" fill="{}" text-anchor="middle" dominant-baseline="central"{}>{}</text>"#,
        label.at.x,
        label.at.y,
        label.font_size,
        label.color,
        weight,
        escape_xml(&label.text)
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
