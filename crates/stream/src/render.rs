//! Figure output for mindset streams: SVG and Graphviz DOT

use crate::style::NodeStyle;
use crate::{MindsetStream, Result, StreamConfig};
use std::fmt::{self, Write};

/// Label sizes are given in points on a 30 inch figure
const FIGURE_POINTS: f64 = 30.0 * 72.0;
const DEFAULT_NODE_FILL: &str = "#ffffff";
const DEFAULT_EDGE_STROKE: &str = "#2c404c";
const EDGE_WIDTH: f64 = 2.0;

/// Renders a stream onto a square SVG canvas
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    canvas_size: f64,
}

impl SvgRenderer {
    pub fn new(canvas_size: u32) -> Self {
        Self {
            canvas_size: f64::from(canvas_size.max(1)),
        }
    }

    pub fn from_config(config: &StreamConfig) -> Self {
        Self::new(config.canvas_size)
    }

    /// Canvas coordinates of a layout point; SVG y grows downwards
    fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.canvas_size, (1.0 - y) * self.canvas_size)
    }

    pub fn render(&self, stream: &MindsetStream) -> Result<String> {
        let mut svg = String::new();
        self.write_svg(&mut svg, stream)?;
        Ok(svg)
    }

    fn write_svg(&self, svg: &mut impl Write, stream: &MindsetStream) -> fmt::Result {
        let size = self.canvas_size;

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        )?;
        writeln!(
            svg,
            "  <title>{} to {}</title>",
            escape_xml(&stream.source),
            escape_xml(&stream.target)
        )?;
        writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

        writeln!(svg, r#"  <g class="edges">"#)?;
        for edge in &stream.style.edges {
            let (Some(a), Some(b)) = (
                stream.layout.position(&edge.from),
                stream.layout.position(&edge.to),
            ) else {
                continue;
            };
            let (x1, y1) = self.project(a.x, a.y);
            let (x2, y2) = self.project(b.x, b.y);
            let stroke = edge.colour.map_or(DEFAULT_EDGE_STROKE, |c| c.hex());
            writeln!(
                svg,
                r#"    <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="{EDGE_WIDTH}"/>"#
            )?;
        }
        writeln!(svg, "  </g>")?;

        writeln!(svg, r#"  <g class="nodes">"#)?;
        for concept in stream.subgraph.concepts() {
            let (Some(point), Some(style)) = (
                stream.layout.position(&concept.label),
                stream.style.node(&concept.label),
            ) else {
                continue;
            };
            let (cx, cy) = self.project(point.x, point.y);
            let radius = style.size / 100.0 * size / 2.0;
            let font_size = style.label_size * size / FIGURE_POINTS;
            let font_style = if style.italic { "italic" } else { "normal" };
            let label = escape_xml(&concept.label);

            writeln!(
                svg,
                r#"    <circle cx="{cx:.2}" cy="{cy:.2}" r="{radius:.2}" fill="{}"/>"#,
                fill(style)
            )?;
            writeln!(
                svg,
                r#"    <text x="{cx:.2}" y="{cy:.2}" font-size="{font_size:.2}" font-style="{font_style}" text-anchor="middle" dominant-baseline="central">{label}</text>"#
            )?;
        }
        writeln!(svg, "  </g>")?;
        writeln!(svg, "</svg>")
    }
}

fn fill(style: &NodeStyle) -> &'static str {
    style.colour.map_or(DEFAULT_NODE_FILL, |c| c.hex())
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn quote_dot(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Graphviz DOT with node positions pinned to the stream layout.
/// Render with `neato -n2` or `fdp` to keep the positions.
pub fn to_dot(stream: &MindsetStream) -> Result<String> {
    let mut dot = String::new();
    write_dot(&mut dot, stream)?;
    Ok(dot)
}

fn write_dot(dot: &mut impl Write, stream: &MindsetStream) -> fmt::Result {
    writeln!(
        dot,
        "graph {} {{",
        quote_dot(&format!("{} to {}", stream.source, stream.target))
    )?;
    writeln!(dot, "  node [shape=circle, style=filled, fixedsize=true];")?;

    for concept in stream.subgraph.concepts() {
        let mut attrs = Vec::new();
        if let Some(point) = stream.layout.position(&concept.label) {
            attrs.push(format!("pos=\"{:.3},{:.3}!\"", point.x * 10.0, point.y * 10.0));
        }
        if let Some(style) = stream.style.node(&concept.label) {
            attrs.push(format!("fillcolor=\"{}\"", fill(style)));
            attrs.push(format!("width={:.3}", style.size / 10.0));
            attrs.push(format!("fontsize={:.1}", style.label_size / 4.0));
            if style.italic {
                attrs.push("fontname=\"Helvetica-Oblique\"".to_string());
            }
        }
        writeln!(dot, "  {} [{}];", quote_dot(&concept.label), attrs.join(", "))?;
    }

    for edge in &stream.style.edges {
        let colour = edge.colour.map_or(DEFAULT_EDGE_STROKE, |c| c.hex());
        writeln!(
            dot,
            "  {} -- {} [color=\"{}\"];",
            quote_dot(&edge.from),
            quote_dot(&edge.to),
            colour
        )?;
    }

    writeln!(dot, "}}")
}
