// PNG rendering of a language graph with plotters.
//
// Nodes sit on a circle in insertion order, so the same languages always
// produce the same picture. Edges are straight lines labeled at their
// midpoint with the pair score.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::graph::LanguageGraph;

const IMAGE_SIZE: (u32, u32) = (1200, 1000);
const NODE_RADIUS: i32 = 55;
const LAYOUT_RADIUS: f64 = 330.0;
const NODE_COLOR: RGBColor = RGBColor(173, 216, 230);

/// Pixel position of node `k` of `n` on the layout circle.
pub fn circular_position(k: usize, n: usize, center: (i32, i32)) -> (i32, i32) {
    if n <= 1 {
        return center;
    }
    // Start at 9 o'clock so a two-language graph is a horizontal line
    let angle = PI + 2.0 * PI * k as f64 / n as f64;
    (
        center.0 + (LAYOUT_RADIUS * angle.cos()).round() as i32,
        center.1 + (LAYOUT_RADIUS * angle.sin()).round() as i32,
    )
}

pub fn render_graph(graph: &LanguageGraph, title: &str, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("Failed to prepare canvas: {e}"))?;

    let area = root
        .titled(title, ("sans-serif", 36.0))
        .map_err(|e| anyhow!("Failed to draw title: {e}"))?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);

    let nodes: Vec<&str> = graph.nodes().collect();
    let position = |code: &str| {
        nodes
            .iter()
            .position(|n| *n == code)
            .map(|k| circular_position(k, nodes.len(), center))
    };

    let centered = |size: f64| {
        TextStyle::from(("sans-serif", size).into_font()).pos(Pos::new(HPos::Center, VPos::Center))
    };
    let edge_label_style = centered(28.0).color(&BLACK);
    let node_label_style = centered(32.0).color(&BLACK);

    for edge in graph.edges() {
        let (Some(pa), Some(pb)) = (position(edge.a), position(edge.b)) else {
            continue;
        };
        area.draw(&PathElement::new(vec![pa, pb], BLACK.stroke_width(2)))
            .map_err(|e| anyhow!("Failed to draw edge: {e}"))?;

        let mid = ((pa.0 + pb.0) / 2, (pa.1 + pb.1) / 2);
        area.draw(&Text::new(edge.score.to_string(), mid, edge_label_style.clone()))
            .map_err(|e| anyhow!("Failed to draw edge label: {e}"))?;
    }

    for (k, code) in nodes.iter().enumerate() {
        let p = circular_position(k, nodes.len(), center);
        area.draw(&Circle::new(p, NODE_RADIUS, NODE_COLOR.filled()))
            .map_err(|e| anyhow!("Failed to draw node: {e}"))?;
        area.draw(&Text::new(code.to_string(), p, node_label_style.clone()))
            .map_err(|e| anyhow!("Failed to draw node label: {e}"))?;
    }

    root.present()
        .map_err(|e| anyhow!("Failed to write {}: {e}", path.display()))?;
    Ok(())
}
