//! Layered layout of a stream graph
//!
//! The source sits on the far left and the target on the far right.
//! Every other node is placed in the layer given by its position along
//! the shortest paths, and spread evenly down that layer.

use crate::{Result, StreamError};
use serde::{Deserialize, Serialize};

const SOURCE_POSITION: Point = Point { x: 0.1, y: 0.5 };
const TARGET_POSITION: Point = Point { x: 0.9, y: 0.5 };

/// Position in the unit square, y pointing up
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodePosition {
    pub label: String,
    #[serde(flatten)]
    pub point: Point,
}

/// Node coordinates of a stream graph
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    /// Number of layers between source and target
    pub layers: usize,
    pub nodes: Vec<NodePosition>,
}

impl Layout {
    pub fn position(&self, label: &str) -> Option<Point> {
        self.nodes
            .iter()
            .find(|n| n.label == label)
            .map(|n| n.point)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn place(&mut self, label: &str, point: Point) {
        match self.nodes.iter_mut().find(|n| n.label == label) {
            Some(existing) => existing.point = point,
            None => self.nodes.push(NodePosition {
                label: label.to_string(),
                point,
            }),
        }
    }
}

/// Calculate node positions from a set of equal-length shortest paths
pub fn node_positions(paths: &[Vec<String>]) -> Result<Layout> {
    let first = paths
        .first()
        .ok_or_else(|| StreamError::Layout("no paths to lay out".into()))?;
    if first.len() < 2 {
        return Err(StreamError::Layout(format!(
            "paths need a source and a target, got {} node(s)",
            first.len()
        )));
    }
    if let Some(odd) = paths.iter().find(|p| p.len() != first.len()) {
        return Err(StreamError::Layout(format!(
            "paths differ in length: {} and {}",
            first.len(),
            odd.len()
        )));
    }

    let layers = first.len() - 2;
    let mut layer_nodes: Vec<Vec<&str>> = vec![Vec::new(); layers];
    for path in paths {
        for (layer, node) in layer_nodes.iter_mut().zip(&path[1..path.len() - 1]) {
            if !layer.contains(&node.as_str()) {
                layer.push(node.as_str());
            }
        }
    }

    let mut layout = Layout {
        layers,
        nodes: Vec::new(),
    };
    layout.place(&first[0], SOURCE_POSITION);
    layout.place(&first[first.len() - 1], TARGET_POSITION);

    for (i, layer) in layer_nodes.iter().enumerate() {
        let x = (i + 1) as f64 / (layers + 1) as f64;
        for (j, node) in layer.iter().enumerate() {
            let y = 1.0 - (j + 1) as f64 / (layer.len() + 1) as f64;
            layout.place(node, Point { x, y });
        }
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|p| p.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_two_layer_layout() {
        let layout = node_positions(&paths(&[
            &["s", "a", "c", "t"],
            &["s", "b", "c", "t"],
        ]))
        .unwrap();

        assert_eq!(layout.layers, 2);
        assert_eq!(layout.len(), 5);
        assert_eq!(layout.position("s"), Some(Point { x: 0.1, y: 0.5 }));
        assert_eq!(layout.position("t"), Some(Point { x: 0.9, y: 0.5 }));

        let a = layout.position("a").unwrap();
        let b = layout.position("b").unwrap();
        assert!((a.x - 1.0 / 3.0).abs() < 1e-12);
        assert!((a.y - 2.0 / 3.0).abs() < 1e-12);
        assert!((b.y - 1.0 / 3.0).abs() < 1e-12);

        let c = layout.position("c").unwrap();
        assert!((c.x - 2.0 / 3.0).abs() < 1e-12);
        assert!((c.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_direct_edge_has_no_layers() {
        let layout = node_positions(&paths(&[&["s", "t"]])).unwrap();
        assert_eq!(layout.layers, 0);
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn test_rejects_degenerate_paths() {
        assert!(matches!(node_positions(&[]), Err(StreamError::Layout(_))));
        assert!(matches!(
            node_positions(&paths(&[&["s"]])),
            Err(StreamError::Layout(_))
        ));
        assert!(matches!(
            node_positions(&paths(&[&["s", "t"], &["s", "a", "t"]])),
            Err(StreamError::Layout(_))
        ));
    }
}
