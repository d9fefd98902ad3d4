//! Colours and sizes of stream graph nodes, edges and labels

use crate::StreamConfig;
use mindstream_core::{EdgeValence, Valence};
use mindstream_graph::ConceptGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Palette colours, named after their tableau counterparts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Colour {
    Blue,
    Grey,
    Red,
    Purple,
}

impl Colour {
    pub fn name(&self) -> &'static str {
        match self {
            Colour::Blue => "tab:blue",
            Colour::Grey => "tab:grey",
            Colour::Red => "tab:red",
            Colour::Purple => "tab:purple",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Colour::Blue => "#1f77b4",
            Colour::Grey => "#7f7f7f",
            Colour::Red => "#d62728",
            Colour::Purple => "#9467bd",
        }
    }

    /// Node colour for a valence; unlabelled nodes take the renderer default
    pub fn for_node(valence: Valence) -> Option<Self> {
        match valence {
            Valence::Positive => Some(Colour::Blue),
            Valence::Neutral => Some(Colour::Grey),
            Valence::Negative => Some(Colour::Red),
            Valence::Unlabelled => None,
        }
    }

    pub fn for_edge(valence: EdgeValence) -> Option<Self> {
        match valence {
            EdgeValence::Positive => Some(Colour::Blue),
            EdgeValence::Neutral => Some(Colour::Grey),
            EdgeValence::Negative => Some(Colour::Red),
            EdgeValence::Conflicting => Some(Colour::Purple),
            EdgeValence::Unlabelled => None,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeStyle {
    pub colour: Option<Colour>,
    /// Node size, in percent of the canvas
    pub size: f64,
    pub label_size: f64,
    pub italic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeStyle {
    pub from: String,
    pub to: String,
    pub colour: Option<Colour>,
}

/// Visual attributes of every node and edge in a stream subgraph
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StreamStyle {
    pub nodes: HashMap<String, NodeStyle>,
    pub edges: Vec<EdgeStyle>,
}

impl StreamStyle {
    /// Style a subgraph. Node and label sizes follow each node's
    /// closeness in the base graph; source and target labels are italic.
    pub fn compute(
        subgraph: &ConceptGraph,
        closeness: &HashMap<String, f64>,
        source: &str,
        target: &str,
        config: &StreamConfig,
    ) -> Self {
        let nodes = subgraph
            .concepts()
            .map(|concept| {
                let c = closeness.get(&concept.label).copied().unwrap_or(0.0);
                let style = NodeStyle {
                    colour: Colour::for_node(concept.valence),
                    size: c * config.node_size_scale,
                    label_size: c * config.label_size_scale,
                    italic: concept.label == source || concept.label == target,
                };
                (concept.label.clone(), style)
            })
            .collect();

        let edges = subgraph
            .edges()
            .map(|(from, to, valence)| EdgeStyle {
                from: from.to_string(),
                to: to.to_string(),
                colour: Colour::for_edge(valence),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn node(&self, label: &str) -> Option<&NodeStyle> {
        self.nodes.get(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindstream_core::Association;

    #[test]
    fn test_palette() {
        assert_eq!(Colour::for_node(Valence::Positive), Some(Colour::Blue));
        assert_eq!(Colour::for_node(Valence::Unlabelled), None);
        assert_eq!(Colour::for_edge(EdgeValence::Conflicting), Some(Colour::Purple));
        assert_eq!(Colour::Red.name(), "tab:red");
        assert_eq!(Colour::Grey.hex(), "#7f7f7f");
    }

    #[test]
    fn test_compute_style() {
        let graph = ConceptGraph::from_associations(&[
            Association::new("s", "m").with_valences(Valence::Positive, Valence::Negative),
            Association::new("m", "t").with_valences(Valence::Negative, Valence::Negative),
        ]);
        let closeness = HashMap::from([
            ("s".to_string(), 0.5),
            ("m".to_string(), 1.0),
            ("t".to_string(), 0.5),
        ]);
        let style = StreamStyle::compute(&graph, &closeness, "s", "t", &StreamConfig::default());

        let m = style.node("m").unwrap();
        assert_eq!(m.size, 8.0);
        assert_eq!(m.label_size, 120.0);
        assert_eq!(m.colour, Some(Colour::Red));
        assert!(!m.italic);
        assert!(style.node("s").unwrap().italic);
        assert!(style.node("t").unwrap().italic);

        assert_eq!(style.edges.len(), 2);
        assert_eq!(style.edges[0].colour, Some(Colour::Purple));
        assert_eq!(style.edges[1].colour, Some(Colour::Red));
    }
}
