//! Stream builder - turns association data into a mindset stream graph

use crate::layout::{node_positions, Layout};
use crate::stats::PathStats;
use crate::style::StreamStyle;
use crate::{Result, StreamConfig, StreamError};
use chrono::{DateTime, Utc};
use mindstream_core::{Association, PathType, Valence};
use mindstream_graph::{closeness_centrality, edge_betweenness_centrality, ConceptGraph};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// A mindset stream between two concepts, ready to report or render
#[derive(Debug, Clone)]
pub struct MindsetStream {
    pub source: String,
    pub target: String,
    /// Bridge subgraph made of the shortest paths
    pub subgraph: ConceptGraph,
    /// Shortest paths through the subgraph
    pub paths: Vec<Vec<String>>,
    /// Closeness of each subgraph node, measured in the base graph
    pub closeness: HashMap<String, f64>,
    pub layout: Layout,
    pub style: StreamStyle,
    pub stats: PathStats,
    pub generated_at: DateTime<Utc>,
}

/// Builds mindset streams with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct StreamBuilder {
    config: StreamConfig,
}

impl StreamBuilder {
    pub fn new(config: StreamConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Build the stream graph between `source` and `target` and compute
    /// its path statistics
    #[instrument(skip(self, associations), fields(rows = associations.len()))]
    pub fn build(
        &self,
        associations: &[Association],
        source: &str,
        target: &str,
    ) -> Result<MindsetStream> {
        let source = Association::canonicalize(source);
        let target = Association::canonicalize(target);
        if source == target {
            return Err(StreamError::SameEndpoints(source));
        }

        let base = ConceptGraph::from_associations(associations);
        let base_paths = base.all_shortest_paths(&source, &target)?;
        let subgraph = base.bridge_subgraph(&base_paths)?;
        info!(
            "Stream {} -> {}: {} paths over {} concepts",
            source,
            target,
            base_paths.len(),
            subgraph.node_count()
        );

        let closeness: HashMap<String, f64> = closeness_centrality(&base)
            .into_iter()
            .filter(|(label, _)| subgraph.contains(label))
            .collect();

        let paths = subgraph.all_shortest_paths(&source, &target)?;
        let layout = node_positions(&paths)?;
        let style = StreamStyle::compute(&subgraph, &closeness, &source, &target, &self.config);

        let betweenness = edge_betweenness_centrality(&base);
        let mut stats = PathStats::new(self.config.precision);
        for path in &paths {
            let valences: Vec<Valence> = path
                .iter()
                .map(|label| subgraph.valence(label).unwrap_or_default())
                .collect();
            let path_type = PathType::classify(&valences);
            stats.push(path.clone(), path_type, betweenness.path_sum(path));
        }
        debug!("Classified {} paths", stats.len());

        Ok(MindsetStream {
            source,
            target,
            subgraph,
            paths,
            closeness,
            layout,
            style,
            stats,
            generated_at: Utc::now(),
        })
    }
}
