//! Serializable summary of a mindset stream

use crate::layout::Layout;
use crate::stats::{PathStat, TypeSummary};
use crate::{MindsetStream, Result};
use chrono::{DateTime, Utc};
use mindstream_graph::GraphSummary;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamReport {
    pub source: String,
    pub target: String,
    pub generated_at: DateTime<Utc>,
    pub subgraph: GraphSummary,
    pub paths: Vec<PathStat>,
    pub type_summary: Vec<TypeSummary>,
    pub layout: Layout,
}

impl MindsetStream {
    pub fn report(&self) -> StreamReport {
        StreamReport {
            source: self.source.clone(),
            target: self.target.clone(),
            generated_at: self.generated_at,
            subgraph: self.subgraph.summary(),
            paths: self.stats.rows.clone(),
            type_summary: self.stats.type_summary(),
            layout: self.layout.clone(),
        }
    }
}

impl StreamReport {
    /// Write the report as pretty-printed JSON
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
