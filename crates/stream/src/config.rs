//! Tunable constants of the stream pipeline

use serde::{Deserialize, Serialize};

/// Scaling and output settings for stream graphs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StreamConfig {
    /// Node size = closeness × this
    pub node_size_scale: f64,
    /// Label font size = closeness × this
    pub label_size_scale: f64,
    /// Decimal places kept for path betweenness
    pub precision: u32,
    /// Width and height of the rendered figure, in pixels
    pub canvas_size: u32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            node_size_scale: 8.0,
            label_size_scale: 120.0,
            precision: 4,
            canvas_size: 900,
        }
    }
}

impl StreamConfig {
    pub fn with_node_size_scale(mut self, scale: f64) -> Self {
        self.node_size_scale = scale;
        self
    }

    pub fn with_label_size_scale(mut self, scale: f64) -> Self {
        self.label_size_scale = scale;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_canvas_size(mut self, size: u32) -> Self {
        self.canvas_size = size.max(1);
        self
    }
}
