//! Mindset stream pipeline
//!
//! Builds the stream graph between two concepts and everything derived
//! from it:
//! - Layout: layered node positions from source to target
//! - Style: valence colours and closeness-based sizes
//! - Stats: path types and their summed edge betweenness
//! - Render: SVG and Graphviz DOT output

pub mod builder;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod report;
pub mod stats;
pub mod style;

pub use builder::{MindsetStream, StreamBuilder};
pub use config::StreamConfig;
pub use error::{Result, StreamError};
pub use layout::{node_positions, Layout, Point};
pub use render::{to_dot, SvgRenderer};
pub use report::StreamReport;
pub use stats::{PathStat, PathStats, TypeSummary};
pub use style::{Colour, StreamStyle};
