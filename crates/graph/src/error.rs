//! Graph error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Concept not found in graph: {0}")]
    NodeNotFound(String),

    #[error("No path between {from} and {to}")]
    NoPath { from: String, to: String },

    #[error("Core error: {0}")]
    Core(#[from] mindstream_core::CoreError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
