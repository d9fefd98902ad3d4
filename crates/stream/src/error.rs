//! Stream pipeline error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Graph error: {0}")]
    Graph(#[from] mindstream_graph::GraphError),

    #[error("Core error: {0}")]
    Core(#[from] mindstream_core::CoreError),

    #[error("Source and target are the same concept: {0}")]
    SameEndpoints(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StreamError>;
