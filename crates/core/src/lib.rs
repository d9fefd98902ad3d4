//! Core domain types for Mindset Streams
//!
//! This crate defines the data every stage of the pipeline shares:
//! sentiment valences, keyword associations, path types, and the JSON
//! import of association and sentiment files.

pub mod association;
pub mod error;
pub mod import;
pub mod path_type;
pub mod sentiment;
pub mod valence;

pub use association::Association;
pub use error::{CoreError, Result};
pub use import::{load_associations, parse_associations, validate_record, RecordValidator};
pub use path_type::PathType;
pub use sentiment::{attach_sentiment, ValenceLexicon};
pub use valence::{EdgeValence, Valence};
