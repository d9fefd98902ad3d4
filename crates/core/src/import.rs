//! Association file import and record validation
//!
//! An association file is a JSON array of objects. Every object holds
//! exactly two whitespace-free string values, read in document order as
//! the first and second word of the pair.

use crate::{Association, CoreError, Result};
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Schema-backed validator for association records
pub struct RecordValidator {
    validator: Validator,
}

impl RecordValidator {
    /// Compile the association record schema
    pub fn new() -> Result<Self> {
        let schema = json!({
            "type": "object",
            "patternProperties": {
                "^.*$": {
                    "anyOf": [
                        { "type": "string", "pattern": "^[^\\s]*$" }
                    ]
                }
            },
            "additionalProperties": false
        });

        let validator =
            jsonschema::validator_for(&schema).map_err(|e| CoreError::Schema(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Check that a record has the structure expected of an association
    pub fn is_valid(&self, record: &Value) -> bool {
        self.validator.is_valid(record)
    }
}

/// Compiled once and shared by every import
static RECORD_VALIDATOR: Lazy<std::result::Result<RecordValidator, String>> =
    Lazy::new(|| RecordValidator::new().map_err(|e| e.to_string()));

fn record_validator() -> Result<&'static RecordValidator> {
    Lazy::force(&RECORD_VALIDATOR)
        .as_ref()
        .map_err(|e| CoreError::Schema(e.clone()))
}

/// Check a single record against the association schema
pub fn validate_record(record: &Value) -> bool {
    record_validator().is_ok_and(|validator| validator.is_valid(record))
}

/// Read a file into a string, keeping the path in the error
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a JSON array into its objects, rejecting anything else
pub(crate) fn parse_record_array(json: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(records) => Ok(records),
        other => Err(CoreError::Validation(format!(
            "expected a JSON array of records, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse association records from a JSON string.
///
/// Stops at the first record that fails validation.
#[instrument(skip(json))]
pub fn parse_associations(json: &str) -> Result<Vec<Association>> {
    let validator = record_validator()?;
    let records = parse_record_array(json)?;
    let mut associations = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if !validator.is_valid(record) {
            return Err(CoreError::InvalidRecord {
                index,
                record: record.to_string(),
            });
        }

        let words: Vec<&str> = record
            .as_object()
            .map(|obj| obj.values().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        if words.len() != 2 {
            return Err(CoreError::MalformedRecord {
                index,
                expected: 2,
                actual: words.len(),
            });
        }

        associations.push(Association::new(words[0], words[1]));
    }

    debug!("Parsed {} association records", associations.len());
    Ok(associations)
}

/// Import an association JSON file and validate its structure
#[instrument]
pub fn load_associations(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Vec<Association>> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let associations = parse_associations(&content)?;
    info!(
        "Loaded {} associations from {}",
        associations.len(),
        path.display()
    );
    Ok(associations)
}
