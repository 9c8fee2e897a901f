//! ViewSpotError: Unified error type for mesh-viewspots public APIs
//!
//! Recoverable anomalies (orphan value records, elements without vertices,
//! neighbors without a value) never surface here; they are logged and the
//! computation carries on. Everything in this enum aborts the whole
//! computation so no partial result is ever returned.

use crate::topology::ids::ElementId;
use thiserror::Error;

/// Unified error type for mesh-viewspots operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewSpotError {
    /// An element has no value record and the policy forbids skipping it.
    #[error("Data error: element `{element}` has no value record")]
    MissingValue { element: ElementId },
    /// The mesh document could not be decoded.
    #[error("Mesh parse error: {0}")]
    MeshIoParse(String),
    /// Reading or writing mesh/result data failed.
    #[error("I/O error: {0}")]
    Io(String),
    /// A derived structure failed its internal consistency check.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl From<std::io::Error> for ViewSpotError {
    fn from(err: std::io::Error) -> Self {
        ViewSpotError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ViewSpotError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            ViewSpotError::Io(err.to_string())
        } else {
            ViewSpotError::MeshIoParse(err.to_string())
        }
    }
}
