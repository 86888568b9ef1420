/*!
# Unified Error Type

Error taxonomy for the MASTIFF engine: invariant violations on the input
graph, allocation failures, and validator failures. All three are fatal —
the engine does not retry or recover from any of them locally.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for MASTIFF engine operations.
#[derive(Debug)]
pub enum MastiffError {
    /// An input invariant (sorted adjacency, symmetry, positive weight) was violated.
    InputInvariantViolated {
        invariant: &'static str,
        detail: String,
    },

    /// An allocation needed by the engine could not be satisfied.
    OutOfMemory { what: &'static str, bytes: usize },

    /// The MSF validator rejected the computed forest.
    ValidationFailed(String),
}

impl MastiffError {
    /// Creates an invariant-violation error naming the broken invariant and the offending
    /// vertex/edge.
    pub fn invariant_violated(invariant: &'static str, detail: impl Into<String>) -> Self {
        MastiffError::InputInvariantViolated {
            invariant,
            detail: detail.into(),
        }
    }

    /// Creates an out-of-memory error for the named allocation site.
    pub fn out_of_memory(what: &'static str, bytes: usize) -> Self {
        MastiffError::OutOfMemory { what, bytes }
    }

    /// Creates a validation-failed error with a diagnostic message.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        MastiffError::ValidationFailed(message.into())
    }
}

impl fmt::Display for MastiffError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MastiffError::InputInvariantViolated { invariant, detail } => {
                write!(f, "input invariant `{invariant}` violated: {detail}")
            }
            MastiffError::OutOfMemory { what, bytes } => {
                write!(f, "out of memory allocating {bytes} bytes for {what}")
            }
            MastiffError::ValidationFailed(msg) => write!(f, "MSF validation failed: {msg}"),
        }
    }
}

impl Error for MastiffError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MastiffError>;
