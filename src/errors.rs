//! Unified error types and result handling.
//!
//! The transition engine itself never fails: it answers with `bool` or `Option`.
//! These variants are produced by the layers around it (history, parsing, config)
//! when a rejected or malformed request has to be reported to a caller.

use thiserror::Error;

/// Errors surfaced by the status engine and its surrounding plumbing.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The requested transition is not defined for the current status
    #[error("Invalid status transition '{transition}' for current status '{status}'")]
    InvalidTransition {
        /// Transition that was requested
        transition: String,
        /// Status the entity was in when the request arrived
        status: String,
    },

    /// A status, transition or entity kind name did not parse
    #[error("Unknown {kind} '{value}'")]
    UnknownValue {
        /// What was being parsed (e.g. "lesson status")
        kind: &'static str,
        /// The offending input
        value: String,
    },

    /// Stored records do not form a valid history for one entity
    #[error("Invalid status history for '{entity_id}': {message}")]
    InvalidHistory {
        /// Entity the records were loaded for
        entity_id: String,
        /// Which check failed
        message: String,
    },

    /// Command-line arguments did not match any supported form
    #[error("Usage: {0}")]
    Usage(String),
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = Error::InvalidTransition {
            transition: "COMPLETE".to_string(),
            status: "REQUESTED".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition 'COMPLETE' for current status 'REQUESTED'"
        );
    }

    #[test]
    fn test_unknown_value_message() {
        let err = Error::unknown("lesson status", "PAID");
        assert_eq!(err.to_string(), "Unknown lesson status 'PAID'");
    }
}
