//! Error types for cascade.
//!
//! The chain core signals every control-flow outcome (empty chain, invalid
//! dispatch, consumed dispatch, invalid node) through booleans and debug
//! traces, never through errors. The only genuinely exceptional condition in
//! the system is a malformed log level name arriving at the logging layer.

use thiserror::Error;

/// The main error type for cascade operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CascadeError {
    /// A log level name that does not match any known severity.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Result type alias using [`CascadeError`].
pub type Result<T> = std::result::Result<T, CascadeError>;
