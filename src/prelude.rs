//! Prelude for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```ignore
//! use cascade::prelude::*;
//! ```

// Chain core
pub use crate::chain::{ChainHelper, Dispatch, DispatchState, Node, NodeInfo};

// Error handling
pub use crate::error::{CascadeError, Result};

// Logging
pub use crate::log::{
    ConsoleAppender, LogContext, LogLevel, Logger, MemoryAppender, Message, MessageDispatch,
    NullAppender,
};

// Outcome helper
pub use crate::outcome::{Outcome, OutcomeStatus};

// Nodes are linked as shared trait objects
pub use std::sync::Arc;
