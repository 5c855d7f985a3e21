//! Cascade Core Library
//!
//! This crate provides a lightweight chain-of-responsibility dispatch engine
//! and a logging subsystem built on top of it.
//!
//! # Overview
//!
//! A [`ChainHelper`] holds an ordered registry of [`Node`] implementations and
//! distributes a shared mutable [`Dispatch`] to each of them in insertion
//! order. Dispatches carry a small state machine (validity, consumability,
//! statefulness, consumption) plus an accumulator of result values; any node
//! may consume a consumable dispatch to halt further distribution.
//!
//! # Key Components
//!
//! - **Chain**: node registry, dispatch state machine, and traversal engine
//! - **Log**: severity levels, buffered logger, and appender nodes
//! - **Outcome**: a status/message/result bag for richer operation returns
//!
//! # Example
//!
//! ```ignore
//! use cascade::prelude::*;
//!
//! let mut chain = ChainHelper::new();
//! chain.link_node(Arc::new(MyNode));
//!
//! let mut dispatch = MyDispatch::new();
//! dispatch.initialize(input);
//!
//! if chain.traverse(&mut dispatch, None) {
//!     println!("results: {:?}", dispatch.results());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod error;
pub mod log;
pub mod outcome;
pub mod prelude;

// Re-export key types at crate root for convenience
pub use chain::{ChainHelper, Dispatch, DispatchState, Node, NodeInfo};
pub use error::{CascadeError, Result};
pub use log::{LogLevel, Logger, Message, MessageDispatch};
pub use outcome::{Outcome, OutcomeStatus};
