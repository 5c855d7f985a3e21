//! Logging subsystem built on the chain dispatch engine.
//!
//! The [`Logger`] buffers [`Message`] values, filters them against a minimum
//! [`LogLevel`], and flushes batches through a [`ChainHelper`] of appender
//! nodes wrapped in a [`MessageDispatch`].
//!
//! ```text
//! ┌────────┐  log()   ┌────────────────┐  output()  ┌─────────────────┐
//! │ caller │─────────>│ Logger         │───────────>│ MessageDispatch │
//! └────────┘          │ (buffer+floor) │            └────────┬────────┘
//!                     └────────────────┘            traverse │
//!                                                   ┌────────────────┐
//!                                                   │ appender chain │
//!                                                   └────────────────┘
//! ```
//!
//! [`ChainHelper`]: crate::chain::ChainHelper

mod appender;
mod dispatch;
mod level;
mod logger;
mod message;

pub use appender::{ConsoleAppender, MemoryAppender, NullAppender};
pub use dispatch::MessageDispatch;
pub use level::LogLevel;
pub use logger::{LogContext, Logger};
pub use message::Message;
