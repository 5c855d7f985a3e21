//! Log appenders: chain nodes that receive message batches.
//!
//! An appender is any [`Node`] that recognizes [`MessageDispatch`]. The
//! implementations here cover the common cases; applications add their own by
//! implementing [`Node`] and downcasting the dispatch.

use super::dispatch::MessageDispatch;
use super::message::Message;
use crate::chain::{Dispatch, Node, NodeInfo};
use parking_lot::Mutex;
use std::any::Any;
use std::io::Write;
use std::sync::Arc;

/// Appender that discards every message batch.
#[derive(Debug, Default)]
pub struct NullAppender;

impl Node for NullAppender {
    fn info(&self) -> NodeInfo {
        NodeInfo::new("NullAppender", "1.0.0")
    }

    fn process(&self, _sender: &dyn Any, _dispatch: &mut dyn Dispatch) {}
}

/// Appender that writes each message's rendered line to stderr.
#[derive(Debug, Default)]
pub struct ConsoleAppender;

impl Node for ConsoleAppender {
    fn info(&self) -> NodeInfo {
        NodeInfo::new("ConsoleAppender", "1.0.0")
    }

    fn process(&self, _sender: &dyn Any, dispatch: &mut dyn Dispatch) {
        let Some(dispatch) = dispatch.as_any().downcast_ref::<MessageDispatch>() else {
            return;
        };

        let stderr = std::io::stderr();
        let mut out = stderr.lock();

        for message in &dispatch.messages {
            let _ = writeln!(out, "{}", message);
        }
    }
}

/// Appender that records received messages into a shared in-memory buffer.
///
/// The buffer uses interior mutability so one appender instance can be linked
/// into a chain while the owning code keeps reading what arrived.
#[derive(Debug, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<Vec<Message>>>,
}

impl MemoryAppender {
    /// Create an appender with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages, in arrival order.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.buffer.lock().clone()
    }

    /// Number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Whether no messages have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Discard all recorded messages.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    /// Handle to the shared buffer, for callers that link the appender into a
    /// chain but keep reading results elsewhere.
    #[must_use]
    pub fn handle(&self) -> Arc<Mutex<Vec<Message>>> {
        Arc::clone(&self.buffer)
    }
}

impl Node for MemoryAppender {
    fn info(&self) -> NodeInfo {
        NodeInfo::new("MemoryAppender", "1.0.0")
    }

    fn process(&self, _sender: &dyn Any, dispatch: &mut dyn Dispatch) {
        let Some(dispatch) = dispatch.as_any().downcast_ref::<MessageDispatch>() else {
            return;
        };

        self.buffer.lock().extend(dispatch.messages.iter().cloned());
    }
}
