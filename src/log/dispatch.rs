//! Dispatch carrying a batch of log messages to appenders.

use super::message::Message;
use crate::chain::{Dispatch, DispatchState};
use std::any::Any;

/// A collection of [`Message`] values passed through the appender chain.
///
/// The dispatch becomes valid only when initialized with at least one
/// message; an empty batch leaves it invalid and every chain will refuse it.
#[derive(Debug, Default)]
pub struct MessageDispatch {
    state: DispatchState,
    /// The messages to hand to each appender.
    pub messages: Vec<Message>,
}

impl MessageDispatch {
    /// Create an empty, invalid dispatch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize with a batch of messages, marking the dispatch valid when
    /// the batch is non-empty.
    pub fn initialize(&mut self, messages: Vec<Message>) {
        if messages.is_empty() {
            return;
        }

        self.messages.extend(messages);
        self.state.make_valid();
    }

    /// Initialize with a single message.
    pub fn initialize_one(&mut self, message: Message) {
        self.initialize(vec![message]);
    }
}

impl Dispatch for MessageDispatch {
    fn state(&self) -> &DispatchState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DispatchState {
        &mut self.state
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::level::LogLevel;

    #[test]
    fn empty_batch_stays_invalid() {
        let mut dispatch = MessageDispatch::new();
        dispatch.initialize(Vec::new());

        assert!(!dispatch.is_valid());
        assert!(dispatch.messages.is_empty());
    }

    #[test]
    fn non_empty_batch_becomes_valid() {
        let mut dispatch = MessageDispatch::new();
        dispatch.initialize(vec![
            Message::new(LogLevel::Info, "one"),
            Message::new(LogLevel::Error, "two"),
        ]);

        assert!(dispatch.is_valid());
        assert!(dispatch.called_at().is_some());
        assert_eq!(dispatch.messages.len(), 2);
    }

    #[test]
    fn single_message_becomes_valid() {
        let mut dispatch = MessageDispatch::new();
        dispatch.initialize_one(Message::new(LogLevel::Alert, "solo"));

        assert!(dispatch.is_valid());
        assert_eq!(dispatch.messages.len(), 1);
    }
}
