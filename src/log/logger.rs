//! Buffering logger with minimum-level filtering and placeholder
//! interpolation.

use super::dispatch::MessageDispatch;
use super::level::LogLevel;
use super::message::Message;
use crate::chain::{ChainHelper, Node};
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Context values interpolated into `{placeholder}` tokens.
pub type LogContext = HashMap<String, Value>;

/// Logger which buffers messages and flushes them through a chain of
/// appender nodes.
///
/// Messages below the configured minimum level stay buffered and are never
/// delivered. [`output`](Logger::output) packages everything that qualifies
/// into a [`MessageDispatch`] and traverses the appender chain with the
/// logger itself as sender.
pub struct Logger {
    appenders: ChainHelper,
    messages: Vec<Message>,
    min_level: LogLevel,
}

impl Logger {
    /// Create a logger with the given minimum output level and no appenders.
    #[must_use]
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            appenders: ChainHelper::new(),
            messages: Vec::new(),
            min_level,
        }
    }

    /// Create a logger with an initial set of appenders.
    #[must_use]
    pub fn with_appenders(min_level: LogLevel, appenders: Vec<Arc<dyn Node>>) -> Self {
        let mut logger = Self::new(min_level);

        for appender in appenders {
            logger.add_appender(appender);
        }

        logger
    }

    /// Link an appender into the output chain.
    pub fn add_appender(&mut self, appender: Arc<dyn Node>) {
        self.appenders.link_node(appender);
    }

    /// The configured minimum output level.
    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Buffer a message with an arbitrary level.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.messages.push(Message::new(level, message));
    }

    /// Buffer a message after interpolating `{placeholder}` tokens from the
    /// given context.
    pub fn log_with(&mut self, level: LogLevel, message: &str, context: &LogContext) {
        let interpolated = interpolate(message, context);
        self.messages.push(Message::new(level, interpolated));
    }

    /// Buffer a debug-level message.
    pub fn debug(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    /// Buffer an info-level message.
    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Buffer a notice-level message.
    pub fn notice(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Notice, message);
    }

    /// Buffer a warning-level message.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Buffer an error-level message.
    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Buffer a critical-level message.
    pub fn critical(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }

    /// Buffer an alert-level message.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Alert, message);
    }

    /// Buffer an emergency-level message.
    pub fn emergency(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Emergency, message);
    }

    /// Flush the level-filtered buffer through the appender chain.
    ///
    /// Returns quietly when nothing meets the minimum level; otherwise the
    /// buffer is cleared and the qualifying messages are delivered in one
    /// [`MessageDispatch`].
    pub fn output(&mut self) {
        let min_level = self.min_level;
        let qualifying: Vec<Message> = self
            .messages
            .iter()
            .filter(|message| message.level >= min_level)
            .cloned()
            .collect();

        if qualifying.is_empty() {
            return;
        }

        self.messages.clear();

        let mut dispatch = MessageDispatch::new();
        dispatch.initialize(qualifying);

        let sender: &dyn Any = &*self;
        self.appenders.traverse(&mut dispatch, Some(sender));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

/// Interpolate `{placeholder}` tokens in a message from context values.
///
/// Messages without both braces are returned untouched. Null renders as
/// `null`, strings as their raw text, numbers and booleans canonically, and
/// arrays/objects as compact JSON.
fn interpolate(message: &str, context: &LogContext) -> String {
    if !message.contains('{') || !message.contains('}') {
        return message.to_string();
    }

    let mut out = message.to_string();

    for (key, value) in context {
        let token = format!("{{{}}}", key);

        if !out.contains(&token) {
            continue;
        }

        let rendered = match value {
            Value::Null => "null".to_string(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };

        out = out.replace(&token, &rendered);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::appender::MemoryAppender;
    use serde_json::json;

    #[test]
    fn every_level_reaches_the_appender() {
        for level in LogLevel::ALL {
            let appender = Arc::new(MemoryAppender::new());
            let mut logger = Logger::with_appenders(LogLevel::Debug, vec![appender.clone()]);

            logger.log(level, "Testing");
            logger.output();

            let messages = appender.messages();
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].level, level);
            assert_eq!(messages[0].message, "Testing");
        }
    }

    #[test]
    fn minimum_level_filters_output() {
        let appender = Arc::new(MemoryAppender::new());
        let mut logger = Logger::with_appenders(LogLevel::Warning, vec![appender.clone()]);

        logger.debug("dropped");
        logger.info("dropped");
        logger.warning("kept");
        logger.critical("kept");
        logger.output();

        let messages = appender.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].message, "kept");
        assert_eq!(messages[1].level, LogLevel::Critical);
    }

    #[test]
    fn output_without_qualifying_messages_is_a_noop() {
        let appender = Arc::new(MemoryAppender::new());
        let mut logger = Logger::with_appenders(LogLevel::Error, vec![appender.clone()]);

        logger.info("below the floor");
        logger.output();

        assert!(appender.is_empty());
    }

    #[test]
    fn output_drains_the_buffer() {
        let appender = Arc::new(MemoryAppender::new());
        let mut logger = Logger::with_appenders(LogLevel::Debug, vec![appender.clone()]);

        logger.info("once");
        logger.output();
        logger.output();

        assert_eq!(appender.len(), 1);
    }

    #[test]
    fn interpolate_replaces_placeholders() {
        let mut context = LogContext::new();
        context.insert("replace".to_string(), json!("REPLACE"));

        assert_eq!(
            interpolate("Testing the way we {replace} strings.", &context),
            "Testing the way we REPLACE strings."
        );
    }

    #[test]
    fn interpolate_renders_value_kinds() {
        let mut context = LogContext::new();
        context.insert("null".to_string(), Value::Null);
        context.insert("num".to_string(), json!(5));
        context.insert("flag".to_string(), json!(true));
        context.insert("obj".to_string(), json!({ "status": 5 }));

        assert_eq!(interpolate("{null}", &context), "null");
        assert_eq!(interpolate("{num}", &context), "5");
        assert_eq!(interpolate("{flag}", &context), "true");
        assert_eq!(interpolate("{obj}", &context), "{\"status\":5}");
    }

    #[test]
    fn interpolate_skips_messages_without_braces() {
        let mut context = LogContext::new();
        context.insert("key".to_string(), json!("value"));

        assert_eq!(interpolate("no tokens here", &context), "no tokens here");
        assert_eq!(interpolate("half open {key", &context), "half open {key");
    }

    #[test]
    fn log_with_interpolates_before_buffering() {
        let appender = Arc::new(MemoryAppender::new());
        let mut logger = Logger::with_appenders(LogLevel::Debug, vec![appender.clone()]);

        let mut context = LogContext::new();
        context.insert("who".to_string(), json!("world"));

        logger.log_with(LogLevel::Info, "hello {who}", &context);
        logger.output();

        assert_eq!(appender.messages()[0].message, "hello world");
    }
}
