//! Log message value object.

use super::level::LogLevel;
use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Timestamp format used in rendered and serialized messages.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A single log message: severity, text, and an immutable UTC creation
/// timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Severity of the message.
    pub level: LogLevel,
    /// The message text.
    pub message: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current UTC time.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// The immutable creation timestamp.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The timestamp rendered with microsecond precision.
    #[must_use]
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Serialize the message to a JSON object string.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Serialization of a string/string struct cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Message", 3)?;
        state.serialize_field("level", self.level.as_upper())?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("timestamp", &self.timestamp_str())?;
        state.end()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<9} {}",
            self.timestamp_str(),
            self.level.as_upper(),
            self.message
        )
    }
}
