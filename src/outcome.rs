//! Status/message/result bag for richer operation returns.

/// Status of an [`Outcome`]. Starts bad; callers flip it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutcomeStatus {
    /// The operation did not succeed.
    #[default]
    Bad,
    /// The operation succeeded.
    Good,
}

/// Carries a good/bad status together with ordered message and result
/// collections, for operations where a bare boolean or `Result` loses too
/// much information.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    status: OutcomeStatus,
    messages: Vec<String>,
    results: Vec<T>,
}

impl<T> Outcome<T> {
    /// Create an empty outcome with [`OutcomeStatus::Bad`] status.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: OutcomeStatus::Bad,
            messages: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Whether the status is [`OutcomeStatus::Good`].
    #[must_use]
    pub fn is_good(&self) -> bool {
        self.status == OutcomeStatus::Good
    }

    /// Whether the status is [`OutcomeStatus::Bad`].
    #[must_use]
    pub fn is_bad(&self) -> bool {
        self.status == OutcomeStatus::Bad
    }

    /// Set the status to good.
    pub fn make_good(&mut self) {
        self.status = OutcomeStatus::Good;
    }

    /// Set the status to bad.
    pub fn make_bad(&mut self) {
        self.status = OutcomeStatus::Bad;
    }

    /// Append a message.
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Append a batch of messages. An empty batch is a no-op.
    pub fn add_messages(&mut self, messages: Vec<String>) {
        self.messages.extend(messages);
    }

    /// Append a result.
    pub fn add_result(&mut self, result: T) {
        self.results.push(result);
    }

    /// Append a batch of results. An empty batch is a no-op.
    pub fn add_results(&mut self, results: Vec<T>) {
        self.results.extend(results);
    }

    /// Whether any messages have been recorded.
    #[must_use]
    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Whether any results have been recorded.
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// The recorded messages, in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The recorded results, in insertion order.
    #[must_use]
    pub fn results(&self) -> &[T] {
        &self.results
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::new()
    }
}
