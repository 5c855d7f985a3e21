//! Dispatch trait and the dispatch state machine.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::any::Any;

/// The state machine every dispatch carries.
///
/// A dispatch starts invalid with no results. A concrete dispatch type marks
/// it valid during its `initialize` step (which also stamps the UTC instant,
/// exactly once), and may opt in to consumability and statefulness before or
/// during that step. The consumed flag transitions monotonically: once set it
/// is never cleared for the lifetime of the dispatch.
#[derive(Debug, Default)]
pub struct DispatchState {
    valid: bool,
    consumable: bool,
    stateful: bool,
    consumed: bool,
    called_at: Option<DateTime<Utc>>,
    results: Vec<Value>,
}

impl DispatchState {
    /// Create a fresh state: invalid, non-consumable, non-stateful, empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the dispatch valid for traversal, stamping the current UTC time
    /// on the first call. Subsequent calls leave the timestamp untouched.
    pub fn make_valid(&mut self) -> &mut Self {
        if self.called_at.is_none() {
            self.called_at = Some(Utc::now());
        }
        self.valid = true;
        self
    }

    /// Opt in to consumption semantics. Never reset.
    pub fn make_consumable(&mut self) -> &mut Self {
        self.consumable = true;
        self
    }

    /// Opt in to result accumulation. Never reset.
    pub fn make_stateful(&mut self) -> &mut Self {
        self.stateful = true;
        self
    }

    /// Mark the dispatch consumed.
    ///
    /// Returns `true` only when the dispatch is consumable and was not already
    /// consumed; otherwise returns `false` and changes nothing.
    pub fn consume(&mut self) -> bool {
        if self.consumable && !self.consumed {
            self.consumed = true;
            return true;
        }

        false
    }

    /// Record a result value. Appends when stateful, otherwise replaces the
    /// single result slot.
    pub fn set_result(&mut self, result: Value) -> &mut Self {
        if self.stateful {
            self.results.push(result);
        } else {
            self.results = vec![result];
        }

        self
    }

    /// The recorded results, or `None` when nothing has been recorded yet.
    #[must_use]
    pub fn results(&self) -> Option<&[Value]> {
        if self.results.is_empty() {
            None
        } else {
            Some(&self.results)
        }
    }

    /// Number of recorded results.
    #[must_use]
    pub fn num_results(&self) -> usize {
        self.results.len()
    }

    /// Whether the dispatch may be traversed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether consumption semantics apply.
    #[must_use]
    pub fn is_consumable(&self) -> bool {
        self.consumable
    }

    /// Whether a node has consumed the dispatch.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Whether results accumulate rather than overwrite.
    #[must_use]
    pub fn is_stateful(&self) -> bool {
        self.stateful
    }

    /// The UTC instant the dispatch was first marked valid.
    #[must_use]
    pub fn called_at(&self) -> Option<DateTime<Utc>> {
        self.called_at
    }

    /// Render the state as a short human-readable string for trace messages.
    #[must_use]
    pub fn summary(&self) -> String {
        let called_at = self
            .called_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());

        format!(
            "{{ called_at: {}, consumable: {}, stateful: {}, consumed: {} }}",
            called_at, self.consumable, self.stateful, self.consumed
        )
    }
}

/// The contract for all dispatches distributed through a chain.
///
/// Concrete dispatch types embed a [`DispatchState`] and expose it through
/// [`state`](Dispatch::state) / [`state_mut`](Dispatch::state_mut); the
/// provided methods delegate to it. Each concrete type also defines its own
/// inherent `initialize` operation (the input type is implementation-defined),
/// which is the only path to validity — a dispatch that was never initialized
/// is rejected by every chain.
///
/// The `as_any` accessors are what let nodes recognize the dispatch variants
/// they care about via downcasting.
pub trait Dispatch: Any {
    /// Shared access to the dispatch state machine.
    fn state(&self) -> &DispatchState;

    /// Exclusive access to the dispatch state machine.
    fn state_mut(&mut self) -> &mut DispatchState;

    /// Upcast for variant recognition.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for variant recognition with mutation.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Whether the dispatch may be traversed.
    fn is_valid(&self) -> bool {
        self.state().is_valid()
    }

    /// Whether consumption semantics apply.
    fn is_consumable(&self) -> bool {
        self.state().is_consumable()
    }

    /// Whether a node has consumed the dispatch.
    fn is_consumed(&self) -> bool {
        self.state().is_consumed()
    }

    /// Whether results accumulate rather than overwrite.
    fn is_stateful(&self) -> bool {
        self.state().is_stateful()
    }

    /// Mark the dispatch consumed; see [`DispatchState::consume`].
    fn consume(&mut self) -> bool {
        self.state_mut().consume()
    }

    /// Record a result value; see [`DispatchState::set_result`].
    fn set_result(&mut self, result: Value) {
        self.state_mut().set_result(result);
    }

    /// The recorded results, or `None` when nothing has been recorded yet.
    fn results(&self) -> Option<&[Value]> {
        self.state().results()
    }

    /// Number of recorded results.
    fn num_results(&self) -> usize {
        self.state().num_results()
    }

    /// The UTC instant the dispatch was first marked valid.
    fn called_at(&self) -> Option<DateTime<Utc>> {
        self.state().called_at()
    }
}
