//! Node trait and identity types.

use super::dispatch::Dispatch;
use std::any::Any;
use std::fmt;

/// Identity of a node: a key and a version string.
///
/// Identity is produced by the concrete node's [`Node::info`] implementation
/// and is never assigned by a chain or any other external caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeInfo {
    /// Key that identifies the node.
    pub key: String,
    /// Version string for the node implementation.
    pub version: String,
}

impl NodeInfo {
    /// Create node identity from a key and version.
    pub fn new(key: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version: version.into(),
        }
    }

    /// Whether the identity is considered valid: both key and version must be
    /// non-empty. Chains check this once, at link time.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.key.is_empty() && !self.version.is_empty()
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ key: \"{}\", version: \"{}\" }}",
            self.key, self.version
        )
    }
}

/// The contract for all units of work linked into a chain.
///
/// Nodes hold no per-traversal state of their own, which is what allows a
/// single node instance to be shared across multiple chains. Implementations
/// that accumulate data (appenders, recorders) use interior mutability.
///
/// `process` receives the dispatch as an exclusive reference and is expected
/// to downcast it to the concrete dispatch types it recognizes; unrelated
/// dispatch types must be ignored, not errored:
///
/// ```ignore
/// fn process(&self, _sender: &dyn Any, dispatch: &mut dyn Dispatch) {
///     let Some(dispatch) = dispatch.as_any_mut().downcast_mut::<MyDispatch>() else {
///         return;
///     };
///     dispatch.set_result(serde_json::json!({ "seen": true }));
/// }
/// ```
pub trait Node: Send + Sync {
    /// Get the identity of this node.
    fn info(&self) -> NodeInfo;

    /// Process a dispatch.
    ///
    /// # Parameters
    /// - `sender`: opaque sender data; when the caller supplied none, the
    ///   chain passes itself so nodes can identify which chain invoked them
    /// - `dispatch`: the dispatch being distributed, exclusively borrowed for
    ///   the duration of this call
    fn process(&self, sender: &dyn Any, dispatch: &mut dyn Dispatch);
}
