//! Chain registry and the traversal engine.

use super::dispatch::Dispatch;
use super::node::{Node, NodeInfo};
use std::any::Any;
use std::sync::Arc;

/// Callback that receives debug trace messages while debug is enabled.
type TraceSink = Box<dyn Fn(&str) + Send + Sync>;

/// Maintains a group (chain) of nodes and distributes dispatches to them.
///
/// In chain mode, nodes are kept in insertion order (duplicates allowed) and
/// each traversal visits them in that order. In event mode the registry holds
/// at most one node, and linking a new node replaces the existing one.
///
/// A traversal hands the dispatch to each node by exclusive reference and
/// observes consumption after every call; exactly one traversal may be in
/// flight against a given dispatch at a time. This is a caller obligation and
/// is not enforced internally.
pub struct ChainHelper {
    nodes: Vec<Arc<dyn Node>>,
    is_event: bool,
    do_debug: bool,
    logger: Option<TraceSink>,
}

impl ChainHelper {
    /// Create a chain-mode instance with debug tracing disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::full(false, false)
    }

    /// Create an instance with the event-mode and debug toggles fixed.
    ///
    /// An event chain holds at most one node at any given time.
    #[must_use]
    pub fn full(is_event: bool, do_debug: bool) -> Self {
        Self {
            nodes: Vec::new(),
            is_event,
            do_debug,
            logger: None,
        }
    }

    /// Toggle the emission of debug trace messages. Affects observability
    /// only, never the traversal logic.
    pub fn toggle_debug(&mut self, do_debug: bool) -> &mut Self {
        self.do_debug = do_debug;
        self
    }

    /// Whether this chain is set up as an event chain.
    #[must_use]
    pub fn is_event(&self) -> bool {
        self.is_event
    }

    /// Attach a callback that receives debug trace messages while debug is
    /// enabled. At most one sink is active at a time; registering a new one
    /// replaces the previous sink.
    pub fn hook_logger<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger = Some(Box::new(callback));
        self
    }

    /// Snapshot of the identities of currently linked nodes, in traversal
    /// order.
    #[must_use]
    pub fn node_list(&self) -> Vec<NodeInfo> {
        self.nodes.iter().map(|node| node.info()).collect()
    }

    /// Register a node with the chain.
    ///
    /// An invalid node (empty key or version) is dropped without error; the
    /// only signals are a debug trace and its absence from
    /// [`node_list`](Self::node_list). On an event chain a valid node replaces
    /// any existing node instead of appending.
    pub fn link_node(&mut self, node: Arc<dyn Node>) -> &mut Self {
        let info = node.info();

        if !info.is_valid() {
            if self.do_debug {
                self.log(&format!("Attempted to add invalid node: {}", info));
            }

            return self;
        }

        if self.is_event {
            if self.do_debug {
                self.log(&format!("Setting event node: {}", info));
            }

            self.nodes = vec![node];
        } else {
            if self.do_debug {
                self.log(&format!("Linking new node: {}", info));
            }

            self.nodes.push(node);
        }

        self
    }

    /// Distribute a dispatch to the linked nodes.
    ///
    /// Returns `false` without invoking any node when the chain has no nodes,
    /// the dispatch is invalid, or the dispatch is consumable and already
    /// consumed. Repeated traversal attempts against a consumed dispatch keep
    /// returning `false`; they never re-process.
    ///
    /// Otherwise every linked node receives the dispatch in insertion order
    /// (the single linked node, on an event chain) until a node consumes it,
    /// and the call returns `true`. The boolean signals that the dispatch was
    /// accepted and distribution ran, not that every node saw it or that any
    /// result was produced.
    ///
    /// When `sender` is `None`, the chain passes itself as the sender.
    pub fn traverse(&self, dispatch: &mut dyn Dispatch, sender: Option<&dyn Any>) -> bool {
        if self.nodes.is_empty() {
            if self.do_debug {
                self.log("Attempted to traverse chain with no nodes");
            }

            return false;
        }

        if !dispatch.is_valid() {
            if self.do_debug {
                self.log(&format!(
                    "Attempted to traverse chain with invalid dispatch: {}",
                    dispatch.state().summary()
                ));
            }

            return false;
        }

        if dispatch.is_consumable() && dispatch.is_consumed() {
            if self.do_debug {
                self.log(&format!(
                    "Attempted to traverse chain with consumed dispatch: {}",
                    dispatch.state().summary()
                ));
            }

            return false;
        }

        let sender = sender.unwrap_or(self as &dyn Any);

        // Consumability cannot change mid-traversal, only consumed state can.
        let is_consumable = dispatch.is_consumable();

        if self.is_event {
            if self.do_debug {
                self.log(&format!(
                    "Sending dispatch ({}) to event node: {}",
                    dispatch.state().summary(),
                    self.nodes[0].info()
                ));
            }

            self.nodes[0].process(sender, dispatch);
        } else {
            for node in &self.nodes {
                if self.do_debug {
                    self.log(&format!(
                        "Sending dispatch ({}) to node: {}",
                        dispatch.state().summary(),
                        node.info()
                    ));
                }

                node.process(sender, dispatch);

                if is_consumable && dispatch.is_consumed() {
                    if self.do_debug {
                        self.log(&format!(
                            "Dispatch ({}) consumed by node: {}",
                            dispatch.state().summary(),
                            node.info()
                        ));
                    }

                    break;
                }
            }
        }

        true
    }

    /// Conditionally send a trace message to the registered sink.
    fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger(message);
        }
    }
}

impl Default for ChainHelper {
    fn default() -> Self {
        Self::new()
    }
}
