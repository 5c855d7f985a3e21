//! Chain-of-responsibility dispatch engine.
//!
//! This module is the core of the crate:
//!
//! - **[`Node`]**: a keyed, versioned unit of work with a single `process`
//!   extension point
//! - **[`Dispatch`]**: the payload distributed through a chain, carrying a
//!   validity/consumption/result state machine ([`DispatchState`])
//! - **[`ChainHelper`]**: the registry and traversal engine tying them
//!   together
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  link_node   ┌─────────────┐  process   ┌────────┐
//! │ Node     │─────────────>│ ChainHelper │───────────>│ Node 1 │
//! │ (Arc)    │              │ (registry)  │     │      ├────────┤
//! └──────────┘              └─────────────┘     └─────>│ Node 2 │ ...
//!                                  ^                   └────────┘
//!                         traverse │ &mut
//!                           ┌─────────────┐
//!                           │ Dispatch    │
//!                           │ (payload)   │
//!                           └─────────────┘
//! ```
//!
//! Traversal is synchronous and single-threaded: `traverse` completes every
//! node's `process` call and every debug trace before returning. A node may
//! call [`Dispatch::consume`] on a consumable dispatch to stop distribution;
//! that is the only cancellation mechanism.

mod dispatch;
mod helper;
mod node;

pub use dispatch::{Dispatch, DispatchState};
pub use helper::ChainHelper;
pub use node::{Node, NodeInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::any::Any;
    use std::sync::Arc;

    struct TestDispatch {
        state: DispatchState,
    }

    impl TestDispatch {
        fn new() -> Self {
            Self {
                state: DispatchState::new(),
            }
        }

        fn initialize(&mut self) {
            self.state.make_valid();
        }
    }

    impl Dispatch for TestDispatch {
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

    struct ConsumableTestDispatch {
        state: DispatchState,
    }

    impl ConsumableTestDispatch {
        fn new() -> Self {
            Self {
                state: DispatchState::new(),
            }
        }

        fn initialize(&mut self) {
            self.state.make_consumable();
            self.state.make_valid();
        }
    }

    impl Dispatch for ConsumableTestDispatch {
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

    struct PassNode;

    impl Node for PassNode {
        fn info(&self) -> NodeInfo {
            NodeInfo::new("pass", "1.0.0")
        }

        fn process(&self, _sender: &dyn Any, _dispatch: &mut dyn Dispatch) {}
    }

    struct ConsumeNode;

    impl Node for ConsumeNode {
        fn info(&self) -> NodeInfo {
            NodeInfo::new("consume", "1.0.0")
        }

        fn process(&self, _sender: &dyn Any, dispatch: &mut dyn Dispatch) {
            dispatch.consume();
        }
    }

    fn hook_cache(chain: &mut ChainHelper) -> Arc<Mutex<Vec<String>>> {
        let cache = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&cache);
        chain.hook_logger(move |message| sink.lock().push(message.to_string()));
        cache
    }

    // One trace per link plus one per delivery, one extra on consumption,
    // nothing at all with debug disabled.
    #[test]
    fn trace_message_counts() {
        let mut plain = ChainHelper::full(false, true);
        let mut event = ChainHelper::full(true, true);
        let mut silent = ChainHelper::new();
        let mut consuming = ChainHelper::full(false, true);

        let plain_cache = hook_cache(&mut plain);
        let event_cache = hook_cache(&mut event);
        let silent_cache = hook_cache(&mut silent);
        let consuming_cache = hook_cache(&mut consuming);

        plain
            .link_node(Arc::new(PassNode))
            .link_node(Arc::new(ConsumeNode));
        event
            .link_node(Arc::new(PassNode))
            .link_node(Arc::new(ConsumeNode));
        silent
            .link_node(Arc::new(PassNode))
            .link_node(Arc::new(ConsumeNode));
        consuming
            .link_node(Arc::new(ConsumeNode))
            .link_node(Arc::new(PassNode));

        let mut dispatch = TestDispatch::new();
        dispatch.initialize();

        let mut consumable = ConsumableTestDispatch::new();
        consumable.initialize();

        assert!(plain.traverse(&mut dispatch, None));
        assert!(event.traverse(&mut dispatch, None));
        assert!(silent.traverse(&mut dispatch, None));
        assert!(consuming.traverse(&mut consumable, None));

        // 2 links + 2 sends; the dispatch is not consumable, so ConsumeNode
        // has no effect.
        assert_eq!(plain_cache.lock().len(), 4);
        // 2 "setting event node" + 1 event send.
        assert_eq!(event_cache.lock().len(), 3);
        // Debug disabled.
        assert_eq!(silent_cache.lock().len(), 0);
        // 2 links + 1 send + 1 consumed.
        assert_eq!(consuming_cache.lock().len(), 4);
    }

    #[test]
    fn last_hooked_sink_wins() {
        let mut chain = ChainHelper::full(false, true);

        let first = hook_cache(&mut chain);
        let second = hook_cache(&mut chain);

        chain.link_node(Arc::new(PassNode));

        assert_eq!(first.lock().len(), 0);
        assert_eq!(second.lock().len(), 1);
    }

    #[test]
    fn rejection_paths_emit_traces() {
        let mut chain = ChainHelper::full(false, true);
        let cache = hook_cache(&mut chain);

        let mut dispatch = TestDispatch::new();
        dispatch.initialize();

        assert!(!chain.traverse(&mut dispatch, None));
        assert!(cache.lock()[0].contains("no nodes"));

        chain.link_node(Arc::new(PassNode));

        let mut uninitialized = TestDispatch::new();
        assert!(!chain.traverse(&mut uninitialized, None));
        assert!(cache.lock().last().unwrap().contains("invalid dispatch"));

        let mut consumable = ConsumableTestDispatch::new();
        consumable.initialize();
        assert!(consumable.consume());

        assert!(!chain.traverse(&mut consumable, None));
        assert!(cache.lock().last().unwrap().contains("consumed dispatch"));
    }
}
