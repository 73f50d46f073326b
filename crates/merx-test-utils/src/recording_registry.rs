// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory hook registry with dispatch, standing in for the host's
//! extension-point registry in tests.
//!
//! Captures every subscription as a [`RegistrationEntry`] and can replay
//! an event through the subscribed handlers the way the host would:
//! priority order, one handler at a time, errors absorbed.

use std::sync::Arc;
use std::sync::Mutex;

use merx_core::traits::{FeatureHandler, HookRegistry, RegistrationEntry};
use tracing::warn;

/// Recording, dispatching fake of the host's hook registry.
#[derive(Default)]
pub struct RecordingRegistry {
    entries: Mutex<Vec<RegistrationEntry>>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all subscriptions for an event, for assertions.
    pub fn entries_for(&self, event: &str) -> Vec<RegistrationEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event == event)
            .cloned()
            .collect()
    }

    /// Total number of subscriptions across all events.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns true if nothing was subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Dispatches an event through its subscribers, host-style.
    ///
    /// Handlers run one at a time in ascending priority order (stable for
    /// equal priorities, i.e. registration order). Each handler receives
    /// the payload produced by the previous one. A handler error is logged
    /// and its input payload is carried forward unchanged, so a failing
    /// handler never breaks the chain.
    pub async fn emit(&self, event: &str, payload: serde_json::Value) -> serde_json::Value {
        let mut subscribers: Vec<(i32, Arc<dyn FeatureHandler>)> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event == event)
            .map(|e| (e.priority, Arc::clone(&e.handler)))
            .collect();
        subscribers.sort_by_key(|(priority, _)| *priority);

        let mut payload = payload;
        for (_, handler) in subscribers {
            match handler.handle(payload.clone()).await {
                Ok(next) => payload = next,
                Err(e) => {
                    warn!(
                        event,
                        handler = handler.name(),
                        error = %e,
                        "handler failed, payload passed through unchanged"
                    );
                }
            }
        }
        payload
    }
}

impl HookRegistry for RecordingRegistry {
    fn subscribe(&self, event: &str, handler: Arc<dyn FeatureHandler>, priority: i32) {
        self.entries.lock().unwrap().push(RegistrationEntry {
            event: event.to_string(),
            handler,
            priority,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use merx_core::MerxError;
    use serde_json::json;

    /// Appends its tag to the payload's "trace" array.
    struct TracingHandler {
        tag: &'static str,
        priority: i32,
        fail: bool,
    }

    #[async_trait]
    impl FeatureHandler for TracingHandler {
        fn name(&self) -> &str {
            self.tag
        }

        fn event(&self) -> &str {
            "test_event"
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        async fn handle(
            &self,
            mut payload: serde_json::Value,
        ) -> Result<serde_json::Value, MerxError> {
            if self.fail {
                return Err(MerxError::Internal("boom".to_string()));
            }
            payload["trace"]
                .as_array_mut()
                .expect("trace array")
                .push(json!(self.tag));
            Ok(payload)
        }
    }

    fn subscribe(registry: &RecordingRegistry, tag: &'static str, priority: i32, fail: bool) {
        let handler = Arc::new(TracingHandler { tag, priority, fail });
        registry.subscribe(handler.event(), handler.clone(), handler.priority());
    }

    #[tokio::test]
    async fn emit_runs_handlers_in_priority_order() {
        let registry = RecordingRegistry::new();
        subscribe(&registry, "late", 20, false);
        subscribe(&registry, "early", 5, false);
        subscribe(&registry, "default", 10, false);

        let out = registry.emit("test_event", json!({"trace": []})).await;

        assert_eq!(out["trace"], json!(["early", "default", "late"]));
    }

    #[tokio::test]
    async fn equal_priorities_run_in_registration_order() {
        let registry = RecordingRegistry::new();
        subscribe(&registry, "first", 10, false);
        subscribe(&registry, "second", 10, false);

        let out = registry.emit("test_event", json!({"trace": []})).await;

        assert_eq!(out["trace"], json!(["first", "second"]));
    }

    #[tokio::test]
    async fn failing_handler_is_absorbed() {
        let registry = RecordingRegistry::new();
        subscribe(&registry, "ok", 5, false);
        subscribe(&registry, "broken", 10, true);
        subscribe(&registry, "after", 15, false);

        let out = registry.emit("test_event", json!({"trace": []})).await;

        // The broken handler contributes nothing but breaks nothing.
        assert_eq!(out["trace"], json!(["ok", "after"]));
    }

    #[tokio::test]
    async fn emit_without_subscribers_returns_payload() {
        let registry = RecordingRegistry::new();
        let payload = json!({"untouched": true});

        let out = registry.emit("nobody_listens", payload.clone()).await;

        assert_eq!(out, payload);
    }

    #[test]
    fn entries_for_filters_by_event() {
        let registry = RecordingRegistry::new();
        subscribe(&registry, "a", 10, false);

        assert_eq!(registry.entries_for("test_event").len(), 1);
        assert!(registry.entries_for("other_event").is_empty());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }
}
