// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notification transport recording every call.

use std::sync::Mutex;

use async_trait::async_trait;
use merx_core::Transport;

/// A `Transport` that records notifications instead of sending them.
#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded (endpoint, payload) notifications.
    pub fn notifications(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn notify(&self, endpoint: &str, payload: serde_json::Value) {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn records_notifications_in_order() {
        let transport = MockTransport::new();
        transport.notify("https://a.example", json!({"n": 1})).await;
        transport.notify("https://b.example", json!({"n": 2})).await;

        let calls = transport.notifications();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "https://a.example");
        assert_eq!(calls[1].1["n"], 2);
    }
}
