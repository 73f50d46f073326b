// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fire-and-forget HTTP notification transport.

use async_trait::async_trait;
use merx_core::Transport;
use tracing::warn;

/// `Transport` implementation posting JSON payloads to host endpoints.
///
/// No retry and no cancellation: a failed notification is logged and
/// dropped. Acceptable because every notification this system sends is an
/// idempotent, low-stakes UI convenience.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn notify(&self, endpoint: &str, payload: serde_json::Value) {
        match self.client.post(endpoint).json(&payload).send().await {
            Ok(response) if !response.status().is_success() => {
                warn!(
                    endpoint,
                    status = %response.status(),
                    "notification rejected by host"
                );
            }
            Ok(_) => {}
            Err(e) => {
                warn!(endpoint, error = %e, "notification failed");
            }
        }
    }
}
