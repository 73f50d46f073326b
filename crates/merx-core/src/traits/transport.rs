// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fire-and-forget notification transport to host-provided endpoints.

use async_trait::async_trait;

/// A one-way notification channel to the host.
///
/// Used for low-stakes UI conveniences (e.g. recording a dismissed admin
/// tooltip so it does not replay). Implementations absorb failures: no
/// retry, no cancellation, no error surfaced to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts a small key/value payload to the endpoint and forgets it.
    async fn notify(&self, endpoint: &str, payload: serde_json::Value);
}
