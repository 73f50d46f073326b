// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The feature-handler trait implemented by every plugin callback.

use async_trait::async_trait;

use crate::error::MerxError;
use crate::types::DEFAULT_HOOK_PRIORITY;

/// A callback bound to exactly one named host extension point.
///
/// Handlers receive the event payload as a JSON value and return the
/// (possibly transformed) payload. The dispatch path absorbs errors: when
/// `handle` fails, the caller logs the failure and forwards the original
/// payload unchanged, so a misbehaving handler never interrupts the host's
/// per-event handler chain.
#[async_trait]
pub trait FeatureHandler: Send + Sync + 'static {
    /// Returns the handler's unique name (used for logging and lookup).
    fn name(&self) -> &str;

    /// Returns the host event this handler subscribes to.
    fn event(&self) -> &str;

    /// Ordering hint relative to other subscribers on the same event.
    /// Lower values run earlier.
    fn priority(&self) -> i32 {
        DEFAULT_HOOK_PRIORITY
    }

    /// Transforms the event payload.
    ///
    /// Implementations degrade to returning the input unchanged on
    /// missing/malformed fields rather than erroring where the event
    /// contract allows it; a returned error is absorbed by the dispatcher.
    async fn handle(&self, payload: serde_json::Value) -> Result<serde_json::Value, MerxError>;
}
