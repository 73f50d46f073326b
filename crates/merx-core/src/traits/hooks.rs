// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The host's extension-point registry, as seen from the plugin side.
//!
//! Merx only ever calls `subscribe`; dispatch itself belongs to the host.
//! A dispatching in-memory implementation for tests lives in
//! `merx-test-utils`.

use std::sync::Arc;

use crate::traits::handler::FeatureHandler;

/// A single subscription recorded by the host's dispatch registry.
///
/// Entries are created during bootstrap and owned by the host for the
/// process lifetime; Merx never mutates an entry after registration.
#[derive(Clone)]
pub struct RegistrationEntry {
    /// Named extension point the handler is bound to.
    pub event: String,
    /// The subscribed handler.
    pub handler: Arc<dyn FeatureHandler>,
    /// Ordering hint; lower runs earlier.
    pub priority: i32,
}

impl std::fmt::Debug for RegistrationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationEntry")
            .field("event", &self.event)
            .field("handler", &self.handler.name())
            .field("priority", &self.priority)
            .finish()
    }
}

/// The host's extension-point registry.
pub trait HookRegistry: Send + Sync {
    /// Subscribes a handler to a named event with an ordering priority.
    fn subscribe(&self, event: &str, handler: Arc<dyn FeatureHandler>, priority: i32);
}
