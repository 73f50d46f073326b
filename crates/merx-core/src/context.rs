// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicitly injected bundle of host collaborators.
//!
//! Every component that needs ambient host state receives a [`HostContext`]
//! at construction. Tests supply one built from mocks; nothing in Merx
//! reaches for globals.

use std::sync::Arc;

use crate::traits::{CurrencyConverter, HostInfo, OrderSource, SessionStore};

/// Shared, read-mostly view of the hosting platform.
///
/// Cloning is cheap (all fields are `Arc`s). The host owns the lifecycle
/// of everything reachable through this struct.
#[derive(Clone)]
pub struct HostContext {
    /// Version and plugin-activation queries.
    pub info: Arc<dyn HostInfo>,
    /// Order lookup.
    pub orders: Arc<dyn OrderSource>,
    /// Session-scoped key/value state for the current shopping session.
    pub session: Arc<dyn SessionStore>,
    /// Currency conversion.
    pub currency: Arc<dyn CurrencyConverter>,
}

impl HostContext {
    pub fn new(
        info: Arc<dyn HostInfo>,
        orders: Arc<dyn OrderSource>,
        session: Arc<dyn SessionStore>,
        currency: Arc<dyn CurrencyConverter>,
    ) -> Self {
        Self {
            info,
            orders,
            session,
            currency,
        }
    }
}

impl std::fmt::Debug for HostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext")
            .field("host_version", &self.info.host_version().to_string())
            .finish_non_exhaustive()
    }
}
