// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only query traits over the hosting platform.
//!
//! All queries are delegated synchronous calls from Merx's perspective:
//! they may fail, but timeout and cancellation handling belong to the host.

use async_trait::async_trait;

use crate::error::MerxError;
use crate::types::{MonetaryAmount, Order};

/// Version and plugin-activation queries against the host environment.
pub trait HostInfo: Send + Sync {
    /// Returns the running host platform version.
    fn host_version(&self) -> semver::Version;

    /// Returns the version of the language runtime the host executes on.
    fn runtime_version(&self) -> semver::Version;

    /// Returns true if the plugin with the given slug is active in the host.
    fn is_plugin_active(&self, slug: &str) -> bool;
}

/// Order lookup against the host's order store.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetches an order snapshot by its host-assigned identifier.
    async fn get_order(&self, id: &str) -> Result<Order, MerxError>;
}

/// Access to the host's session-scoped key/value state.
///
/// The host owns the session lifecycle; Merx only reads and writes
/// individual keys within the current session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads a session value, or `None` if the key is unset.
    async fn get(&self, key: &str) -> Option<String>;

    /// Writes a session value under the given key.
    async fn set(&self, key: &str, value: &str);
}

/// Currency conversion provided by the host's currency subsystem.
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    /// Converts an amount into the target currency.
    ///
    /// Conversion accuracy is the host's responsibility; Merx treats the
    /// result as opaque.
    async fn convert(
        &self,
        amount: MonetaryAmount,
        to: &str,
    ) -> Result<MonetaryAmount, MerxError>;
}
