// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock host platform for deterministic testing.
//!
//! `MockHost` implements every host collaborator trait with builder-style
//! setup: declared versions, active plugins, an in-memory order store, an
//! in-memory session, and fixed-rate currency conversion.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use merx_core::{
    CurrencyConverter, HostContext, HostInfo, MerxError, MonetaryAmount, Order, OrderSource,
    SessionStore,
};
use tokio::sync::Mutex;

/// A mock host with configurable environment and in-memory state.
pub struct MockHost {
    host_version: semver::Version,
    runtime_version: semver::Version,
    active_plugins: Vec<String>,
    orders: HashMap<String, Order>,
    /// Conversion rates keyed by target currency; missing target fails
    /// the conversion, mirroring a host without that exchange rate.
    rates: HashMap<String, f64>,
    session: Mutex<HashMap<String, String>>,
}

impl MockHost {
    /// Creates a builder with a current host, current runtime, and the
    /// currency-switcher sibling active.
    pub fn builder() -> MockHostBuilder {
        MockHostBuilder::default()
    }

    /// Wraps this host in a [`HostContext`].
    pub fn context(self: &Arc<Self>) -> HostContext {
        HostContext::new(
            Arc::clone(self) as Arc<dyn HostInfo>,
            Arc::clone(self) as Arc<dyn OrderSource>,
            Arc::clone(self) as Arc<dyn SessionStore>,
            Arc::clone(self) as Arc<dyn CurrencyConverter>,
        )
    }

    /// Reads a session value directly, for assertions.
    pub async fn session_value(&self, key: &str) -> Option<String> {
        self.session.lock().await.get(key).cloned()
    }
}

/// Builder for [`MockHost`].
pub struct MockHostBuilder {
    host_version: semver::Version,
    runtime_version: semver::Version,
    active_plugins: Vec<String>,
    orders: HashMap<String, Order>,
    rates: HashMap<String, f64>,
}

impl Default for MockHostBuilder {
    fn default() -> Self {
        Self {
            host_version: semver::Version::new(8, 2, 0),
            runtime_version: semver::Version::new(1, 85, 0),
            active_plugins: vec![merx_plugin::CURRENCY_SWITCHER_SLUG.to_string()],
            orders: HashMap::new(),
            rates: HashMap::new(),
        }
    }
}

impl MockHostBuilder {
    /// Sets the host platform version.
    pub fn host_version(mut self, version: &str) -> Self {
        self.host_version = semver::Version::parse(version).expect("valid semver");
        self
    }

    /// Sets the runtime version.
    pub fn runtime_version(mut self, version: &str) -> Self {
        self.runtime_version = semver::Version::parse(version).expect("valid semver");
        self
    }

    /// Replaces the set of active plugins.
    pub fn active_plugins(mut self, slugs: &[&str]) -> Self {
        self.active_plugins = slugs.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Adds an order to the in-memory order store.
    pub fn order(mut self, order: Order) -> Self {
        self.orders.insert(order.id.clone(), order);
        self
    }

    /// Sets the conversion rate into a target currency.
    pub fn conversion_rate(mut self, to: &str, rate: f64) -> Self {
        self.rates.insert(to.to_string(), rate);
        self
    }

    pub fn build(self) -> Arc<MockHost> {
        Arc::new(MockHost {
            host_version: self.host_version,
            runtime_version: self.runtime_version,
            active_plugins: self.active_plugins,
            orders: self.orders,
            rates: self.rates,
            session: Mutex::new(HashMap::new()),
        })
    }
}

impl HostInfo for MockHost {
    fn host_version(&self) -> semver::Version {
        self.host_version.clone()
    }

    fn runtime_version(&self) -> semver::Version {
        self.runtime_version.clone()
    }

    fn is_plugin_active(&self, slug: &str) -> bool {
        self.active_plugins.iter().any(|s| s == slug)
    }
}

#[async_trait]
impl OrderSource for MockHost {
    async fn get_order(&self, id: &str) -> Result<Order, MerxError> {
        self.orders
            .get(id)
            .cloned()
            .ok_or_else(|| MerxError::HostLookup {
                message: format!("order {id} not found"),
                source: None,
            })
    }
}

#[async_trait]
impl SessionStore for MockHost {
    async fn get(&self, key: &str) -> Option<String> {
        self.session.lock().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.session
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl CurrencyConverter for MockHost {
    async fn convert(
        &self,
        amount: MonetaryAmount,
        to: &str,
    ) -> Result<MonetaryAmount, MerxError> {
        if amount.currency == to {
            return Ok(MonetaryAmount::new(amount.amount, to));
        }
        let rate = self.rates.get(to).ok_or_else(|| MerxError::HostLookup {
            message: format!("no exchange rate for {to}"),
            source: None,
        })?;
        Ok(MonetaryAmount::new(amount.amount * rate, to))
    }
}
