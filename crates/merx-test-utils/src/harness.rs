// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness assembling the full plugin stack against a mock host.
//!
//! `TestHarness` wires the built-in feature handlers through the real
//! capability gate and bootstrap into a [`RecordingRegistry`], so
//! integration tests can emit host events and observe the transformed
//! payloads.

use std::collections::HashMap;
use std::sync::Arc;

use merx_analytics::PurchaseAnalyticsHandler;
use merx_config::model::MerxConfig;
use merx_core::{FeatureHandler, HostContext, Order, PluginLogger, TaxDisplay};
use merx_geo::{CountryChangeHandler, TaxDisplayHandler};
use merx_plugin::{
    builtin_catalog, check_requirements, Bootstrap, CapabilityCheckResult, PluginRegistry,
};

use crate::mock_host::{MockHost, MockHostBuilder};
use crate::recording_registry::RecordingRegistry;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    host: MockHostBuilder,
    base_currency: String,
    debug_logging: bool,
    analytics_enabled: bool,
    order_total_key: String,
    shipping_total_key: String,
    tax_display_by_country: HashMap<String, TaxDisplay>,
    default_tax_display: TaxDisplay,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            host: MockHost::builder(),
            base_currency: "USD".to_string(),
            debug_logging: false,
            analytics_enabled: true,
            order_total_key: "order_total".to_string(),
            shipping_total_key: "shipping_total".to_string(),
            tax_display_by_country: HashMap::new(),
            default_tax_display: TaxDisplay::Excl,
        }
    }

    /// Apply the handler-relevant sections of a loaded configuration.
    pub fn with_config(mut self, config: &MerxConfig) -> Self {
        self.base_currency = config.currency.base_currency.clone();
        self.debug_logging = config.log.debug;
        self.analytics_enabled = config.analytics.enabled;
        self.order_total_key = config.analytics.order_total_key.clone();
        self.shipping_total_key = config.analytics.shipping_total_key.clone();
        self.tax_display_by_country = config.tax.display_by_country.clone();
        self.default_tax_display = config.tax.default_display;
        self
    }

    /// Set the mock host platform version.
    pub fn with_host_version(mut self, version: &str) -> Self {
        self.host = self.host.host_version(version);
        self
    }

    /// Set the mock runtime version.
    pub fn with_runtime_version(mut self, version: &str) -> Self {
        self.host = self.host.runtime_version(version);
        self
    }

    /// Replace the set of plugins active in the mock host.
    pub fn with_active_plugins(mut self, slugs: &[&str]) -> Self {
        self.host = self.host.active_plugins(slugs);
        self
    }

    /// Add an order to the mock order store.
    pub fn with_order(mut self, order: Order) -> Self {
        self.host = self.host.order(order);
        self
    }

    /// Set a conversion rate into a target currency.
    pub fn with_conversion_rate(mut self, to: &str, rate: f64) -> Self {
        self.host = self.host.conversion_rate(to, rate);
        self
    }

    /// Set the base currency analytics totals are recomputed into.
    pub fn with_base_currency(mut self, currency: &str) -> Self {
        self.base_currency = currency.to_string();
        self
    }

    /// Set a per-country tax display override.
    pub fn with_tax_display(mut self, country: &str, display: TaxDisplay) -> Self {
        self.tax_display_by_country
            .insert(country.to_string(), display);
        self
    }

    /// Enable debug-class messages through the plugin logging facade.
    pub fn with_debug_logging(mut self) -> Self {
        self.debug_logging = true;
        self
    }

    /// Build the test harness: mock host, handlers, gate checks, and one
    /// bootstrap pass.
    pub fn build(self) -> TestHarness {
        let host = self.host.build();
        let ctx = host.context();
        let registry = Arc::new(RecordingRegistry::new());

        let analytics: Arc<dyn FeatureHandler> = Arc::new(PurchaseAnalyticsHandler::new(
            ctx.clone(),
            PluginLogger::new("purchase-analytics", self.debug_logging),
            self.base_currency.clone(),
            self.order_total_key.clone(),
            self.shipping_total_key.clone(),
        ));
        let country: Arc<dyn FeatureHandler> = Arc::new(CountryChangeHandler::new(
            ctx.clone(),
            PluginLogger::new("tax-display-by-country", self.debug_logging),
        ));
        let tax: Arc<dyn FeatureHandler> = Arc::new(TaxDisplayHandler::new(
            ctx.clone(),
            PluginLogger::new("tax-display-by-country", self.debug_logging),
            self.tax_display_by_country,
            self.default_tax_display,
        ));

        let catalog = builtin_catalog();
        let mut plugins = PluginRegistry::new();
        let mut bootstraps = Vec::new();

        for descriptor in catalog {
            let disabled =
                descriptor.slug == "purchase-analytics" && !self.analytics_enabled;
            let handlers: Vec<Arc<dyn FeatureHandler>> = match descriptor.slug.as_str() {
                "purchase-analytics" if !disabled => vec![Arc::clone(&analytics)],
                "tax-display-by-country" => {
                    vec![Arc::clone(&country), Arc::clone(&tax)]
                }
                // Disabled plugins and catalog entries whose handlers live
                // outside this workspace register nothing here.
                _ => vec![],
            };

            let gate = check_requirements(&descriptor, host.as_ref());
            plugins.register(descriptor.clone());
            if disabled {
                plugins
                    .set_enabled(&descriptor.slug, false)
                    .expect("plugin just registered");
            } else if gate.passed {
                plugins
                    .mark_checked(&descriptor.slug, gate.clone())
                    .expect("plugin just registered");
            } else {
                plugins
                    .mark_unmet(&descriptor.slug, gate.clone())
                    .expect("plugin just registered");
            }

            bootstraps.push((Bootstrap::new(descriptor, handlers), gate));
        }

        let harness = TestHarness {
            host,
            ctx,
            registry,
            plugins,
            bootstraps,
        };
        harness.register_builtin();
        harness
    }
}

/// A fully wired test environment.
pub struct TestHarness {
    /// The mock host; also reachable through `ctx`.
    pub host: Arc<MockHost>,
    /// Context handed to every handler.
    pub ctx: HostContext,
    /// Stand-in for the host's dispatch registry.
    pub registry: Arc<RecordingRegistry>,
    /// Plugin registry with gate outcomes recorded.
    pub plugins: PluginRegistry,
    bootstraps: Vec<(Bootstrap, CapabilityCheckResult)>,
}

impl TestHarness {
    /// Creates a builder with default options.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Runs the bootstrap pass for every built-in plugin.
    ///
    /// Returns the number of new registrations. `build` already ran this
    /// once, so a direct call exercises the load-once guard.
    pub fn register_builtin(&self) -> usize {
        self.bootstraps
            .iter()
            .map(|(bootstrap, gate)| bootstrap.register(gate, self.registry.as_ref()))
            .sum()
    }

    /// Emits a host event through the recorded subscriptions.
    pub async fn emit(&self, event: &str, payload: serde_json::Value) -> serde_json::Value {
        self.registry.emit(event, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merx_geo::BILLING_COUNTRY_CHANGED_EVENT;

    #[test]
    fn default_harness_registers_builtin_handlers() {
        let harness = TestHarness::builder().build();

        // analytics + country-change + tax-display
        assert_eq!(harness.registry.len(), 3);
        assert_eq!(
            harness
                .registry
                .entries_for(BILLING_COUNTRY_CHANGED_EVENT)
                .len(),
            1
        );
    }

    #[test]
    fn missing_sibling_blocks_dependent_plugins() {
        let harness = TestHarness::builder().with_active_plugins(&[]).build();

        // Both built-in handler sets require the currency switcher.
        assert!(harness.registry.is_empty());
    }
}
