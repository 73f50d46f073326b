// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Merx extension framework.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::HashMap;

use merx_core::TaxDisplay;
use serde::{Deserialize, Serialize};

/// Top-level Merx configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MerxConfig {
    /// Declared host platform environment, for offline capability checks.
    #[serde(default)]
    pub host: HostSection,

    /// Logging settings, including the process-wide debug flag.
    #[serde(default)]
    pub log: LogConfig,

    /// Currency settings.
    #[serde(default)]
    pub currency: CurrencyConfig,

    /// Purchase-analytics bridge settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Tax display settings.
    #[serde(default)]
    pub tax: TaxConfig,

    /// Storefront-side adapter settings.
    #[serde(default)]
    pub storefront: StorefrontConfig,
}

/// Declared host platform environment.
///
/// The `merx status` and `merx doctor` commands evaluate the built-in
/// plugin catalog against this section when no live host is available.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HostSection {
    /// Host platform version, e.g. "8.2.0". `None` means unknown.
    #[serde(default)]
    pub version: Option<String>,

    /// Language runtime version the host executes on.
    #[serde(default)]
    pub runtime_version: Option<String>,

    /// Slugs of plugins active in the host environment.
    #[serde(default)]
    pub active_plugins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Process-wide debug flag. When false, debug-class messages written
    /// through the plugin logging facade are suppressed.
    #[serde(default)]
    pub debug: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            debug: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Currency configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyConfig {
    /// Base currency that analytics totals are recomputed into.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
        }
    }
}

fn default_base_currency() -> String {
    "USD".to_string()
}

/// Purchase-analytics bridge configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Enable the purchase-analytics bridge plugin.
    #[serde(default = "default_analytics_enabled")]
    pub enabled: bool,

    /// Payload key holding the order grand total.
    #[serde(default = "default_order_total_key")]
    pub order_total_key: String,

    /// Payload key holding the shipping total.
    #[serde(default = "default_shipping_total_key")]
    pub shipping_total_key: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_analytics_enabled(),
            order_total_key: default_order_total_key(),
            shipping_total_key: default_shipping_total_key(),
        }
    }
}

fn default_analytics_enabled() -> bool {
    true
}

fn default_order_total_key() -> String {
    "order_total".to_string()
}

fn default_shipping_total_key() -> String {
    "shipping_total".to_string()
}

/// Tax display configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaxConfig {
    /// Per-country price display override, keyed by ISO 3166-1 alpha-2 code.
    #[serde(default)]
    pub display_by_country: HashMap<String, TaxDisplay>,

    /// Display used when the visitor's country has no override.
    #[serde(default = "default_tax_display")]
    pub default_display: TaxDisplay,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            display_by_country: HashMap::new(),
            default_display: default_tax_display(),
        }
    }
}

fn default_tax_display() -> TaxDisplay {
    TaxDisplay::Excl
}

/// Storefront-side adapter configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Host endpoint notified when the admin tooltip sequence is dismissed.
    /// `None` disables the notification.
    #[serde(default)]
    pub dismiss_endpoint: Option<String>,

    /// Session-storage key of the cart-summary fragment invalidated on
    /// country change.
    #[serde(default = "default_cart_fragment_key")]
    pub cart_fragment_key: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            dismiss_endpoint: None,
            cart_fragment_key: default_cart_fragment_key(),
        }
    }
}

fn default_cart_fragment_key() -> String {
    "cart_summary".to_string()
}
