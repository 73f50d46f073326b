// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./merx.toml` > `~/.config/merx/merx.toml` > `/etc/merx/merx.toml`
//! with environment variable overrides via `MERX_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MerxConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/merx/merx.toml` (system-wide)
/// 3. `~/.config/merx/merx.toml` (user XDG config)
/// 4. `./merx.toml` (local directory)
/// 5. `MERX_*` environment variables
pub fn load_config() -> Result<MerxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MerxConfig::default()))
        .merge(Toml::file("/etc/merx/merx.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("merx/merx.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("merx.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Useful for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<MerxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MerxConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MerxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MerxConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `MERX_CURRENCY_BASE_CURRENCY`
/// must map to `currency.base_currency`, not `currency.base.currency`.
fn env_provider() -> Env {
    Env::prefixed("MERX_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: MERX_CURRENCY_BASE_CURRENCY -> "currency_base_currency"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("host_", "host.", 1)
            .replacen("log_", "log.", 1)
            .replacen("currency_", "currency.", 1)
            .replacen("analytics_", "analytics.", 1)
            .replacen("tax_", "tax.", 1)
            .replacen("storefront_", "storefront.", 1);
        mapped.into()
    })
}
