// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `merx doctor` command implementation.
//!
//! Runs diagnostic checks against the Merx configuration to identify
//! problems before they surface in the host: malformed declarations,
//! plugins whose requirements the declared host cannot satisfy, and
//! storefront endpoint issues.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use merx_config::model::MerxConfig;
use merx_config::validation::validate_config;
use merx_plugin::{builtin_catalog, check_requirements};

use crate::host::ConfigHost;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `merx doctor` command.
///
/// With `--plain`, disables colored output.
pub fn run_doctor(config: &MerxConfig, plain: bool) {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_config(config),
        check_host_declaration(config),
        check_catalog_gates(config),
        check_dismiss_endpoint(config),
    ];

    println!();
    println!("  merx doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line = match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    let symbol = "✓".green().to_string();
                    format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                } else {
                    format!(
                        "    [OK]   {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "!".yellow().to_string();
                    format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.yellow()
                    )
                } else {
                    format!(
                        "    [WARN] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "✗".red().to_string();
                    format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.red()
                    )
                } else {
                    format!(
                        "    [FAIL] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
        };

        println!("{line}");
    }

    println!();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }

    println!();
}

/// Re-run semantic validation over the loaded configuration.
fn check_config(config: &MerxConfig) -> CheckResult {
    let start = Instant::now();
    match validate_config(config) {
        Ok(()) => CheckResult {
            name: "config".to_string(),
            status: CheckStatus::Pass,
            message: "valid".to_string(),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "config".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} validation error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Check whether a host environment is declared for offline gate checks.
fn check_host_declaration(config: &MerxConfig) -> CheckResult {
    let start = Instant::now();
    match config.host.version.as_deref() {
        Some(version) => CheckResult {
            name: "host".to_string(),
            status: CheckStatus::Pass,
            message: format!("declared platform {version}"),
            duration: start.elapsed(),
        },
        None => CheckResult {
            name: "host".to_string(),
            status: CheckStatus::Warn,
            message: "no [host] version declared, requirement checks skipped".to_string(),
            duration: start.elapsed(),
        },
    }
}

/// Evaluate the capability gate for every catalog plugin.
fn check_catalog_gates(config: &MerxConfig) -> CheckResult {
    let start = Instant::now();
    let Some(host) = ConfigHost::from_section(&config.host) else {
        return CheckResult {
            name: "plugins".to_string(),
            status: CheckStatus::Warn,
            message: "unchecked (no declared host)".to_string(),
            duration: start.elapsed(),
        };
    };

    let catalog = builtin_catalog();
    let total = catalog.len();
    let unmet: Vec<String> = catalog
        .into_iter()
        .filter(|d| !check_requirements(d, &host).passed)
        .map(|d| d.slug)
        .collect();

    if unmet.is_empty() {
        CheckResult {
            name: "plugins".to_string(),
            status: CheckStatus::Pass,
            message: format!("{total} plugin(s) satisfied"),
            duration: start.elapsed(),
        }
    } else {
        CheckResult {
            name: "plugins".to_string(),
            status: CheckStatus::Warn,
            message: format!("requirements unmet for: {}", unmet.join(", ")),
            duration: start.elapsed(),
        }
    }
}

/// Check the storefront dismiss endpoint declaration.
fn check_dismiss_endpoint(config: &MerxConfig) -> CheckResult {
    let start = Instant::now();
    match config.storefront.dismiss_endpoint.as_deref() {
        None => CheckResult {
            name: "storefront".to_string(),
            status: CheckStatus::Pass,
            message: "dismiss notifications disabled".to_string(),
            duration: start.elapsed(),
        },
        Some(endpoint) if endpoint.starts_with("https://") => CheckResult {
            name: "storefront".to_string(),
            status: CheckStatus::Pass,
            message: format!("dismiss endpoint {endpoint}"),
            duration: start.elapsed(),
        },
        Some(endpoint) => CheckResult {
            name: "storefront".to_string(),
            status: CheckStatus::Warn,
            message: format!("dismiss endpoint {endpoint} is not using TLS"),
            duration: start.elapsed(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_host(version: Option<&str>, active: &[&str]) -> MerxConfig {
        let mut config = MerxConfig::default();
        config.host.version = version.map(String::from);
        config.host.active_plugins = active.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn default_config_checks_warn_on_missing_host() {
        let config = MerxConfig::default();
        assert_eq!(check_config(&config).status, CheckStatus::Pass);
        assert_eq!(check_host_declaration(&config).status, CheckStatus::Warn);
        assert_eq!(check_catalog_gates(&config).status, CheckStatus::Warn);
        assert_eq!(check_dismiss_endpoint(&config).status, CheckStatus::Pass);
    }

    #[test]
    fn satisfied_environment_passes_gate_check() {
        let config = config_with_host(
            Some("8.2.0"),
            &[
                "aelia-currency-switcher",
                "recurring-orders",
                "bitcoin-gateway",
            ],
        );
        let result = check_catalog_gates(&config);
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn missing_siblings_warn_and_name_the_plugins() {
        let config = config_with_host(Some("8.2.0"), &["aelia-currency-switcher"]);
        let result = check_catalog_gates(&config);
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.message.contains("subscriptions-bridge"));
        assert!(result.message.contains("bitcoin-gateway-bridge"));
    }

    #[test]
    fn plain_http_dismiss_endpoint_warns() {
        let mut config = MerxConfig::default();
        config.storefront.dismiss_endpoint =
            Some("http://shop.example/api/tooltip".to_string());
        let result = check_dismiss_endpoint(&config);
        assert_eq!(result.status, CheckStatus::Warn);
    }

    #[test]
    fn invalid_config_fails_config_check() {
        let mut config = MerxConfig::default();
        config.currency.base_currency = "usd".to_string();
        assert_eq!(check_config(&config).status, CheckStatus::Fail);
    }
}
