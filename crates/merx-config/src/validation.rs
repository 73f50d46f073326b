// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as semver-parsable host versions and well-formed
//! currency codes.

use crate::diagnostic::ConfigError;
use crate::model::MerxConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MerxConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate base_currency is a 3-letter uppercase ISO 4217 code
    let code = config.currency.base_currency.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "currency.base_currency `{code}` must be a 3-letter uppercase code (e.g. USD)"
            ),
        });
    }

    // Validate declared host versions parse as semver when set
    if let Some(ref version) = config.host.version
        && semver::Version::parse(version).is_err()
    {
        errors.push(ConfigError::Validation {
            message: format!("host.version `{version}` is not a valid semantic version"),
        });
    }

    if let Some(ref version) = config.host.runtime_version
        && semver::Version::parse(version).is_err()
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "host.runtime_version `{version}` is not a valid semantic version"
            ),
        });
    }

    // Validate analytics payload keys are non-empty
    if config.analytics.order_total_key.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "analytics.order_total_key must not be empty".to_string(),
        });
    }

    if config.analytics.shipping_total_key.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "analytics.shipping_total_key must not be empty".to_string(),
        });
    }

    // Validate country codes in the tax display map
    for country in config.tax.display_by_country.keys() {
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "tax.display_by_country key `{country}` must be a 2-letter uppercase country code"
                ),
            });
        }
    }

    // Validate dismiss endpoint has an http(s) scheme when set
    if let Some(ref endpoint) = config.storefront.dismiss_endpoint
        && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "storefront.dismiss_endpoint `{endpoint}` must be an http(s) URL"
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = MerxConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn lowercase_base_currency_fails_validation() {
        let mut config = MerxConfig::default();
        config.currency.base_currency = "usd".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("base_currency"))));
    }

    #[test]
    fn malformed_host_version_fails_validation() {
        let mut config = MerxConfig::default();
        config.host.version = Some("eight-point-two".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("host.version"))));
    }

    #[test]
    fn bad_country_code_fails_validation() {
        let toml_str = r#"
[tax.display_by_country]
Germany = "incl"
"#;
        let config: MerxConfig = toml::from_str(toml_str).unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("Germany"))));
    }

    #[test]
    fn non_http_dismiss_endpoint_fails_validation() {
        let mut config = MerxConfig::default();
        config.storefront.dismiss_endpoint = Some("ftp://example.com/x".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("dismiss_endpoint"))));
    }

    #[test]
    fn valid_custom_config_passes() {
        let config: MerxConfig = toml::from_str(
            r#"
[host]
version = "8.2.0"

[currency]
base_currency = "EUR"

[tax.display_by_country]
DE = "incl"

[storefront]
dismiss_endpoint = "https://shop.example/api/tooltip-dismissed"
"#,
        )
        .unwrap();
        assert!(validate_config(&config).is_ok());
    }
}
