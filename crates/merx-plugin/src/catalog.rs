// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalog.
//!
//! Returns hardcoded `PluginDescriptor` entries for the 4 default plugins
//! shipped with Merx. No network calls are made.

use crate::descriptor::PluginDescriptor;

/// Slug of the currency-switcher sibling plugin most Merx plugins bridge to.
pub const CURRENCY_SWITCHER_SLUG: &str = "aelia-currency-switcher";

/// Returns descriptors for all built-in plugins.
///
/// The catalog contains 4 default plugins:
/// - purchase-analytics (analytics payload currency bridge)
/// - tax-display-by-country (incl/excl price display per visitor country)
/// - subscriptions-bridge (currency bridge for recurring renewals)
/// - bitcoin-gateway-bridge (currency support for the Bitcoin gateway)
pub fn builtin_catalog() -> Vec<PluginDescriptor> {
    vec![
        PluginDescriptor {
            slug: "purchase-analytics".to_string(),
            name: "Purchase Analytics Bridge".to_string(),
            text_domain: "purchase-analytics".to_string(),
            version: "0.1.0".to_string(),
            description: "Recomputes analytics order and shipping totals in the shop base currency"
                .to_string(),
            author: Some("Merx Contributors".to_string()),
            min_host_version: Some("8.0.0".to_string()),
            min_runtime_version: None,
            requires: vec![CURRENCY_SWITCHER_SLUG.to_string()],
        },
        PluginDescriptor {
            slug: "tax-display-by-country".to_string(),
            name: "Tax Display by Country".to_string(),
            text_domain: "tax-display-by-country".to_string(),
            version: "0.1.0".to_string(),
            description: "Shows prices including or excluding tax based on the visitor's country"
                .to_string(),
            author: Some("Merx Contributors".to_string()),
            min_host_version: Some("8.0.0".to_string()),
            min_runtime_version: None,
            requires: vec![CURRENCY_SWITCHER_SLUG.to_string()],
        },
        PluginDescriptor {
            slug: "subscriptions-bridge".to_string(),
            name: "Subscriptions Currency Bridge".to_string(),
            text_domain: "subscriptions-bridge".to_string(),
            version: "0.1.0".to_string(),
            description: "Keeps recurring renewal amounts consistent with the selected currency"
                .to_string(),
            author: Some("Merx Contributors".to_string()),
            min_host_version: Some("8.1.0".to_string()),
            min_runtime_version: None,
            requires: vec![
                CURRENCY_SWITCHER_SLUG.to_string(),
                "recurring-orders".to_string(),
            ],
        },
        PluginDescriptor {
            slug: "bitcoin-gateway-bridge".to_string(),
            name: "Bitcoin Gateway Bridge".to_string(),
            text_domain: "bitcoin-gateway-bridge".to_string(),
            version: "0.1.0".to_string(),
            description: "Adds multi-currency support to the Bitcoin payment gateway".to_string(),
            author: Some("Merx Contributors".to_string()),
            min_host_version: Some("8.0.0".to_string()),
            min_runtime_version: Some("1.80.0".to_string()),
            requires: vec!["bitcoin-gateway".to_string()],
        },
    ]
}

/// Search the built-in catalog by query string.
///
/// Filters entries whose slug, name, or description contains the query
/// (case-insensitive). If query is empty, returns all entries.
pub fn search_catalog(query: &str) -> Vec<PluginDescriptor> {
    if query.is_empty() {
        return builtin_catalog();
    }
    let query_lower = query.to_lowercase();
    builtin_catalog()
        .into_iter()
        .filter(|d| {
            d.slug.to_lowercase().contains(&query_lower)
                || d.name.to_lowercase().contains(&query_lower)
                || d.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_returns_four_entries() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn builtin_catalog_slugs_are_unique() {
        let catalog = builtin_catalog();
        let slugs: std::collections::HashSet<&str> =
            catalog.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs.len(), catalog.len());
    }

    #[test]
    fn catalog_entries_declare_valid_semver_minimums() {
        for descriptor in builtin_catalog() {
            for minimum in [&descriptor.min_host_version, &descriptor.min_runtime_version] {
                if let Some(v) = minimum {
                    assert!(
                        semver::Version::parse(v).is_ok(),
                        "{}: `{v}` is not valid semver",
                        descriptor.slug
                    );
                }
            }
        }
    }

    #[test]
    fn search_catalog_finds_tax_display() {
        let results = search_catalog("tax");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "tax-display-by-country");
    }

    #[test]
    fn search_catalog_case_insensitive() {
        let results = search_catalog("BITCOIN");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "bitcoin-gateway-bridge");
    }

    #[test]
    fn search_catalog_by_description() {
        let results = search_catalog("renewal");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "subscriptions-bridge");
    }

    #[test]
    fn search_catalog_empty_returns_all() {
        assert_eq!(search_catalog("").len(), 4);
    }

    #[test]
    fn search_catalog_no_match() {
        assert!(search_catalog("xyz_nonexistent").is_empty());
    }
}
