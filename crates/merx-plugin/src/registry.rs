// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for tracking known plugins and their gate outcomes.
//!
//! The `PluginRegistry` stores `PluginEntry` records keyed by plugin slug.
//! Each entry carries the descriptor, a status, and the most recent
//! capability check result. This registry tracks plugin state only; hook
//! subscriptions live in the host's dispatch registry.

use std::collections::HashMap;

use merx_core::MerxError;

use crate::descriptor::PluginDescriptor;
use crate::gate::CapabilityCheckResult;

/// Status of a plugin in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin is active and its handlers will be registered.
    Enabled,
    /// Plugin is explicitly disabled by the operator.
    Disabled,
    /// Plugin failed its capability check and was not loaded.
    RequirementsUnmet,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
            PluginStatus::RequirementsUnmet => write!(f, "requirements-unmet"),
        }
    }
}

/// A single entry in the plugin registry.
#[derive(Debug, Clone)]
pub struct PluginEntry {
    /// Plugin descriptor with metadata and declared prerequisites.
    pub descriptor: PluginDescriptor,
    /// Current status of the plugin.
    pub status: PluginStatus,
    /// Most recent capability check result, if one was run.
    pub gate: Option<CapabilityCheckResult>,
}

/// Registry of known plugins, keyed by slug.
pub struct PluginRegistry {
    entries: HashMap<String, PluginEntry>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a plugin with default status `Enabled`.
    pub fn register(&mut self, descriptor: PluginDescriptor) {
        self.register_with_status(descriptor, PluginStatus::Enabled);
    }

    /// Register a plugin with an explicit status.
    pub fn register_with_status(&mut self, descriptor: PluginDescriptor, status: PluginStatus) {
        let slug = descriptor.slug.clone();
        self.entries.insert(
            slug,
            PluginEntry {
                descriptor,
                status,
                gate: None,
            },
        );
    }

    /// Get a plugin entry by slug.
    pub fn get(&self, slug: &str) -> Option<&PluginEntry> {
        self.entries.get(slug)
    }

    /// List all plugin entries, sorted by slug.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.descriptor.slug.cmp(&b.descriptor.slug));
        entries
    }

    /// Record a failed capability check against a plugin.
    ///
    /// Sets the status to `RequirementsUnmet` and stores the result so the
    /// unmet messages can be surfaced to the operator.
    pub fn mark_unmet(
        &mut self,
        slug: &str,
        result: CapabilityCheckResult,
    ) -> Result<(), MerxError> {
        let entry = self
            .entries
            .get_mut(slug)
            .ok_or_else(|| MerxError::Internal(format!("unknown plugin: {slug}")))?;
        entry.status = PluginStatus::RequirementsUnmet;
        entry.gate = Some(result);
        Ok(())
    }

    /// Record a passed capability check against a plugin.
    pub fn mark_checked(
        &mut self,
        slug: &str,
        result: CapabilityCheckResult,
    ) -> Result<(), MerxError> {
        let entry = self
            .entries
            .get_mut(slug)
            .ok_or_else(|| MerxError::Internal(format!("unknown plugin: {slug}")))?;
        entry.gate = Some(result);
        Ok(())
    }

    /// Toggle a plugin's enabled status.
    ///
    /// If `enabled` is true, sets status to `Enabled`.
    /// If `enabled` is false, sets status to `Disabled`.
    pub fn set_enabled(&mut self, slug: &str, enabled: bool) -> Result<(), MerxError> {
        let entry = self
            .entries
            .get_mut(slug)
            .ok_or_else(|| MerxError::Internal(format!("unknown plugin: {slug}")))?;
        entry.status = if enabled {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        Ok(())
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_descriptor(slug: &str) -> PluginDescriptor {
        PluginDescriptor {
            slug: slug.to_string(),
            name: format!("Test plugin {slug}"),
            text_domain: slug.to_string(),
            version: "0.1.0".to_string(),
            description: format!("Test plugin {slug}"),
            author: None,
            min_host_version: None,
            min_runtime_version: None,
            requires: vec![],
        }
    }

    #[test]
    fn register_and_get_roundtrip() {
        let mut registry = PluginRegistry::new();
        registry.register(test_descriptor("purchase-analytics"));

        let entry = registry.get("purchase-analytics").unwrap();
        assert_eq!(entry.descriptor.slug, "purchase-analytics");
        assert_eq!(entry.status, PluginStatus::Enabled);
        assert!(entry.gate.is_none());
    }

    #[test]
    fn mark_unmet_records_status_and_messages() {
        let mut registry = PluginRegistry::new();
        registry.register(test_descriptor("bitcoin-gateway-bridge"));

        let result = CapabilityCheckResult {
            passed: false,
            unmet: vec!["requires plugin `bitcoin-gateway` to be active".to_string()],
        };
        registry.mark_unmet("bitcoin-gateway-bridge", result).unwrap();

        let entry = registry.get("bitcoin-gateway-bridge").unwrap();
        assert_eq!(entry.status, PluginStatus::RequirementsUnmet);
        assert_eq!(entry.gate.as_ref().unwrap().unmet.len(), 1);
    }

    #[test]
    fn set_enabled_toggles_status() {
        let mut registry = PluginRegistry::new();
        registry.register(test_descriptor("tax-display-by-country"));

        registry.set_enabled("tax-display-by-country", false).unwrap();
        assert_eq!(
            registry.get("tax-display-by-country").unwrap().status,
            PluginStatus::Disabled
        );

        registry.set_enabled("tax-display-by-country", true).unwrap();
        assert_eq!(
            registry.get("tax-display-by-country").unwrap().status,
            PluginStatus::Enabled
        );
    }

    #[test]
    fn set_enabled_returns_error_for_unknown_plugin() {
        let mut registry = PluginRegistry::new();
        assert!(registry.set_enabled("nonexistent", true).is_err());
    }

    #[test]
    fn list_all_returns_sorted() {
        let mut registry = PluginRegistry::new();
        registry.register(test_descriptor("zeta"));
        registry.register(test_descriptor("alpha"));
        registry.register(test_descriptor("middle"));

        let all = registry.list_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].descriptor.slug, "alpha");
        assert_eq!(all[1].descriptor.slug, "middle");
        assert_eq!(all[2].descriptor.slug, "zeta");
    }

    #[test]
    fn len_and_is_empty() {
        let mut registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(test_descriptor("test"));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }
}
