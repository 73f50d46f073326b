// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host environment view built from the `[host]` config section.
//!
//! The CLI has no live host platform to query, so capability checks run
//! against the environment the operator declared in `merx.toml`.

use merx_config::model::HostSection;
use merx_core::HostInfo;

/// `HostInfo` backed by declared configuration values.
pub struct ConfigHost {
    host_version: semver::Version,
    runtime_version: semver::Version,
    active_plugins: Vec<String>,
}

impl ConfigHost {
    /// Builds a host view from the config section.
    ///
    /// Returns `None` when no host version is declared -- there is nothing
    /// to check against. An undeclared runtime version is treated as
    /// satisfying any requirement.
    pub fn from_section(section: &HostSection) -> Option<Self> {
        let host_version = semver::Version::parse(section.version.as_deref()?).ok()?;
        let runtime_version = section
            .runtime_version
            .as_deref()
            .and_then(|v| semver::Version::parse(v).ok())
            .unwrap_or_else(|| semver::Version::new(u64::MAX, 0, 0));

        Some(Self {
            host_version,
            runtime_version,
            active_plugins: section.active_plugins.clone(),
        })
    }
}

impl HostInfo for ConfigHost {
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
