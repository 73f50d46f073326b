// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability gate: prerequisite checks run before a plugin may
//! register any handler.
//!
//! The gate accumulates every unmet requirement instead of failing fast,
//! so the operator sees all problems at once. A gate failure disables the
//! one plugin it was run for; it is never fatal to the host.

use merx_core::traits::HostInfo;
use tracing::debug;

use crate::descriptor::PluginDescriptor;

/// Outcome of a capability check.
///
/// Created per boot attempt, consumed once by the bootstrap, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityCheckResult {
    /// True when every declared requirement is satisfied.
    pub passed: bool,
    /// Human-readable message per unmet requirement. Empty when passed.
    pub unmet: Vec<String>,
}

impl CapabilityCheckResult {
    /// A result with every requirement satisfied.
    pub fn satisfied() -> Self {
        Self {
            passed: true,
            unmet: Vec::new(),
        }
    }

    fn from_unmet(unmet: Vec<String>) -> Self {
        Self {
            passed: unmet.is_empty(),
            unmet,
        }
    }
}

/// Check a plugin's declared prerequisites against the host environment.
///
/// Performs only read-only queries: semantic-version comparison of the
/// running host and runtime against the declared minimums, and presence
/// checks for each required sibling plugin.
pub fn check_requirements(
    descriptor: &PluginDescriptor,
    host: &dyn HostInfo,
) -> CapabilityCheckResult {
    let mut unmet = Vec::new();

    if let Some(ref declared) = descriptor.min_host_version {
        match semver::Version::parse(declared) {
            Ok(minimum) => {
                let actual = host.host_version();
                if actual < minimum {
                    unmet.push(format!(
                        "requires host platform version {minimum} or newer, found {actual}"
                    ));
                }
            }
            Err(_) => unmet.push(format!(
                "declared minimum host version `{declared}` is not a valid semantic version"
            )),
        }
    }

    if let Some(ref declared) = descriptor.min_runtime_version {
        match semver::Version::parse(declared) {
            Ok(minimum) => {
                let actual = host.runtime_version();
                if actual < minimum {
                    unmet.push(format!(
                        "requires runtime version {minimum} or newer, found {actual}"
                    ));
                }
            }
            Err(_) => unmet.push(format!(
                "declared minimum runtime version `{declared}` is not a valid semantic version"
            )),
        }
    }

    for sibling in &descriptor.requires {
        if !host.is_plugin_active(sibling) {
            unmet.push(format!("requires plugin `{sibling}` to be active"));
        }
    }

    if !unmet.is_empty() {
        debug!(
            plugin = %descriptor.slug,
            unmet = unmet.len(),
            "capability check failed"
        );
    }

    CapabilityCheckResult::from_unmet(unmet)
}
