// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor parsing from `plugin.toml` files.
//!
//! A descriptor declares a plugin's identity and its prerequisites: the
//! minimum host platform version, the minimum language runtime version,
//! and the sibling plugins that must be active before this plugin may
//! register its handlers.

use merx_core::MerxError;
use serde::{Deserialize, Serialize};

/// Parsed plugin descriptor.
///
/// Immutable after parse; lives for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Unique slug (e.g. "purchase-analytics").
    pub slug: String,
    /// Human-readable display name.
    pub name: String,
    /// Message/translation domain; defaults to the slug.
    pub text_domain: String,
    /// Semantic version string of the plugin itself.
    pub version: String,
    /// Human-readable description.
    pub description: String,
    /// Optional author identifier.
    pub author: Option<String>,
    /// Minimum host platform version required (e.g. "8.0.0").
    pub min_host_version: Option<String>,
    /// Minimum language runtime version required.
    pub min_runtime_version: Option<String>,
    /// Slugs of sibling plugins that must be active.
    pub requires: Vec<String>,
}

/// Intermediate TOML deserialization struct for `plugin.toml`.
#[derive(Debug, Deserialize)]
struct PluginDescriptorFile {
    plugin: PluginSection,
}

/// The `[plugin]` section of a `plugin.toml` file.
#[derive(Debug, Deserialize)]
struct PluginSection {
    slug: String,
    name: String,
    text_domain: Option<String>,
    version: String,
    description: String,
    author: Option<String>,
    min_host_version: Option<String>,
    min_runtime_version: Option<String>,
    #[serde(default)]
    requires: Vec<String>,
}

/// Parse a plugin descriptor from TOML content.
///
/// Validates that the slug and version are non-empty and that every
/// declared version field parses as a semantic version.
pub fn parse_plugin_descriptor(toml_content: &str) -> Result<PluginDescriptor, MerxError> {
    let file: PluginDescriptorFile = toml::from_str(toml_content)
        .map_err(|e| MerxError::Config(format!("invalid plugin descriptor: {e}")))?;

    let section = file.plugin;

    if section.slug.is_empty() {
        return Err(MerxError::Config(
            "plugin descriptor: slug must not be empty".to_string(),
        ));
    }

    if section.version.is_empty() {
        return Err(MerxError::Config(
            "plugin descriptor: version must not be empty".to_string(),
        ));
    }

    semver::Version::parse(&section.version).map_err(|_| {
        MerxError::Config(format!(
            "plugin descriptor: version `{}` is not a valid semantic version",
            section.version
        ))
    })?;

    for (field, value) in [
        ("min_host_version", &section.min_host_version),
        ("min_runtime_version", &section.min_runtime_version),
    ] {
        if let Some(v) = value
            && semver::Version::parse(v).is_err()
        {
            return Err(MerxError::Config(format!(
                "plugin descriptor: {field} `{v}` is not a valid semantic version"
            )));
        }
    }

    let text_domain = section
        .text_domain
        .unwrap_or_else(|| section.slug.clone());

    Ok(PluginDescriptor {
        slug: section.slug,
        name: section.name,
        text_domain,
        version: section.version,
        description: section.description,
        author: section.author,
        min_host_version: section.min_host_version,
        min_runtime_version: section.min_runtime_version,
        requires: section.requires,
    })
}
