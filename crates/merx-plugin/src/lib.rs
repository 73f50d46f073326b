// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin lifecycle for the Merx extension framework: descriptor parsing,
//! the capability gate, the registration bootstrap, the plugin registry,
//! and the built-in plugin catalog.

pub mod bootstrap;
pub mod catalog;
pub mod descriptor;
pub mod gate;
pub mod registry;

pub use bootstrap::Bootstrap;
pub use catalog::{builtin_catalog, search_catalog, CURRENCY_SWITCHER_SLUG};
pub use descriptor::{parse_plugin_descriptor, PluginDescriptor};
pub use gate::{check_requirements, CapabilityCheckResult};
pub use registry::{PluginEntry, PluginRegistry, PluginStatus};
