// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-plugin logging facade over `tracing`.
//!
//! Every feature handler acquires a [`PluginLogger`] bound to its plugin's
//! slug at construction. Debug-class messages are suppressed unless the
//! process-wide debug flag (from `[log] debug` in the configuration) is
//! enabled, mirroring the host platform's logging convention.

use tracing::{debug, info};

/// Logging facade bound to a single plugin.
#[derive(Debug, Clone)]
pub struct PluginLogger {
    slug: String,
    debug_enabled: bool,
}

impl PluginLogger {
    /// Creates a logger for the given plugin slug.
    pub fn new(slug: impl Into<String>, debug_enabled: bool) -> Self {
        Self {
            slug: slug.into(),
            debug_enabled,
        }
    }

    /// Returns the plugin slug this logger is bound to.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Writes a message through the facade.
    ///
    /// When `is_debug` is true the message is dropped unless the
    /// process-wide debug flag was set at construction.
    pub fn log(&self, message: &str, is_debug: bool) {
        if is_debug {
            if self.debug_enabled {
                debug!(plugin = %self.slug, "{message}");
            }
        } else {
            info!(plugin = %self.slug, "{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_keeps_slug() {
        let logger = PluginLogger::new("purchase-analytics", false);
        assert_eq!(logger.slug(), "purchase-analytics");
    }

    #[test]
    fn debug_suppression_does_not_panic() {
        // With the flag off, a debug-class message is a no-op.
        let logger = PluginLogger::new("test", false);
        logger.log("suppressed", true);
        logger.log("visible", false);

        let verbose = PluginLogger::new("test", true);
        verbose.log("emitted", true);
    }
}
