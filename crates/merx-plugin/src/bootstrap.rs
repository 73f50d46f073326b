// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration bootstrap: wires a plugin's feature handlers into the
//! host's extension-point registry once the capability gate has passed.
//!
//! The host invokes bootstrap exactly once during its own startup sequence,
//! but startup hooks are known to re-fire on some host configurations, so
//! a load-once flag makes the second and later calls no-ops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use merx_core::traits::{FeatureHandler, HookRegistry};
use tracing::{debug, info};

use crate::descriptor::PluginDescriptor;
use crate::gate::CapabilityCheckResult;

/// Bootstrap for a single plugin: a descriptor plus the handlers it
/// contributes, registered as a unit.
pub struct Bootstrap {
    descriptor: PluginDescriptor,
    handlers: Vec<Arc<dyn FeatureHandler>>,
    loaded: AtomicBool,
}

impl Bootstrap {
    /// Creates a bootstrap for the given descriptor and handler set.
    pub fn new(descriptor: PluginDescriptor, handlers: Vec<Arc<dyn FeatureHandler>>) -> Self {
        Self {
            descriptor,
            handlers,
            loaded: AtomicBool::new(false),
        }
    }

    /// Returns the plugin descriptor this bootstrap was built for.
    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    /// Subscribes every handler to its event if the gate passed.
    ///
    /// Returns the number of registrations performed. When the gate result
    /// is failed, or this bootstrap already ran, nothing is registered and
    /// 0 is returned -- silent by design at this layer; surfacing the gate
    /// messages is the caller's concern.
    pub fn register(
        &self,
        gate_result: &CapabilityCheckResult,
        registry: &dyn HookRegistry,
    ) -> usize {
        if !gate_result.passed {
            debug!(
                plugin = %self.descriptor.slug,
                "skipping registration, capability gate failed"
            );
            return 0;
        }

        // swap returns the previous value; true means a prior call won.
        if self.loaded.swap(true, Ordering::SeqCst) {
            debug!(
                plugin = %self.descriptor.slug,
                "bootstrap already ran, ignoring repeat invocation"
            );
            return 0;
        }

        for handler in &self.handlers {
            registry.subscribe(handler.event(), Arc::clone(handler), handler.priority());
        }

        info!(
            plugin = %self.descriptor.slug,
            handlers = self.handlers.len(),
            "plugin registered"
        );

        self.handlers.len()
    }
}

impl std::fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap")
            .field("plugin", &self.descriptor.slug)
            .field("handlers", &self.handlers.len())
            .field("loaded", &self.loaded.load(Ordering::SeqCst))
            .finish()
    }
}
