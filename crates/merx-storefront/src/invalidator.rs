// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cart-summary fragment invalidation on checkout country change.
//!
//! The cart summary is cached client-side under a named fragment key.
//! When the checkout country selector changes, the cached fragment no
//! longer reflects the visitor's tax/currency situation and must be
//! dropped so the next render refetches it. The companion country widget
//! auto-submits its form on selection while suppressing the default
//! visible "change" control.

use tracing::debug;

/// Client-side fragment storage (session-storage abstraction).
///
/// Storage may be unavailable (disabled or not supported); callers pass
/// `None` in that case and invalidation degrades to a no-op.
pub trait FragmentCache: Send + Sync {
    /// Removes a named fragment, if present.
    fn remove(&self, key: &str);
}

/// What the enclosing form surface should do after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Submit the enclosing form immediately.
    pub submit_form: bool,
    /// Hide the default visible "change" control.
    pub suppress_default_control: bool,
    /// Stop the change event from propagating further.
    pub stop_propagation: bool,
}

/// Invalidates the cached cart-summary fragment on country change.
pub struct CartFragmentInvalidator {
    fragment_key: String,
}

impl CartFragmentInvalidator {
    pub fn new(fragment_key: impl Into<String>) -> Self {
        Self {
            fragment_key: fragment_key.into(),
        }
    }

    /// Returns the fragment key this invalidator clears.
    pub fn fragment_key(&self) -> &str {
        &self.fragment_key
    }

    /// Handles a checkout country-selector change.
    ///
    /// Clears the cart-summary fragment when storage is available, and
    /// returns the auto-submit outcome for the companion widget.
    pub fn on_country_changed(&self, cache: Option<&dyn FragmentCache>) -> SelectionOutcome {
        match cache {
            Some(cache) => {
                cache.remove(&self.fragment_key);
                debug!(key = %self.fragment_key, "cart fragment invalidated");
            }
            None => {
                debug!("fragment storage unavailable, skipping invalidation");
            }
        }

        SelectionOutcome {
            submit_form: true,
            suppress_default_control: true,
            stop_propagation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingCache {
        removed: Mutex<Vec<String>>,
    }

    impl FragmentCache for RecordingCache {
        fn remove(&self, key: &str) {
            self.removed.lock().unwrap().push(key.to_string());
        }
    }

    #[test]
    fn clears_named_fragment_on_change() {
        let cache = RecordingCache::default();
        let invalidator = CartFragmentInvalidator::new("cart_summary");

        let outcome = invalidator.on_country_changed(Some(&cache));

        assert_eq!(*cache.removed.lock().unwrap(), vec!["cart_summary"]);
        assert!(outcome.submit_form);
        assert!(outcome.suppress_default_control);
        assert!(outcome.stop_propagation);
    }

    #[test]
    fn missing_storage_degrades_to_no_op() {
        let invalidator = CartFragmentInvalidator::new("cart_summary");

        // Outcome is unchanged even when nothing could be invalidated.
        let outcome = invalidator.on_country_changed(None);

        assert!(outcome.submit_form);
    }
}
