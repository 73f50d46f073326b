// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storefront-side adapters for the Merx extension framework.
//!
//! These components react to admin and checkout surface events and talk
//! back to the host through its existing transport. They are stateless
//! beyond their own cursors; DOM rendering and event plumbing belong to
//! the host's frontend.

pub mod invalidator;
pub mod tooltip;
pub mod transport;

pub use invalidator::{CartFragmentInvalidator, FragmentCache, SelectionOutcome};
pub use tooltip::{TooltipSequencer, TooltipStep};
pub use transport::HttpTransport;
