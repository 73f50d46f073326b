// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Merx extension framework.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Merx workspace. Feature handlers and
//! host collaborators implement traits defined here.

pub mod context;
pub mod error;
pub mod logger;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use context::HostContext;
pub use error::MerxError;
pub use logger::PluginLogger;
pub use types::{MonetaryAmount, Order, TaxDisplay, DEFAULT_HOOK_PRIORITY};

// Re-export all collaborator traits at crate root.
pub use traits::{
    CurrencyConverter, FeatureHandler, HookRegistry, HostInfo, OrderSource,
    RegistrationEntry, SessionStore, Transport,
};
