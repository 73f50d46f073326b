// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for host collaborators and feature handlers.
//!
//! The host platform owns orders, sessions, currencies, and event dispatch.
//! Merx reaches all of it through the traits in this module, injected at
//! construction time -- no component performs ambient lookups.

pub mod handler;
pub mod hooks;
pub mod host;
pub mod transport;

pub use handler::FeatureHandler;
pub use hooks::{HookRegistry, RegistrationEntry};
pub use host::{CurrencyConverter, HostInfo, OrderSource, SessionStore};
pub use transport::Transport;
