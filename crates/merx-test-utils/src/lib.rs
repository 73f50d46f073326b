// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the Merx workspace.
//!
//! Provides a mock host platform, a recording/dispatching hook registry,
//! a mock notification transport, and a [`TestHarness`] that assembles the
//! built-in plugins against them for integration tests.

pub mod harness;
pub mod mock_host;
pub mod mock_transport;
pub mod recording_registry;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_host::{MockHost, MockHostBuilder};
pub use mock_transport::MockTransport;
pub use recording_registry::RecordingRegistry;
