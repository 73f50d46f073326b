// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Merx extension framework.

use thiserror::Error;

/// The primary error type used across Merx traits and core operations.
///
/// Nothing here is fatal to the host process: a gate failure disables a
/// single plugin, and handler-level failures are absorbed by the dispatch
/// path (the handler's input is passed through unchanged).
#[derive(Debug, Error)]
pub enum MerxError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// One or more declared plugin prerequisites are not satisfied.
    #[error("unmet requirements for plugin {plugin}: {}", .reasons.join("; "))]
    UnmetRequirement {
        plugin: String,
        reasons: Vec<String>,
    },

    /// An expected field was absent or had the wrong shape in a payload.
    #[error("missing input field: {0}")]
    MissingInputField(String),

    /// A read-only query delegated to the host failed (order lookup, session read).
    #[error("host lookup failed: {message}")]
    HostLookup {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmet_requirement_joins_reasons() {
        let err = MerxError::UnmetRequirement {
            plugin: "tax-display".into(),
            reasons: vec!["host too old".into(), "sibling missing".into()],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("tax-display"));
        assert!(rendered.contains("host too old; sibling missing"));
    }

    #[test]
    fn host_lookup_renders_message() {
        let err = MerxError::HostLookup {
            message: "order 123 not found".into(),
            source: None,
        };
        assert!(err.to_string().contains("order 123 not found"));
    }

    #[test]
    fn missing_input_field_names_the_field() {
        let err = MerxError::MissingInputField("order_id".into());
        assert_eq!(err.to_string(), "missing input field: order_id");
    }
}
