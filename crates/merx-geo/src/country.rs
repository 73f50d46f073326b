// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Billing-country session tracking.
//!
//! The storefront country selector reports changes through the host's
//! `billing_country_changed` event. This handler stores the new value in
//! session-scoped state so that downstream tax/price-display logic can
//! read it without re-deriving the country per request.

use async_trait::async_trait;
use merx_core::{FeatureHandler, HostContext, MerxError, PluginLogger};
use serde_json::Value;

/// Host event fired when the storefront billing country changes.
pub const BILLING_COUNTRY_CHANGED_EVENT: &str = "billing_country_changed";

/// Session key the selected billing country is stored under.
///
/// Compatibility key owned by the currency-switcher sibling plugin; both
/// plugins read the same value.
pub const BILLING_COUNTRY_SESSION_KEY: &str = "aelia_billing_country";

/// Payload key carrying the new country code.
const COUNTRY_KEY: &str = "country";

/// Stores the changed billing country into session state.
pub struct CountryChangeHandler {
    ctx: HostContext,
    logger: PluginLogger,
}

impl CountryChangeHandler {
    pub fn new(ctx: HostContext, logger: PluginLogger) -> Self {
        Self { ctx, logger }
    }
}

#[async_trait]
impl FeatureHandler for CountryChangeHandler {
    fn name(&self) -> &str {
        "country-change"
    }

    fn event(&self) -> &str {
        BILLING_COUNTRY_CHANGED_EVENT
    }

    async fn handle(&self, payload: Value) -> Result<Value, MerxError> {
        let Some(country) = payload.get(COUNTRY_KEY).and_then(Value::as_str) else {
            self.logger
                .log("country change event carries no country, ignoring", true);
            return Ok(payload);
        };

        if country.is_empty() {
            return Ok(payload);
        }

        self.ctx
            .session
            .set(BILLING_COUNTRY_SESSION_KEY, country)
            .await;

        self.logger
            .log(&format!("billing country set to {country}"), true);

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fake_context;
    use serde_json::json;

    #[tokio::test]
    async fn stores_country_in_session() {
        let (ctx, host) = fake_context();
        let handler = CountryChangeHandler::new(ctx, PluginLogger::new("test", false));

        handler.handle(json!({"country": "DE"})).await.unwrap();

        assert_eq!(
            host.session_get(BILLING_COUNTRY_SESSION_KEY).await,
            Some("DE".to_string())
        );
    }

    #[tokio::test]
    async fn payload_is_passed_through_unchanged() {
        let (ctx, _host) = fake_context();
        let handler = CountryChangeHandler::new(ctx, PluginLogger::new("test", false));
        let payload = json!({"country": "DE", "field": "billing_country"});

        let out = handler.handle(payload.clone()).await.unwrap();

        assert_eq!(out, payload);
    }

    #[tokio::test]
    async fn missing_country_is_a_no_op() {
        let (ctx, host) = fake_context();
        let handler = CountryChangeHandler::new(ctx, PluginLogger::new("test", false));
        let payload = json!({"field": "billing_country"});

        let out = handler.handle(payload.clone()).await.unwrap();

        assert_eq!(out, payload);
        assert_eq!(host.session_get(BILLING_COUNTRY_SESSION_KEY).await, None);
    }

    #[tokio::test]
    async fn empty_country_is_not_stored() {
        let (ctx, host) = fake_context();
        let handler = CountryChangeHandler::new(ctx, PluginLogger::new("test", false));

        handler.handle(json!({"country": ""})).await.unwrap();

        assert_eq!(host.session_get(BILLING_COUNTRY_SESSION_KEY).await, None);
    }
}
