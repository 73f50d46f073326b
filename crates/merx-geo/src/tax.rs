// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tax display resolution by visitor country.
//!
//! Subscribes to the host's `price_display` event and stamps the payload
//! with whether prices should render including or excluding tax, based on
//! the billing country previously stored in the session.

use std::collections::HashMap;

use async_trait::async_trait;
use merx_core::{FeatureHandler, HostContext, MerxError, PluginLogger, TaxDisplay};
use serde_json::Value;

use crate::country::BILLING_COUNTRY_SESSION_KEY;

/// Host event fired before a price fragment is rendered.
pub const PRICE_DISPLAY_EVENT: &str = "price_display";

/// Payload key the resolved display mode is written to.
pub const TAX_DISPLAY_KEY: &str = "tax_display";

/// Resolves incl/excl tax display from the visitor's billing country.
pub struct TaxDisplayHandler {
    ctx: HostContext,
    logger: PluginLogger,
    display_by_country: HashMap<String, TaxDisplay>,
    default_display: TaxDisplay,
}

impl TaxDisplayHandler {
    pub fn new(
        ctx: HostContext,
        logger: PluginLogger,
        display_by_country: HashMap<String, TaxDisplay>,
        default_display: TaxDisplay,
    ) -> Self {
        Self {
            ctx,
            logger,
            display_by_country,
            default_display,
        }
    }

    /// Resolves the display mode for a country code, falling back to the
    /// configured default when the country has no override (or none is known).
    fn resolve(&self, country: Option<&str>) -> TaxDisplay {
        country
            .and_then(|c| self.display_by_country.get(c))
            .copied()
            .unwrap_or(self.default_display)
    }
}

#[async_trait]
impl FeatureHandler for TaxDisplayHandler {
    fn name(&self) -> &str {
        "tax-display"
    }

    fn event(&self) -> &str {
        PRICE_DISPLAY_EVENT
    }

    async fn handle(&self, payload: Value) -> Result<Value, MerxError> {
        let country = self.ctx.session.get(BILLING_COUNTRY_SESSION_KEY).await;
        let display = self.resolve(country.as_deref());

        let mut payload = payload;
        let Some(map) = payload.as_object_mut() else {
            return Ok(payload);
        };

        map.insert(TAX_DISPLAY_KEY.to_string(), display.to_string().into());

        self.logger.log(
            &format!(
                "price display resolved to {display} for country {}",
                country.as_deref().unwrap_or("<unset>")
            ),
            true,
        );

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fake_context;
    use serde_json::json;

    fn eu_map() -> HashMap<String, TaxDisplay> {
        HashMap::from([
            ("DE".to_string(), TaxDisplay::Incl),
            ("FR".to_string(), TaxDisplay::Incl),
        ])
    }

    #[tokio::test]
    async fn uses_country_override_from_session() {
        let (ctx, host) = fake_context();
        host.session_set(BILLING_COUNTRY_SESSION_KEY, "DE").await;
        let handler = TaxDisplayHandler::new(
            ctx,
            PluginLogger::new("test", false),
            eu_map(),
            TaxDisplay::Excl,
        );

        let out = handler.handle(json!({"price": 100})).await.unwrap();

        assert_eq!(out["tax_display"], "incl");
        assert_eq!(out["price"], 100);
    }

    #[tokio::test]
    async fn falls_back_to_default_for_unmapped_country() {
        let (ctx, host) = fake_context();
        host.session_set(BILLING_COUNTRY_SESSION_KEY, "US").await;
        let handler = TaxDisplayHandler::new(
            ctx,
            PluginLogger::new("test", false),
            eu_map(),
            TaxDisplay::Excl,
        );

        let out = handler.handle(json!({})).await.unwrap();

        assert_eq!(out["tax_display"], "excl");
    }

    #[tokio::test]
    async fn falls_back_to_default_when_session_has_no_country() {
        let (ctx, _host) = fake_context();
        let handler = TaxDisplayHandler::new(
            ctx,
            PluginLogger::new("test", false),
            eu_map(),
            TaxDisplay::Incl,
        );

        let out = handler.handle(json!({})).await.unwrap();

        assert_eq!(out["tax_display"], "incl");
    }

    #[tokio::test]
    async fn non_object_payload_passes_through() {
        let (ctx, _host) = fake_context();
        let handler = TaxDisplayHandler::new(
            ctx,
            PluginLogger::new("test", false),
            eu_map(),
            TaxDisplay::Excl,
        );

        let out = handler.handle(json!(42)).await.unwrap();

        assert_eq!(out, json!(42));
    }
}
