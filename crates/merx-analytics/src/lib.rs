// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Purchase-analytics feature handler.
//!
//! Subscribes to the host's `purchase_completed` event. The event payload
//! is an outgoing analytics property mapping; when it carries an order
//! identifier, the handler looks the order up, recomputes the order and
//! shipping totals in the shop base currency, and overwrites exactly those
//! two payload keys. The order itself is never touched.
//!
//! Every failure path degrades to returning the payload unchanged: the
//! analytics event simply goes out without the currency enhancement.

use async_trait::async_trait;
use merx_core::{FeatureHandler, HostContext, MerxError, PluginLogger};
use serde_json::Value;

/// Host event carrying the outgoing purchase analytics payload.
pub const PURCHASE_COMPLETED_EVENT: &str = "purchase_completed";

/// Payload key the order identifier is read from.
const ORDER_ID_KEY: &str = "order_id";

/// Rewrites analytics order totals into the base currency.
pub struct PurchaseAnalyticsHandler {
    ctx: HostContext,
    logger: PluginLogger,
    base_currency: String,
    order_total_key: String,
    shipping_total_key: String,
}

impl PurchaseAnalyticsHandler {
    pub fn new(
        ctx: HostContext,
        logger: PluginLogger,
        base_currency: impl Into<String>,
        order_total_key: impl Into<String>,
        shipping_total_key: impl Into<String>,
    ) -> Self {
        Self {
            ctx,
            logger,
            base_currency: base_currency.into(),
            order_total_key: order_total_key.into(),
            shipping_total_key: shipping_total_key.into(),
        }
    }

    /// Extracts the order identifier from the payload.
    ///
    /// The host serializes order ids as strings in some event pipelines and
    /// as integers in others; both are accepted.
    fn order_id(payload: &Value) -> Option<String> {
        match payload.get(ORDER_ID_KEY)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[async_trait]
impl FeatureHandler for PurchaseAnalyticsHandler {
    fn name(&self) -> &str {
        "purchase-analytics"
    }

    fn event(&self) -> &str {
        PURCHASE_COMPLETED_EVENT
    }

    async fn handle(&self, payload: Value) -> Result<Value, MerxError> {
        let Some(order_id) = Self::order_id(&payload) else {
            self.logger
                .log("analytics payload carries no order id, passing through", true);
            return Ok(payload);
        };

        let order = match self.ctx.orders.get_order(&order_id).await {
            Ok(order) => order,
            Err(e) => {
                self.logger
                    .log(&format!("order lookup failed for {order_id}: {e}"), true);
                return Ok(payload);
            }
        };

        let total = self
            .ctx
            .currency
            .convert(order.total, &self.base_currency)
            .await;
        let shipping = self
            .ctx
            .currency
            .convert(order.shipping_total, &self.base_currency)
            .await;

        let (total, shipping) = match (total, shipping) {
            (Ok(t), Ok(s)) => (t, s),
            (Err(e), _) | (_, Err(e)) => {
                self.logger
                    .log(&format!("currency conversion failed for {order_id}: {e}"), true);
                return Ok(payload);
            }
        };

        let mut payload = payload;
        let Some(map) = payload.as_object_mut() else {
            return Ok(payload);
        };

        map.insert(self.order_total_key.clone(), total.amount.into());
        map.insert(self.shipping_total_key.clone(), shipping.amount.into());

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Arc;

    use merx_core::{
        CurrencyConverter, HostInfo, MonetaryAmount, Order, OrderSource, SessionStore,
    };
    use serde_json::json;

    struct FakeHost {
        orders: HashMap<String, Order>,
        rate: f64,
        fail_conversion: bool,
    }

    impl FakeHost {
        fn with_order(order: Order, rate: f64) -> Self {
            let mut orders = HashMap::new();
            orders.insert(order.id.clone(), order);
            Self {
                orders,
                rate,
                fail_conversion: false,
            }
        }

        fn empty() -> Self {
            Self {
                orders: HashMap::new(),
                rate: 1.0,
                fail_conversion: false,
            }
        }
    }

    impl HostInfo for FakeHost {
        fn host_version(&self) -> semver::Version {
            semver::Version::new(8, 2, 0)
        }

        fn runtime_version(&self) -> semver::Version {
            semver::Version::new(1, 85, 0)
        }

        fn is_plugin_active(&self, _slug: &str) -> bool {
            true
        }
    }

    #[async_trait]
    impl OrderSource for FakeHost {
        async fn get_order(&self, id: &str) -> Result<Order, MerxError> {
            self.orders.get(id).cloned().ok_or_else(|| MerxError::HostLookup {
                message: format!("order {id} not found"),
                source: None,
            })
        }
    }

    #[async_trait]
    impl SessionStore for FakeHost {
        async fn get(&self, _key: &str) -> Option<String> {
            None
        }

        async fn set(&self, _key: &str, _value: &str) {}
    }

    #[async_trait]
    impl CurrencyConverter for FakeHost {
        async fn convert(
            &self,
            amount: MonetaryAmount,
            to: &str,
        ) -> Result<MonetaryAmount, MerxError> {
            if self.fail_conversion {
                return Err(MerxError::HostLookup {
                    message: "no exchange rate".to_string(),
                    source: None,
                });
            }
            Ok(MonetaryAmount::new(amount.amount * self.rate, to))
        }
    }

    fn handler_for(host: FakeHost) -> PurchaseAnalyticsHandler {
        let host = Arc::new(host);
        let ctx = HostContext::new(host.clone(), host.clone(), host.clone(), host);
        PurchaseAnalyticsHandler::new(
            ctx,
            PluginLogger::new("purchase-analytics", false),
            "USD",
            "order_total",
            "shipping_total",
        )
    }

    fn eur_order(id: &str, total: f64, shipping: f64) -> Order {
        Order {
            id: id.to_string(),
            total: MonetaryAmount::new(total, "EUR"),
            shipping_total: MonetaryAmount::new(shipping, "EUR"),
        }
    }

    #[tokio::test]
    async fn rewrites_totals_in_base_currency() {
        let handler = handler_for(FakeHost::with_order(eur_order("123", 100.0, 10.0), 0.5));
        let payload = json!({
            "order_id": "123",
            "order_total": 100,
            "shipping_total": 10,
            "coupon": "SUMMER",
        });

        let out = handler.handle(payload).await.unwrap();

        assert_eq!(out["order_total"], 50.0);
        assert_eq!(out["shipping_total"], 5.0);
        // All other keys untouched.
        assert_eq!(out["order_id"], "123");
        assert_eq!(out["coupon"], "SUMMER");
    }

    #[tokio::test]
    async fn missing_order_id_returns_input_unchanged() {
        let handler = handler_for(FakeHost::with_order(eur_order("123", 100.0, 10.0), 0.5));
        let payload = json!({"order_total": 100, "shipping_total": 10});

        let out = handler.handle(payload.clone()).await.unwrap();

        assert_eq!(out, payload);
    }

    #[tokio::test]
    async fn unknown_order_returns_input_unchanged() {
        let handler = handler_for(FakeHost::empty());
        let payload = json!({"order_id": "999", "order_total": 100});

        let out = handler.handle(payload.clone()).await.unwrap();

        assert_eq!(out, payload);
    }

    #[tokio::test]
    async fn conversion_failure_returns_input_unchanged() {
        let mut host = FakeHost::with_order(eur_order("123", 100.0, 10.0), 0.5);
        host.fail_conversion = true;
        let handler = handler_for(host);
        let payload = json!({"order_id": "123", "order_total": 100});

        let out = handler.handle(payload.clone()).await.unwrap();

        assert_eq!(out, payload);
    }

    #[tokio::test]
    async fn numeric_order_id_is_accepted() {
        let handler = handler_for(FakeHost::with_order(eur_order("123", 100.0, 10.0), 0.5));
        let payload = json!({"order_id": 123, "order_total": 100, "shipping_total": 10});

        let out = handler.handle(payload).await.unwrap();

        assert_eq!(out["order_total"], 50.0);
    }

    #[tokio::test]
    async fn non_object_payload_passes_through() {
        let handler = handler_for(FakeHost::empty());
        let payload = json!("not an object");

        let out = handler.handle(payload.clone()).await.unwrap();

        assert_eq!(out, payload);
    }

    #[test]
    fn handler_subscribes_to_purchase_completed() {
        let handler = handler_for(FakeHost::empty());
        assert_eq!(handler.event(), "purchase_completed");
        assert_eq!(handler.priority(), 10);
    }
}
