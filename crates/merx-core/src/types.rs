// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across handler traits and the Merx framework.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Default hook priority, matching the host platform's convention.
///
/// Lower values run earlier; subscribers sharing a priority run in
/// registration order.
pub const DEFAULT_HOOK_PRIORITY: i32 = 10;

/// A value/currency pair owned by the host.
///
/// Merx only computes derived views of these (e.g. a base-currency
/// rendition for an analytics payload); it never mutates host money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryAmount {
    pub amount: f64,
    pub currency: String,
}

impl MonetaryAmount {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl std::fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// Read-only snapshot of an order as returned by the host order source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Host-assigned order identifier.
    pub id: String,
    /// Order grand total in the order's own currency.
    pub total: MonetaryAmount,
    /// Shipping portion of the total, same currency as `total`.
    pub shipping_total: MonetaryAmount,
}

/// How prices are presented with respect to tax.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaxDisplay {
    /// Prices shown including tax.
    Incl,
    /// Prices shown excluding tax.
    Excl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn monetary_amount_display() {
        let amount = MonetaryAmount::new(19.5, "EUR");
        assert_eq!(amount.to_string(), "19.50 EUR");
    }

    #[test]
    fn tax_display_round_trips_through_strings() {
        for variant in [TaxDisplay::Incl, TaxDisplay::Excl] {
            let s = variant.to_string();
            let parsed = TaxDisplay::from_str(&s).expect("should parse back");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn tax_display_serde_uses_lowercase() {
        let json = serde_json::to_string(&TaxDisplay::Incl).unwrap();
        assert_eq!(json, "\"incl\"");
        let parsed: TaxDisplay = serde_json::from_str("\"excl\"").unwrap();
        assert_eq!(parsed, TaxDisplay::Excl);
    }

    #[test]
    fn order_serializes_with_nested_amounts() {
        let order = Order {
            id: "123".into(),
            total: MonetaryAmount::new(100.0, "EUR"),
            shipping_total: MonetaryAmount::new(10.0, "EUR"),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["total"]["amount"], 100.0);
        assert_eq!(json["shipping_total"]["currency"], "EUR");
    }
}
