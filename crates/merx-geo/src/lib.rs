// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Country-aware feature handlers for the Merx extension framework.
//!
//! Two handlers: [`CountryChangeHandler`] stores the storefront's selected
//! billing country in session state, and [`TaxDisplayHandler`] resolves
//! incl/excl tax price display from that stored country.

pub mod country;
pub mod tax;

pub use country::{
    CountryChangeHandler, BILLING_COUNTRY_CHANGED_EVENT, BILLING_COUNTRY_SESSION_KEY,
};
pub use tax::{TaxDisplayHandler, PRICE_DISPLAY_EVENT, TAX_DISPLAY_KEY};
