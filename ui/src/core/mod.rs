//! Platform-agnostic storefront logic: catalog, configuration, cart wire
//! format and the checkout state behind the hero's call to action.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod platform;
