//! Shopping cart module.
//!
//! Contains types for the cart, its lines and pricing.

mod cart;
mod pricing;

pub use cart::{AddSource, Cart, LineItem, LineKey};
pub use pricing::{CartPricing, LineItemPricing};
