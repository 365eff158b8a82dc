//! Cart pricing calculations.

use crate::cart::LineKey;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
///
/// There are no discounts, shipping or tax at checkout time; the shop
/// confirms those over chat, so the grand total equals the subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Amount shown as the order total.
    pub grand_total: Money,
    /// Per-line breakdown.
    pub line_items: Vec<LineItemPricing>,
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub key: LineKey,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity.
    pub subtotal: Money,
}
