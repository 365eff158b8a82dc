//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Identity of a line: the same product in two sizes is two lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl LineKey {
    pub fn new(product_id: impl Into<ProductId>, size: Option<String>) -> Self {
        Self {
            product_id: product_id.into(),
            size,
        }
    }

    /// Key for a product added without a size.
    pub fn without_size(product_id: impl Into<ProductId>) -> Self {
        Self::new(product_id, None)
    }

    /// Key for a product in a specific size.
    pub fn sized(product_id: impl Into<ProductId>, size: impl Into<String>) -> Self {
        Self::new(product_id, Some(size.into()))
    }
}

/// Where an add-to-cart came from, which decides whether a size is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddSource {
    /// "Add to Bag" on the product card. Adds as-is, without a size.
    QuickAdd,
    /// "Add to Bag" in the quick view, with the size picker's selection.
    QuickView { size: Option<String> },
}

impl AddSource {
    /// Validate the size selection against the product.
    ///
    /// The quick view rejects a sized product with nothing selected, and a
    /// size the product does not offer.
    pub fn resolve_size(&self, product: &Product) -> Result<Option<String>, CommerceError> {
        match self {
            AddSource::QuickAdd => Ok(None),
            AddSource::QuickView { size: None } if product.requires_size() => {
                Err(CommerceError::SizeRequired {
                    product_id: product.id,
                })
            }
            AddSource::QuickView { size: None } => Ok(None),
            AddSource::QuickView { size: Some(size) } => {
                if product.requires_size() && !product.offers_size(size) {
                    return Err(CommerceError::InvalidSize {
                        product_id: product.id,
                        size: size.clone(),
                    });
                }
                Ok(Some(size.clone()))
            }
        }
    }
}

/// The shopping bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in the order they were first added.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Merges into the line with the same product and size, otherwise
    /// appends a new line with quantity 1. Returns the line's quantity.
    pub fn add_item(&mut self, product: &Product, size: Option<String>) -> u32 {
        let key = LineKey::new(product.id, size);

        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == key) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(LineItem::new(product.clone(), key.size));
        1
    }

    /// Shift a line's quantity by `delta`, never below 1.
    ///
    /// Returns false if there is no such line.
    pub fn update_quantity(&mut self, key: &LineKey, delta: i64) -> bool {
        match self.items.iter_mut().find(|i| &i.key() == key) {
            Some(item) => {
                let next = (item.quantity as i64).saturating_add(delta);
                item.quantity = next.clamp(1, u32::MAX as i64) as u32;
                true
            }
            None => false,
        }
    }

    /// Remove a line regardless of its quantity.
    pub fn remove_item(&mut self, key: &LineKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.key() != key);
        self.items.len() < len_before
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Get number of lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by key.
    pub fn get_item(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key() == key)
    }

    /// Sum of price times quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let totals = self
            .items
            .iter()
            .map(LineItem::total_price)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(totals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Calculate cart pricing.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let line_items = self
            .items
            .iter()
            .map(|item| -> Result<LineItemPricing, CommerceError> {
                Ok(LineItemPricing {
                    key: item.key(),
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    subtotal: item.total_price()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = Money::try_sum(line_items.iter().map(|l| &l.subtotal), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            item_count: self.item_count(),
            subtotal,
            grand_total: subtotal,
            line_items,
        })
    }
}

/// A line in the cart: a product snapshot plus quantity and size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product as it was when added.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
    /// Size chosen in the quick view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl LineItem {
    /// Create a new line with quantity 1.
    pub fn new(product: Product, selected_size: Option<String>) -> Self {
        Self {
            product,
            quantity: 1,
            selected_size,
        }
    }

    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id, self.selected_size.clone())
    }

    /// Unit price times quantity.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity as i64)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    fn product(id: u32, price: i64) -> Product {
        Product::new(id, format!("Product {id}"), "Brand", Money::lkr(price), Category::Women, "x.jpg")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.currency, Currency::LKR);
    }

    #[test]
    fn test_add_same_item_merges() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        assert_eq!(cart.add_item(&p, Some("M".to_string())), 1);
        assert_eq!(cart.add_item(&p, Some("M".to_string())), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_distinct_sizes_are_distinct_lines() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add_item(&p, Some("M".to_string()));
        cart.add_item(&p, Some("L".to_string()));
        cart.add_item(&p, None);

        assert_eq!(cart.unique_item_count(), 3);
        assert_eq!(cart.get_item(&LineKey::sized(1, "L")).map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_update_quantity_floor() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add_item(&p, None);
        let key = LineKey::without_size(1);
        assert!(cart.update_quantity(&key, 2));
        assert_eq!(cart.get_item(&key).unwrap().quantity, 3);

        assert!(cart.update_quantity(&key, -100));
        assert_eq!(cart.get_item(&key).unwrap().quantity, 1);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_update_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 1000), None);
        let before = cart.clone();
        assert!(!cart.update_quantity(&LineKey::without_size(2), 1));
        assert!(!cart.update_quantity(&LineKey::sized(1, "M"), 1));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add_item(&p, None);
        cart.add_item(&p, None);

        assert!(cart.remove_item(&LineKey::without_size(1)));
        assert!(cart.is_empty());
        assert!(!cart.remove_item(&LineKey::without_size(1)));
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        let a = product(1, 1000);
        let b = product(2, 2000);
        cart.add_item(&a, None);
        cart.add_item(&a, None);
        cart.add_item(&b, None);

        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.subtotal, Money::lkr(4000)); // 2*1000 + 1*2000
        assert_eq!(pricing.grand_total, Money::lkr(4000));
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.line_items[0].subtotal, Money::lkr(2000));
        assert_eq!(cart.subtotal().unwrap(), Money::lkr(4000));
    }

    #[test]
    fn test_pricing_overflow() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, i64::MAX), None);
        cart.add_item(&product(1, i64::MAX), None);
        assert_eq!(cart.calculate_pricing(), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_quick_add_ignores_sizes() {
        let catalog = Catalog::seeded();
        let sized = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(AddSource::QuickAdd.resolve_size(sized), Ok(None));
    }

    #[test]
    fn test_quick_view_requires_size() {
        let catalog = Catalog::seeded();
        let sized = catalog.get(ProductId::new(11)).unwrap();
        let tote = catalog.get(ProductId::new(13)).unwrap();

        assert_eq!(
            AddSource::QuickView { size: None }.resolve_size(sized),
            Err(CommerceError::SizeRequired { product_id: ProductId::new(11) })
        );
        assert_eq!(
            AddSource::QuickView { size: Some("38".to_string()) }.resolve_size(sized),
            Ok(Some("38".to_string()))
        );
        assert!(matches!(
            AddSource::QuickView { size: Some("XL".to_string()) }.resolve_size(sized),
            Err(CommerceError::InvalidSize { .. })
        ));
        assert_eq!(AddSource::QuickView { size: None }.resolve_size(tote), Ok(None));
    }
}
