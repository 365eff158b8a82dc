//! Wishlist of saved products.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Saved products, unique by id, in the order they were saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Wishlist {
    pub items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns whether the product is saved afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(product.id) {
            return false;
        }
        self.items.push(product.clone());
        true
    }

    /// Remove a product. Returns false if it was not saved.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|p| p.id != product_id);
        self.items.len() < len_before
    }

    /// Move a product into the cart: add one unit, then unsave it.
    ///
    /// The add happens first so a reader keyed on the cart sees the line
    /// before the wishlist shrinks. Returns the cart line's quantity.
    pub fn move_to_cart(&mut self, product: &Product, cart: &mut Cart) -> u32 {
        let quantity = cart.add_item(product, None);
        self.remove(product.id);
        quantity
    }

    /// Heart state on the product card.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineKey;
    use crate::catalog::Catalog;

    #[test]
    fn test_toggle_is_an_involution() {
        let catalog = Catalog::seeded();
        let dress = catalog.get(ProductId::new(1)).unwrap();
        let saree = catalog.get(ProductId::new(14)).unwrap();

        let mut wishlist = Wishlist::new();
        wishlist.toggle(saree);
        let before = wishlist.clone();

        assert!(wishlist.toggle(dress));
        assert!(wishlist.contains(dress.id));
        assert!(!wishlist.toggle(dress));
        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = Wishlist::new();
        assert!(!wishlist.remove(ProductId::new(3)));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_move_to_cart() {
        let catalog = Catalog::seeded();
        let tote = catalog.get(ProductId::new(13)).unwrap();
        let mut wishlist = Wishlist::new();
        let mut cart = Cart::new();

        wishlist.toggle(tote);
        assert_eq!(wishlist.move_to_cart(tote, &mut cart), 1);
        assert!(!wishlist.contains(tote.id));
        assert_eq!(cart.get_item(&LineKey::without_size(13)).map(|l| l.quantity), Some(1));
    }

    #[test]
    fn test_move_to_cart_merges_existing_line() {
        let catalog = Catalog::seeded();
        let tote = catalog.get(ProductId::new(13)).unwrap();
        let mut wishlist = Wishlist::new();
        let mut cart = Cart::new();

        cart.add_item(tote, None);
        wishlist.toggle(tote);
        assert_eq!(wishlist.move_to_cart(tote, &mut cart), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert!(wishlist.is_empty());
    }
}
