//! Product catalog module.
//!
//! The catalog is a constant table for the lifetime of a session: products,
//! customer reviews and the shop's identity.

mod product;
mod review;
mod seed;
mod shop;

pub use product::{Category, Product, ProductTag, GALLERY_FALLBACK_LEN};
pub use review::{Review, MAX_RATING};
pub use shop::{nav_link, Founder, ShopDetails, HOME, NAV_LINKS};

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Serialize;
use std::collections::HashSet;

/// Read-only set of purchasable products and reviews.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>, reviews: Vec<Review>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products, reviews })
    }

    /// The boutique's seeded catalog.
    pub fn seeded() -> Self {
        Self {
            products: seed::products(),
            reviews: seed::reviews(),
        }
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Reviews in display order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_seeded_catalog_shape() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.reviews().len(), 10);
        let sale = catalog
            .products()
            .iter()
            .filter(|p| p.tag == Some(ProductTag::Sale))
            .count();
        assert_eq!(sale, 4);
    }

    #[test]
    fn test_seeded_ids_are_unique() {
        let seeded = Catalog::seeded();
        let rebuilt = Catalog::new(seeded.products().to_vec(), seeded.reviews().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Product::new(1, "A", "X", Money::lkr(100), Category::Women, "a.jpg");
        let b = Product::new(1, "B", "X", Money::lkr(200), Category::Men, "b.jpg");
        let result = Catalog::new(vec![a, b], Vec::new());
        assert_eq!(result, Err(CommerceError::DuplicateProduct(ProductId::new(1))));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.get(ProductId::new(14)).map(|p| p.name.as_str()), Some("Georgette Party Saree"));
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert_eq!(
            catalog.require(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(ProductId::new(99)))
        );
    }
}
