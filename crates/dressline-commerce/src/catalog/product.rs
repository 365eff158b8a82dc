//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Number of gallery slots filled when a product has no dedicated gallery.
pub const GALLERY_FALLBACK_LEN: usize = 4;

/// Department a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Women,
    Men,
    Kids,
    Beauty,
    Home,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Women => "Women",
            Category::Men => "Men",
            Category::Kids => "Kids",
            Category::Beauty => "Beauty",
            Category::Home => "Home",
        }
    }
}

/// Merchandising label shown as a badge on the product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductTag {
    New,
    Sale,
    #[serde(rename = "Best Seller")]
    BestSeller,
}

impl ProductTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductTag::New => "New",
            ProductTag::Sale => "Sale",
            ProductTag::BestSeller => "Best Seller",
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand or label.
    pub brand: String,
    /// Current selling price.
    pub price: Money,
    /// Price before markdown, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Primary image reference.
    pub image: String,
    /// Gallery image references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Department.
    pub category: Category,
    /// Merchandising label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ProductTag>,
    /// Size labels. Non-empty means a size must be chosen in the quick view.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Money,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            price,
            original_price: None,
            image: image.into(),
            images: Vec::new(),
            category,
            tag: None,
            sizes: Vec::new(),
        }
    }

    /// Set the pre-markdown price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Set the merchandising tag.
    pub fn with_tag(mut self, tag: ProductTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Set the available sizes.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the gallery images.
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a size must be selected before adding from the quick view.
    pub fn requires_size(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Whether the product offers the given size label.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if the product is marked down.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount > self.price.amount)
            .unwrap_or(false)
    }

    /// Markdown as a whole percentage of the original price, 0 when not
    /// marked down.
    pub fn discount_percent(&self) -> u32 {
        match self.original_price {
            Some(original) if original.amount > self.price.amount => {
                // Round half up on the exact ratio.
                let savings = (original.amount - self.price.amount) as i128;
                let original = original.amount as i128;
                ((savings * 200 + original) / (original * 2)) as u32
            }
            _ => 0,
        }
    }

    /// Images for the quick-view gallery.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str(); GALLERY_FALLBACK_LEN]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dress() -> Product {
        Product::new(1, "Work Midi Length Dress", "Dress Line Exclusive", Money::lkr(3500), Category::Women, "5.jpg")
    }

    #[test]
    fn test_discount_percent_rounds() {
        let product = dress().with_original_price(Money::lkr(4500));
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percent(), 22);

        let product = Product::new(5, "Long Top", "Dress Line Exclusive", Money::lkr(2700), Category::Women, "7.jpg")
            .with_original_price(Money::lkr(4000));
        assert_eq!(product.discount_percent(), 33);
    }

    #[test]
    fn test_no_discount_without_higher_original() {
        assert_eq!(dress().discount_percent(), 0);
        let product = dress().with_original_price(Money::lkr(3000));
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percent(), 0);
    }

    #[test]
    fn test_gallery_falls_back_to_primary_image() {
        assert_eq!(dress().gallery(), vec!["5.jpg"; 4]);
        let product = dress().with_images(["a.jpg", "b.jpg"]);
        assert_eq!(product.gallery(), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_size_requirement() {
        assert!(!dress().requires_size());
        let product = dress().with_sizes(["S", "M"]);
        assert!(product.requires_size());
        assert!(product.offers_size("M"));
        assert!(!product.offers_size("XL"));
    }

    #[test]
    fn test_tag_strings() {
        assert_eq!(ProductTag::BestSeller.as_str(), "Best Seller");
        assert_eq!(
            serde_json::to_string(&ProductTag::BestSeller).unwrap(),
            "\"Best Seller\""
        );
        assert_eq!(Category::Kids.as_str(), "Kids");
    }
}
