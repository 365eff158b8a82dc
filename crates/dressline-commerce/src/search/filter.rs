//! Search term and category filtering.
//!
//! Navigation labels double as search terms: a handful of them map to
//! curated rules, everything else is a case-insensitive substring search.

use crate::catalog::{Product, ProductTag, HOME};
use serde::{Deserialize, Serialize};

const SHOES_AND_BAGS: &[&str] = &["shoe", "bag", "heel", "clutch", "sneaker", "sandal"];
const DRESSES: &[&str] = &["dress", "gown", "frock", "maxi"];
const ABAYAS: &[&str] = &["abaya"];
const SAREES: &[&str] = &["saree"];
const TOPS: &[&str] = &["top", "shirt", "blouse", "kurti"];

/// A resolved product predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Home view, every product.
    All,
    /// Products carrying a merchandising tag.
    Tag(ProductTag),
    /// Lower-cased name contains any of the keywords.
    NameContainsAny(Vec<String>),
    /// Name, brand, category or tag contains the (lower-cased) needle.
    Text(String),
}

impl Filter {
    /// Resolve the predicate for a search term and selected category.
    ///
    /// Curated rules are checked in priority order and only on an exact
    /// (case-insensitive) term; anything else falls back to text search.
    pub fn resolve(search_term: &str, selected_category: &str) -> Self {
        if search_term.is_empty() && selected_category == HOME {
            return Filter::All;
        }

        let term = search_term.to_lowercase();
        match term.as_str() {
            "new arrivals" => Filter::Tag(ProductTag::New),
            "sale" => Filter::Tag(ProductTag::Sale),
            "shoes & bags" => Filter::name_contains_any(SHOES_AND_BAGS),
            "dresses" => Filter::name_contains_any(DRESSES),
            "abayas" => Filter::name_contains_any(ABAYAS),
            "sarees" => Filter::name_contains_any(SAREES),
            "tops" => Filter::name_contains_any(TOPS),
            _ => Filter::Text(term),
        }
    }

    /// Create a keyword filter.
    pub fn name_contains_any(keywords: &[&str]) -> Self {
        Filter::NameContainsAny(keywords.iter().map(|k| k.to_string()).collect())
    }

    /// Check a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(tag) => product.tag == Some(*tag),
            Filter::NameContainsAny(keywords) => {
                let name = product.name.to_lowercase();
                keywords.iter().any(|k| name.contains(k.as_str()))
            }
            Filter::Text(needle) => {
                product.name.to_lowercase().contains(needle.as_str())
                    || product.brand.to_lowercase().contains(needle.as_str())
                    || product.category.as_str().to_lowercase().contains(needle.as_str())
                    || product
                        .tag
                        .map(|t| t.as_str().to_lowercase().contains(needle.as_str()))
                        .unwrap_or(false)
            }
        }
    }

    /// Apply the filter, keeping catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Products matching a search term and selected category, in catalog order.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    selected_category: &str,
) -> Vec<&'a Product> {
    Filter::resolve(search_term, selected_category).apply(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::ids::ProductId;
    use crate::money::Money;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_home_view_returns_full_catalog_in_order() {
        let catalog = Catalog::seeded();
        let result = filter_products(catalog.products(), "", "Home");
        assert_eq!(ids(&result), (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_sale_returns_sale_tagged_only() {
        let catalog = Catalog::seeded();
        let result = filter_products(catalog.products(), "sale", "Home");
        assert_eq!(ids(&result), vec![1, 5, 8, 12]);
        assert!(result.iter().all(|p| p.tag == Some(ProductTag::Sale)));
    }

    #[test]
    fn test_sale_scenario_with_two_sale_items() {
        let products: Vec<Product> = (1..=14)
            .map(|i| {
                let product = Product::new(i, format!("Item {i}"), "Brand", Money::lkr(1000), Category::Women, "x.jpg");
                if i == 4 || i == 11 {
                    product.with_tag(ProductTag::Sale)
                } else {
                    product
                }
            })
            .collect();
        let result = filter_products(&products, "Sale", "Sale");
        assert_eq!(ids(&result), vec![4, 11]);
    }

    #[test]
    fn test_curated_terms_are_case_insensitive() {
        let catalog = Catalog::seeded();
        assert_eq!(ids(&filter_products(catalog.products(), "New Arrivals", "New Arrivals")), vec![2, 7, 9]);
        assert_eq!(ids(&filter_products(catalog.products(), "SHOES & BAGS", "Home")), vec![11, 13]);
        assert_eq!(ids(&filter_products(catalog.products(), "Sarees", "Sarees")), vec![14]);
    }

    #[test]
    fn test_dresses_and_tops_keywords() {
        let catalog = Catalog::seeded();
        assert_eq!(ids(&filter_products(catalog.products(), "dresses", "Dresses")), vec![1, 6, 9]);
        // "T - Shirt" matches "shirt"; "Kurti" matches "kurti".
        assert_eq!(ids(&filter_products(catalog.products(), "tops", "Tops")), vec![5, 7, 8, 10]);
    }

    #[test]
    fn test_abayas_may_be_empty() {
        let catalog = Catalog::seeded();
        assert!(filter_products(catalog.products(), "abayas", "Abayas").is_empty());
    }

    #[test]
    fn test_general_search_matches_brand_category_and_tag() {
        let catalog = Catalog::seeded();
        assert_eq!(ids(&filter_products(catalog.products(), "luxe", "Home")), vec![9, 13]);
        assert_eq!(ids(&filter_products(catalog.products(), "best", "Home")), vec![3, 4, 11]);
        assert_eq!(filter_products(catalog.products(), "women", "Home").len(), 14);
        assert!(filter_products(catalog.products(), "tuxedo", "Home").is_empty());
    }

    #[test]
    fn test_term_is_literal_substring() {
        let catalog = Catalog::seeded();
        assert!(filter_products(catalog.products(), ".*", "Home").is_empty());
        assert_eq!(ids(&filter_products(catalog.products(), "t - s", "Home")), vec![7]);
    }

    #[test]
    fn test_empty_term_with_category_matches_everything() {
        let catalog = Catalog::seeded();
        assert_eq!(filter_products(catalog.products(), "", "Sale").len(), 14);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Filter::resolve("", "Home"), Filter::All);
        assert_eq!(Filter::resolve("Sale", "Home"), Filter::Tag(ProductTag::Sale));
        assert_eq!(Filter::resolve("Floral", "Home"), Filter::Text("floral".to_string()));
        assert!(Filter::resolve("FLORAL", "Home").matches(
            Catalog::seeded().get(ProductId::new(12)).unwrap()
        ));
    }
}
