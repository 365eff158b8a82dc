//! Landing page sections and result headings.

use crate::catalog::{Product, HOME};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Catalog ranges for the landing page sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionConfig {
    /// Trending products shown before "show more".
    #[serde(default = "default_trending_collapsed")]
    pub trending_collapsed: usize,
    /// Trending products shown after "show more".
    #[serde(default = "default_trending_expanded")]
    pub trending_expanded: usize,
    /// Catalog range of the New Arrivals strip.
    #[serde(default = "default_new_arrivals")]
    pub new_arrivals: Range<usize>,
}

fn default_trending_collapsed() -> usize {
    8
}

fn default_trending_expanded() -> usize {
    16
}

fn default_new_arrivals() -> Range<usize> {
    12..16
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            trending_collapsed: default_trending_collapsed(),
            trending_expanded: default_trending_expanded(),
            new_arrivals: default_new_arrivals(),
        }
    }
}

impl SectionConfig {
    /// The "Trending collection" slice.
    pub fn trending<'a>(&self, products: &'a [Product], show_all: bool) -> &'a [Product] {
        let end = if show_all {
            self.trending_expanded
        } else {
            self.trending_collapsed
        };
        clamp_slice(products, 0..end)
    }

    /// The "New Arrivals" slice. The show-all toggle does not widen it.
    pub fn new_arrivals<'a>(&self, products: &'a [Product], _show_all: bool) -> &'a [Product] {
        clamp_slice(products, self.new_arrivals.clone())
    }

    /// Whether expanding the trending section would reveal more products.
    pub fn trending_has_more(&self, products: &[Product]) -> bool {
        products.len() > self.trending_collapsed
    }
}

fn clamp_slice(products: &[Product], range: Range<usize>) -> &[Product] {
    let end = range.end.min(products.len());
    let start = range.start.min(end);
    &products[start..end]
}

/// Title above the results grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultsHeading {
    /// Browsing a category with no search term.
    Category(String),
    /// Results for a search term.
    Search(String),
}

impl ResultsHeading {
    pub fn new(search_term: &str, selected_category: &str) -> Self {
        if selected_category != HOME && search_term.is_empty() {
            ResultsHeading::Category(selected_category.to_string())
        } else {
            ResultsHeading::Search(search_term.to_string())
        }
    }

    pub fn title(&self) -> String {
        match self {
            ResultsHeading::Category(category) => category.clone(),
            ResultsHeading::Search(term) => format!("Results for \"{}\"", term),
        }
    }
}

/// Breadcrumb label next to "Home".
pub fn breadcrumb(search_term: &str, selected_category: &str) -> String {
    if search_term.is_empty() {
        selected_category.to_string()
    } else {
        "Search Results".to_string()
    }
}

/// "{n} items found".
pub fn items_found(count: usize) -> String {
    format!("{} items found", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_trending_toggle() {
        let catalog = Catalog::seeded();
        let sections = SectionConfig::default();
        assert_eq!(sections.trending(catalog.products(), false).len(), 8);
        // Expanded range is clamped to the 14 seeded products.
        assert_eq!(sections.trending(catalog.products(), true).len(), 14);
        assert!(sections.trending_has_more(catalog.products()));
    }

    #[test]
    fn test_new_arrivals_range() {
        let catalog = Catalog::seeded();
        let sections = SectionConfig::default();
        let ids: Vec<u32> = sections
            .new_arrivals(catalog.products(), false)
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![13, 14]);
        assert_eq!(sections.new_arrivals(catalog.products(), true).len(), 2);
    }

    #[test]
    fn test_ranges_past_the_end_are_empty() {
        let sections = SectionConfig {
            new_arrivals: 40..50,
            ..SectionConfig::default()
        };
        assert!(sections.new_arrivals(Catalog::seeded().products(), false).is_empty());
    }

    #[test]
    fn test_headings() {
        assert_eq!(ResultsHeading::new("", "Sarees").title(), "Sarees");
        assert_eq!(ResultsHeading::new("sarees", "Sarees").title(), "Results for \"sarees\"");
        assert_eq!(breadcrumb("floral", "Home"), "Search Results");
        assert_eq!(breadcrumb("", "Tops"), "Tops");
        assert_eq!(items_found(3), "3 items found");
    }
}
