//! Search module.
//!
//! Contains the filter engine and the landing page sections.

mod filter;
mod sections;

pub use filter::{filter_products, Filter};
pub use sections::{breadcrumb, items_found, ResultsHeading, SectionConfig};

use crate::catalog::HOME;
use serde::{Deserialize, Serialize};

/// Current search input and selected navigation label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub term: String,
    pub category: String,
}

impl SearchState {
    /// Whether the unfiltered landing view is showing.
    pub fn is_home_view(&self) -> bool {
        self.term.is_empty() && self.category == HOME
    }

    /// Update the free-text search term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Select a navigation label. "Home" clears the search; any other label
    /// becomes both the search term and the selected category.
    pub fn select_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category == HOME {
            self.term.clear();
        } else {
            self.term = category.clone();
        }
        self.category = category;
    }

    /// The resolved filter for the current input.
    pub fn filter(&self) -> Filter {
        Filter::resolve(&self.term, &self.category)
    }

    pub fn heading(&self) -> ResultsHeading {
        ResultsHeading::new(&self.term, &self.category)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: HOME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_category() {
        let mut search = SearchState::default();
        assert!(search.is_home_view());

        search.select_category("Sale");
        assert_eq!(search.term, "Sale");
        assert_eq!(search.category, "Sale");
        assert!(!search.is_home_view());

        search.select_category("Home");
        assert!(search.term.is_empty());
        assert!(search.is_home_view());
    }

    #[test]
    fn test_typing_leaves_category() {
        let mut search = SearchState::default();
        search.select_category("Tops");
        search.set_term("");
        assert_eq!(search.heading(), ResultsHeading::Category("Tops".to_string()));
        assert!(!search.is_home_view());
    }
}
