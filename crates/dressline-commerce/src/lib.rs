//! Storefront core for the Dress Line boutique.
//!
//! This crate holds the client-side state of the shop:
//!
//! - **Catalog**: Seeded products, reviews, shop details
//! - **Search**: Category and keyword filtering, landing page sections
//! - **Cart**: Line items keyed by product and size, totals
//! - **Wishlist**: Saved products, move to cart
//! - **Carousel**: Review paging with a cancellable auto-advance timer
//! - **Checkout**: Order, inquiry and share messages as WhatsApp deep links
//! - **Store**: The reducer tying it all together
//!
//! # Example
//!
//! ```rust
//! use dressline_commerce::prelude::*;
//!
//! let mut store = Storefront::seeded();
//! store
//!     .dispatch(Intent::AddToCart {
//!         product_id: ProductId::new(1),
//!         source: AddSource::QuickView { size: Some("M".to_string()) },
//!     })
//!     .unwrap();
//!
//! let effects = store.dispatch(Intent::Checkout).unwrap();
//! assert!(matches!(effects.as_slice(), [Effect::OpenDeepLink { .. }]));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod search;
pub mod store;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, ProductTag, Review, ShopDetails};

    // Cart
    pub use crate::cart::{AddSource, Cart, CartPricing, LineItem, LineKey};

    // Wishlist
    pub use crate::wishlist::Wishlist;

    // Search
    pub use crate::search::{Filter, ResultsHeading, SearchState, SectionConfig};

    // Carousel
    pub use crate::carousel::{AutoAdvance, AutoAdvanceTimer, Carousel, CarouselConfig, Tick};

    // Store
    pub use crate::config::StorefrontConfig;
    pub use crate::store::{Effect, Intent, LegalDocument, ShareChannel, Storefront, UiState};
}
