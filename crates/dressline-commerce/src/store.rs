//! Storefront state container.
//!
//! All domain and UI state lives in one [`Storefront`] value. Intents go
//! through [`Storefront::reduce`], which returns the next state and the
//! side effects the owner must carry out (timers, deep links, scrolling).
//! A rejected intent returns an error and leaves the state untouched.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::{Carousel, TimerCommand};
use crate::cart::{AddSource, Cart, CartPricing, LineKey};
use crate::catalog::{Catalog, Product, Review};
use crate::checkout::link;
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{breadcrumb, ResultsHeading, SearchState};
use crate::wishlist::Wishlist;

/// Footer legal documents shown in a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalDocument {
    Privacy,
    Terms,
}

impl LegalDocument {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalDocument::Privacy => "privacy",
            LegalDocument::Terms => "terms",
        }
    }
}

/// Social network a product is shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareChannel {
    WhatsApp,
    Facebook,
}

/// Drawer, modal and toggle flags. Independent of the domain state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub cart_open: bool,
    pub wishlist_open: bool,
    pub show_all_trending: bool,
    pub show_all_new: bool,
    pub legal_document: Option<LegalDocument>,
    pub show_scroll_top: bool,
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    SetSearchTerm {
        term: String,
    },
    SelectCategory {
        category: String,
    },
    AddToCart {
        product_id: ProductId,
        source: AddSource,
    },
    RemoveFromCart {
        product_id: ProductId,
        #[serde(default)]
        size: Option<String>,
    },
    UpdateQuantity {
        product_id: ProductId,
        #[serde(default)]
        size: Option<String>,
        delta: i64,
    },
    ToggleWishlist {
        product_id: ProductId,
    },
    RemoveFromWishlist {
        product_id: ProductId,
    },
    MoveToCart {
        product_id: ProductId,
    },
    SetHovering {
        hovering: bool,
    },
    GoToReviewIndex {
        index: usize,
    },
    ViewportResized {
        width: u32,
    },
    AutoAdvanceTick {
        generation: u64,
    },
    OpenCart,
    CloseCart,
    OpenWishlist,
    CloseWishlist,
    ToggleShowAllTrending,
    ToggleShowAllNew,
    OpenLegal {
        document: LegalDocument,
    },
    CloseLegal,
    Scrolled {
        y: u32,
    },
    ScrollToTop,
    Checkout,
    Inquire {
        product_id: ProductId,
        #[serde(default)]
        size: Option<String>,
    },
    Share {
        product_id: ProductId,
        channel: ShareChannel,
    },
}

impl Intent {
    /// Name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SetSearchTerm { .. } => "set_search_term",
            Intent::SelectCategory { .. } => "select_category",
            Intent::AddToCart { .. } => "add_to_cart",
            Intent::RemoveFromCart { .. } => "remove_from_cart",
            Intent::UpdateQuantity { .. } => "update_quantity",
            Intent::ToggleWishlist { .. } => "toggle_wishlist",
            Intent::RemoveFromWishlist { .. } => "remove_from_wishlist",
            Intent::MoveToCart { .. } => "move_to_cart",
            Intent::SetHovering { .. } => "set_hovering",
            Intent::GoToReviewIndex { .. } => "go_to_review_index",
            Intent::ViewportResized { .. } => "viewport_resized",
            Intent::AutoAdvanceTick { .. } => "auto_advance_tick",
            Intent::OpenCart => "open_cart",
            Intent::CloseCart => "close_cart",
            Intent::OpenWishlist => "open_wishlist",
            Intent::CloseWishlist => "close_wishlist",
            Intent::ToggleShowAllTrending => "toggle_show_all_trending",
            Intent::ToggleShowAllNew => "toggle_show_all_new",
            Intent::OpenLegal { .. } => "open_legal",
            Intent::CloseLegal => "close_legal",
            Intent::Scrolled { .. } => "scrolled",
            Intent::ScrollToTop => "scroll_to_top",
            Intent::Checkout => "checkout",
            Intent::Inquire { .. } => "inquire",
            Intent::Share { .. } => "share",
        }
    }
}

/// Work the owner of the state must do after a reducer step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Replace the auto-advance timer with one for `generation`.
    ScheduleAutoAdvance { generation: u64, interval: Duration },
    /// Drop the auto-advance timer.
    CancelAutoAdvance,
    /// Open a chat or share URL.
    OpenDeepLink { url: String },
    ScrollToTop,
}

impl From<TimerCommand> for Effect {
    fn from(command: TimerCommand) -> Self {
        match command {
            TimerCommand::Schedule {
                generation,
                interval,
            } => Effect::ScheduleAutoAdvance {
                generation,
                interval,
            },
            TimerCommand::Cancel => Effect::CancelAutoAdvance,
        }
    }
}

/// The whole storefront session.
#[derive(Debug, Clone, Serialize)]
pub struct Storefront {
    #[serde(skip)]
    catalog: Arc<Catalog>,
    #[serde(skip)]
    config: Arc<StorefrontConfig>,
    search: SearchState,
    cart: Cart,
    wishlist: Wishlist,
    carousel: Carousel,
    ui: UiState,
}

impl Storefront {
    /// Fresh session over a catalog.
    pub fn new(catalog: Arc<Catalog>, config: Arc<StorefrontConfig>) -> Self {
        let carousel = Carousel::new(catalog.reviews().len(), config.carousel.clone());
        Self {
            catalog,
            config,
            search: SearchState::default(),
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            carousel,
            ui: UiState::default(),
        }
    }

    /// Session over the seeded catalog with default configuration.
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(Catalog::seeded()),
            Arc::new(StorefrontConfig::default()),
        )
    }

    /// Effects to run once the owner is ready: the first auto-advance timer.
    pub fn start(&mut self) -> Vec<Effect> {
        vec![self.carousel.start().into()]
    }

    /// Apply an intent to a copy of the state.
    ///
    /// On error `self` is unchanged and no effects are produced.
    pub fn reduce(&self, intent: Intent) -> Result<(Storefront, Vec<Effect>), CommerceError> {
        let name = intent.as_str();
        let mut next = self.clone();
        match next.apply(intent) {
            Ok(effects) => {
                tracing::debug!(intent = name, effects = effects.len(), "Applied intent");
                Ok((next, effects))
            }
            Err(e) => {
                tracing::warn!(intent = name, error = %e, "Rejected intent");
                Err(e)
            }
        }
    }

    /// Apply an intent in place.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Vec<Effect>, CommerceError> {
        let (next, effects) = self.reduce(intent)?;
        *self = next;
        Ok(effects)
    }

    fn apply(&mut self, intent: Intent) -> Result<Vec<Effect>, CommerceError> {
        let mut effects = Vec::new();

        match intent {
            Intent::SetSearchTerm { term } => self.search.set_term(term),
            Intent::SelectCategory { category } => {
                self.search.select_category(category);
                effects.push(Effect::ScrollToTop);
            }
            Intent::AddToCart { product_id, source } => {
                let product = self.catalog.require(product_id)?;
                let size = source.resolve_size(product)?;
                self.cart.add_item(product, size);
                self.ui.cart_open = true;
            }
            Intent::RemoveFromCart { product_id, size } => {
                self.cart.remove_item(&LineKey::new(product_id, size));
            }
            Intent::UpdateQuantity {
                product_id,
                size,
                delta,
            } => {
                self.cart
                    .update_quantity(&LineKey::new(product_id, size), delta);
            }
            Intent::ToggleWishlist { product_id } => {
                let product = self.catalog.require(product_id)?;
                self.wishlist.toggle(product);
            }
            Intent::RemoveFromWishlist { product_id } => {
                self.wishlist.remove(product_id);
            }
            Intent::MoveToCart { product_id } => {
                let product = self.catalog.require(product_id)?;
                self.wishlist.move_to_cart(product, &mut self.cart);
                self.ui.cart_open = true;
            }
            Intent::SetHovering { hovering } => {
                effects.extend(self.carousel.set_hovering(hovering).map(Effect::from));
            }
            Intent::GoToReviewIndex { index } => {
                self.carousel.go_to(index);
            }
            Intent::ViewportResized { width } => {
                effects.extend(self.carousel.resize(width).map(Effect::from));
            }
            Intent::AutoAdvanceTick { generation } => {
                self.carousel.tick(generation);
            }
            Intent::OpenCart => self.ui.cart_open = true,
            Intent::CloseCart => self.ui.cart_open = false,
            Intent::OpenWishlist => self.ui.wishlist_open = true,
            Intent::CloseWishlist => self.ui.wishlist_open = false,
            Intent::ToggleShowAllTrending => {
                self.ui.show_all_trending = !self.ui.show_all_trending
            }
            Intent::ToggleShowAllNew => self.ui.show_all_new = !self.ui.show_all_new,
            Intent::OpenLegal { document } => self.ui.legal_document = Some(document),
            Intent::CloseLegal => self.ui.legal_document = None,
            Intent::Scrolled { y } => {
                self.ui.show_scroll_top = y > self.config.ui.scroll_top_threshold;
            }
            Intent::ScrollToTop => effects.push(Effect::ScrollToTop),
            Intent::Checkout => match link::checkout(&self.cart, &self.config.shop)? {
                Some(url) => effects.push(Effect::OpenDeepLink { url }),
                None => tracing::debug!("Checkout with an empty cart"),
            },
            Intent::Inquire { product_id, size } => {
                let product = self.catalog.require(product_id)?;
                let url = link::inquiry(product, size.as_deref(), &self.config.shop);
                effects.push(Effect::OpenDeepLink { url });
            }
            Intent::Share {
                product_id,
                channel,
            } => {
                let product = self.catalog.require(product_id)?;
                let url = match channel {
                    ShareChannel::WhatsApp => link::share_whatsapp(product, &self.config.shop),
                    ShareChannel::Facebook => link::share_facebook(product, &self.config.shop),
                };
                effects.push(Effect::OpenDeepLink { url });
            }
        }

        Ok(effects)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Products matching the current search, in catalog order.
    pub fn products(&self) -> Vec<&Product> {
        self.search.filter().apply(self.catalog.products())
    }

    pub fn trending(&self) -> &[Product] {
        self.config
            .sections
            .trending(self.catalog.products(), self.ui.show_all_trending)
    }

    pub fn new_arrivals(&self) -> &[Product] {
        self.config
            .sections
            .new_arrivals(self.catalog.products(), self.ui.show_all_new)
    }

    pub fn heading(&self) -> ResultsHeading {
        self.search.heading()
    }

    pub fn breadcrumb(&self) -> String {
        breadcrumb(&self.search.term, &self.search.category)
    }

    /// Reviews on screen in the carousel.
    pub fn visible_reviews(&self) -> &[Review] {
        &self.catalog.reviews()[self.carousel.visible()]
    }

    pub fn cart_pricing(&self) -> Result<CartPricing, CommerceError> {
        self.cart.calculate_pricing()
    }

    pub fn is_wishlisted(&self, product_id: ProductId) -> bool {
        self.wishlist.contains(product_id)
    }
}
