//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Most intents are total and fail quiet; these are the few that are
/// rejected and reported back to the presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: #{0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: #{0}")]
    DuplicateProduct(ProductId),

    /// A sized product was added from the detail view without a size.
    #[error("Please select a size for product #{product_id}")]
    SizeRequired { product_id: ProductId },

    /// The selected size is not offered for the product.
    #[error("Size {size} is not available for product #{product_id}")]
    InvalidSize { product_id: ProductId, size: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    /// Whether this error is a user-facing validation notice rather than a
    /// programming or data error.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::SizeRequired { .. } | CommerceError::InvalidSize { .. }
        )
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
