//! Storefront configuration.

use crate::carousel::CarouselConfig;
use crate::catalog::ShopDetails;
use crate::error::CommerceError;
use crate::search::SectionConfig;
use serde::{Deserialize, Serialize};

/// Everything the storefront reads at startup.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StorefrontConfig {
    /// Shop identity and contact numbers.
    #[serde(default)]
    pub shop: ShopDetails,

    /// Review carousel timing and layout.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Landing page sections.
    #[serde(default)]
    pub sections: SectionConfig,

    /// UI thresholds.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Presentation thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Scroll offset past which the back-to-top button shows.
    #[serde(default = "default_scroll_top_threshold")]
    pub scroll_top_threshold: u32,
}

fn default_scroll_top_threshold() -> u32 {
    400
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold: default_scroll_top_threshold(),
        }
    }
}

impl StorefrontConfig {
    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values the storefront cannot run with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.shop.whatsapp_number.is_empty()
            || !self.shop.whatsapp_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CommerceError::InvalidConfig(format!(
                "shop.whatsapp_number must be digits only, got {:?}",
                self.shop.whatsapp_number
            )));
        }
        if self.carousel.interval_ms == 0 {
            return Err(CommerceError::InvalidConfig(
                "carousel.interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.carousel.wide_items_per_page == 0 || self.carousel.narrow_items_per_page == 0 {
            return Err(CommerceError::InvalidConfig(
                "carousel items per page must be at least 1".to_string(),
            ));
        }
        if self.sections.trending_expanded < self.sections.trending_collapsed {
            return Err(CommerceError::InvalidConfig(
                "sections.trending_expanded must not be less than trending_collapsed".to_string(),
            ));
        }
        if self.sections.new_arrivals.start > self.sections.new_arrivals.end {
            return Err(CommerceError::InvalidConfig(
                "sections.new_arrivals start must not be past its end".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ui.scroll_top_threshold, 400);
        assert_eq!(config.carousel.interval_ms, 4000);
        assert_eq!(config.shop.whatsapp_number, "94768685970");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = StorefrontConfig::from_json(r#"{"carousel": {"interval_ms": 2500}}"#).unwrap();
        assert_eq!(config.carousel.interval_ms, 2500);
        assert_eq!(config.carousel.breakpoint_px, 768);
        assert_eq!(config.sections, SectionConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StorefrontConfig::default();
        config.shop.whatsapp_number = "+94 76".to_string();
        assert!(matches!(config.validate(), Err(CommerceError::InvalidConfig(_))));

        let mut config = StorefrontConfig::default();
        config.carousel.interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.carousel.wide_items_per_page = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            StorefrontConfig::from_json("{"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
