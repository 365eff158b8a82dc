//! Shop identity and navigation.

use serde::{Deserialize, Serialize};

/// A shop founder listed in the footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Founder {
    pub name: String,
    pub role: String,
    pub phone: String,
}

/// Shop identity and contact channels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShopDetails {
    /// Shop name, used in message templates.
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    /// WhatsApp number receiving orders and inquiries, digits only.
    pub whatsapp_number: String,
    /// Site origin used to build product share links.
    pub origin: String,
    pub founders: Vec<Founder>,
}

impl Default for ShopDetails {
    fn default() -> Self {
        Self {
            name: "Dress Line".to_string(),
            tagline: "Simple the best".to_string(),
            location: "No.83, Trinco Road, Batticaloa".to_string(),
            phone: "065 222 6332".to_string(),
            whatsapp_number: "94768685970".to_string(),
            origin: "https://dressline.lk".to_string(),
            founders: vec![
                Founder {
                    name: "Mr. MM. SABURUDEEN".to_string(),
                    role: "PROPRIETOR".to_string(),
                    phone: "+94 777 113 420".to_string(),
                },
                Founder {
                    name: "Mr. S. YUSREE AHMATH".to_string(),
                    role: "PROPRIETOR".to_string(),
                    phone: "+94 76 86 85 970".to_string(),
                },
            ],
        }
    }
}

/// Header navigation labels. Selecting one feeds the label into the filter
/// as both search term and category.
pub const NAV_LINKS: [&str; 8] = [
    "Home",
    "New Arrivals",
    "Sale",
    "Dresses",
    "Abayas",
    "Sarees",
    "Tops",
    "Shoes & Bags",
];

/// Category label for the unfiltered landing view.
pub const HOME: &str = "Home";

/// Canonical navigation label for `label`, matched case-insensitively.
pub fn nav_link(label: &str) -> Option<&'static str> {
    let label = label.trim();
    NAV_LINKS
        .iter()
        .copied()
        .find(|link| link.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_canonicalizes_label() {
        assert_eq!(nav_link("shoes & bags"), Some("Shoes & Bags"));
        assert_eq!(nav_link(" SALE "), Some("Sale"));
        assert_eq!(nav_link(HOME), Some(HOME));
        assert_eq!(nav_link("Handbags"), None);
    }
}
