//! Deep links that open a chat or share dialog pre-filled with text.

use crate::cart::Cart;
use crate::catalog::{Product, ShopDetails};
use crate::checkout::message;
use crate::error::CommerceError;

const WHATSAPP: &str = "https://wa.me";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

/// WhatsApp link to a number with a pre-filled message.
pub fn whatsapp(number: &str, text: &str) -> String {
    format!("{}/{}?text={}", WHATSAPP, number, urlencoding::encode(text))
}

/// Checkout link for the cart, `None` when the cart is empty.
pub fn checkout(cart: &Cart, shop: &ShopDetails) -> Result<Option<String>, CommerceError> {
    Ok(message::order_summary(cart, shop)?.map(|text| whatsapp(&shop.whatsapp_number, &text)))
}

/// "View Full Details (WhatsApp)" link from the quick view.
pub fn inquiry(product: &Product, size: Option<&str>, shop: &ShopDetails) -> String {
    whatsapp(&shop.whatsapp_number, &message::inquiry(product, size))
}

/// WhatsApp share link with no recipient; the user picks one.
pub fn share_whatsapp(product: &Product, shop: &ShopDetails) -> String {
    format!(
        "{}/?text={}",
        WHATSAPP,
        urlencoding::encode(&message::share(product, shop))
    )
}

/// Facebook sharer link.
pub fn share_facebook(product: &Product, shop: &ShopDetails) -> String {
    format!(
        "{}?u={}&quote={}",
        FACEBOOK_SHARER,
        urlencoding::encode(&message::product_link(product, shop)),
        urlencoding::encode(&message::share(product, shop))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    #[test]
    fn test_whatsapp_link_encodes_text() {
        assert_eq!(
            whatsapp("94768685970", "Hi *there* #1\nok"),
            "https://wa.me/94768685970?text=Hi%20%2Athere%2A%20%231%0Aok"
        );
    }

    #[test]
    fn test_checkout_link() {
        let catalog = Catalog::seeded();
        let shop = ShopDetails::default();
        assert_eq!(checkout(&Cart::new(), &shop), Ok(None));

        let mut cart = Cart::new();
        cart.add_item(catalog.get(ProductId::new(4)).unwrap(), None);
        let link = checkout(&cart, &shop).unwrap().unwrap();
        assert!(link.starts_with("https://wa.me/94768685970?text=%2ANew%20Order%20Request"));
        assert!(link.contains("Denim%20Short"));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn test_inquiry_link() {
        let catalog = Catalog::seeded();
        let link = inquiry(catalog.get(ProductId::new(2)).unwrap(), Some("L"), &ShopDetails::default());
        assert!(link.starts_with("https://wa.me/94768685970?text=Hi%2C%20I%27m%20interested"));
        assert!(link.contains("Size%3A%20L"));
    }

    #[test]
    fn test_share_links() {
        let catalog = Catalog::seeded();
        let shop = ShopDetails::default();
        let saree = catalog.get(ProductId::new(14)).unwrap();

        assert!(share_whatsapp(saree, &shop).starts_with("https://wa.me/?text=Check%20out"));
        let facebook = share_facebook(saree, &shop);
        assert!(facebook.starts_with(
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fdressline.lk%3Fp%3D14&quote="
        ));
    }
}
