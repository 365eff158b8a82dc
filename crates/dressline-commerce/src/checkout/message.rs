//! Plain-text message templates sent over chat.

use crate::cart::Cart;
use crate::catalog::{Product, ShopDetails};
use crate::error::CommerceError;

const RULE: &str = "----------------------------";

/// Order summary for the items in the cart.
///
/// Returns `Ok(None)` for an empty cart; there is nothing to order.
pub fn order_summary(cart: &Cart, shop: &ShopDetails) -> Result<Option<String>, CommerceError> {
    if cart.is_empty() {
        return Ok(None);
    }

    let mut message = format!("*New Order Request via {} Web*\n\n", shop.name);

    for (index, item) in cart.items.iter().enumerate() {
        let size_info = item
            .selected_size
            .as_deref()
            .map(|size| format!(" - Size: {}", size))
            .unwrap_or_default();
        message.push_str(&format!(
            "{}. *{}* (Ref: #{}){}\n",
            index + 1,
            item.product.name,
            item.product.id,
            size_info
        ));
        message.push_str(&format!("   Brand: {}\n", item.product.brand));
        message.push_str(&format!(
            "   Qty: {} x {}\n",
            item.quantity,
            item.product.price.display()
        ));
        message.push_str(&format!(
            "   Subtotal: {}\n\n",
            item.total_price()?.display()
        ));
    }

    let total = cart.subtotal()?;
    message.push_str(&format!("{}\n", RULE));
    message.push_str(&format!("*TOTAL AMOUNT: {}*\n", total.display()));
    message.push_str(&format!("{}\n\n", RULE));
    message.push_str("Please confirm availability and share payment details.");

    Ok(Some(message))
}

/// Product inquiry from the quick view.
pub fn inquiry(product: &Product, size: Option<&str>) -> String {
    let size_info = size
        .filter(|s| !s.is_empty())
        .map(|s| format!(" Size: {}", s))
        .unwrap_or_default();
    format!(
        "Hi, I'm interested in *{}* (Ref: #{}){}. Could you please provide more details?",
        product.name, product.id, size_info
    )
}

/// Link to a product page on the shop site.
pub fn product_link(product: &Product, shop: &ShopDetails) -> String {
    format!("{}?p={}", shop.origin, product.id)
}

/// Share text for social buttons on the product card.
pub fn share(product: &Product, shop: &ShopDetails) -> String {
    format!(
        "Check out {} at {}!\nPrice: {}\n{}",
        product.name,
        shop.name,
        product.price.display(),
        product_link(product, shop)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    #[test]
    fn test_empty_cart_has_no_order() {
        assert_eq!(order_summary(&Cart::new(), &ShopDetails::default()), Ok(None));
    }

    #[test]
    fn test_order_summary_template() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        let dress = catalog.get(ProductId::new(1)).unwrap();
        let tote = catalog.get(ProductId::new(13)).unwrap();
        cart.add_item(dress, Some("M".to_string()));
        cart.add_item(dress, Some("M".to_string()));
        cart.add_item(tote, None);

        let message = order_summary(&cart, &ShopDetails::default()).unwrap().unwrap();
        let expected = "*New Order Request via Dress Line Web*\n\n\
            1. *Work Midi Length Dress* (Ref: #1) - Size: M\n\
            \x20  Brand: Dress Line Exclusive\n\
            \x20  Qty: 2 x LKR 3,500\n\
            \x20  Subtotal: LKR 7,000\n\n\
            2. *Designer Tote Bag* (Ref: #13)\n\
            \x20  Brand: Luxe\n\
            \x20  Qty: 1 x LKR 9,500\n\
            \x20  Subtotal: LKR 9,500\n\n\
            ----------------------------\n\
            *TOTAL AMOUNT: LKR 16,500*\n\
            ----------------------------\n\n\
            Please confirm availability and share payment details.";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_inquiry_with_and_without_size() {
        let catalog = Catalog::seeded();
        let heels = catalog.get(ProductId::new(11)).unwrap();
        assert_eq!(
            inquiry(heels, Some("38")),
            "Hi, I'm interested in *Classic Beige Heels* (Ref: #11) Size: 38. Could you please provide more details?"
        );
        assert_eq!(
            inquiry(heels, None),
            "Hi, I'm interested in *Classic Beige Heels* (Ref: #11). Could you please provide more details?"
        );
    }

    #[test]
    fn test_share_message() {
        let catalog = Catalog::seeded();
        let saree = catalog.get(ProductId::new(14)).unwrap();
        assert_eq!(
            share(saree, &ShopDetails::default()),
            "Check out Georgette Party Saree at Dress Line!\nPrice: LKR 14,500\nhttps://dressline.lk?p=14"
        );
    }
}
