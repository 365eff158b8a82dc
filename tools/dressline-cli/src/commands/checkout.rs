//! Checkout by WhatsApp.

use anyhow::{bail, Context as _, Result};
use dressline_commerce::cart::AddSource;
use dressline_commerce::checkout::message;
use dressline_commerce::ids::ProductId;
use dressline_commerce::store::{Effect, Intent};

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront();

    for item in &args.items {
        store.dispatch(parse_item(item)?)?;
    }

    let pricing = store.cart_pricing()?;

    if args.message {
        let text = message::order_summary(store.cart(), &store.config().shop)?
            .context("Cart is empty")?;
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "message": text }));
        } else {
            println!("{}", text);
        }
        return Ok(());
    }

    let url = match store.dispatch(Intent::Checkout)?.as_slice() {
        [Effect::OpenDeepLink { url }] => url.clone(),
        _ => bail!("Cart is empty"),
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "cart": store.cart(),
            "pricing": pricing,
            "url": url,
        }));
        return Ok(());
    }

    ctx.output.header("Your Bag");
    for line in &store.cart().items {
        let size = line
            .selected_size
            .as_deref()
            .map(|s| format!(" ({})", s))
            .unwrap_or_default();
        ctx.output.list_item(&format!(
            "{}{} x{} - {}",
            line.product.name,
            size,
            line.quantity,
            line.total_price()?.display()
        ));
    }
    ctx.output.kv("Items", &pricing.item_count.to_string());
    ctx.output.kv("Total", &pricing.grand_total.display());
    println!();
    ctx.output.success("Order link ready");
    println!("{}", url);

    Ok(())
}

/// Parse `ID` or `ID:SIZE` into an add-to-cart intent.
///
/// A size goes through the quick view, so it is checked against the
/// product's sizes.
fn parse_item(item: &str) -> Result<Intent> {
    let (id, size) = match item.split_once(':') {
        Some((id, size)) => (id, Some(size.trim().to_string())),
        None => (item, None),
    };
    let product_id: ProductId = id
        .parse()
        .with_context(|| format!("Invalid product ID: {}", id))?;

    let source = match size {
        Some(size) if !size.is_empty() => AddSource::QuickView { size: Some(size) },
        _ => AddSource::QuickAdd,
    };

    Ok(Intent::AddToCart { product_id, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        assert_eq!(
            parse_item("13").unwrap(),
            Intent::AddToCart {
                product_id: ProductId::new(13),
                source: AddSource::QuickAdd,
            }
        );
        assert_eq!(
            parse_item("#1:M").unwrap(),
            Intent::AddToCart {
                product_id: ProductId::new(1),
                source: AddSource::QuickView {
                    size: Some("M".to_string())
                },
            }
        );
        assert!(parse_item("dress").is_err());
    }
}
