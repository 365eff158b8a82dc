//! Product inquiry links.

use anyhow::{bail, Result};
use dressline_commerce::checkout::message;
use dressline_commerce::ids::ProductId;
use dressline_commerce::store::{Effect, Intent};

use super::InquireArgs;
use crate::context::Context;

/// Run the inquire command.
pub async fn run(args: InquireArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront();
    let product_id = ProductId::new(args.product);

    let effects = store.dispatch(Intent::Inquire {
        product_id,
        size: args.size.clone(),
    })?;
    let [Effect::OpenDeepLink { url }] = effects.as_slice() else {
        bail!("No inquiry link for product #{}", product_id);
    };

    let product = store.catalog().require(product_id)?;
    let text = message::inquiry(product, args.size.as_deref());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "message": text, "url": url }));
        return Ok(());
    }

    ctx.output.header(&format!("Inquiry: {}", product.name));
    ctx.output.kv("Message", &text);
    println!();
    println!("{}", url);

    Ok(())
}
