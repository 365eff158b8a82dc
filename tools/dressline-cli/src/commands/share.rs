//! Product share links.

use anyhow::{bail, Result};
use dressline_commerce::ids::ProductId;
use dressline_commerce::store::{Effect, Intent, ShareChannel};

use super::{Channel, ShareArgs};
use crate::context::Context;

/// Run the share command.
pub async fn run(args: ShareArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront();
    let product_id = ProductId::new(args.product);
    let channel = match args.channel {
        Channel::Whatsapp => ShareChannel::WhatsApp,
        Channel::Facebook => ShareChannel::Facebook,
    };

    let effects = store.dispatch(Intent::Share {
        product_id,
        channel,
    })?;
    let [Effect::OpenDeepLink { url }] = effects.as_slice() else {
        bail!("No share link for product #{}", product_id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "channel": channel, "url": url }));
    } else {
        println!("{}", url);
    }

    Ok(())
}
