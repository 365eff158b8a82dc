//! Catalog search.

use anyhow::{bail, Result};
use dressline_commerce::catalog::{nav_link, NAV_LINKS};
use dressline_commerce::search::items_found;
use dressline_commerce::store::Intent;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront();

    if let Some(label) = args.category {
        let Some(category) = nav_link(&label) else {
            bail!(
                "Unknown category: {} (expected one of: {})",
                label,
                NAV_LINKS.join(", ")
            );
        };
        store.dispatch(Intent::SelectCategory {
            category: category.to_string(),
        })?;
    }
    if let Some(term) = args.term {
        store.dispatch(Intent::SetSearchTerm { term })?;
    }

    let products = store.products();
    let title = if store.search().is_home_view() {
        "All products".to_string()
    } else {
        store.heading().title()
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "search": store.search(),
            "heading": title,
            "count": products.len(),
            "products": products,
        }));
        return Ok(());
    }

    ctx.output.header(&title);
    ctx.output.kv("Home >", &store.breadcrumb());
    ctx.output.kv("Found", &items_found(products.len()));
    println!();

    if products.is_empty() {
        ctx.output.warn("No products found. Try a different search term or category.");
        return Ok(());
    }

    ctx.output.product_rows(products.iter().copied());

    Ok(())
}
