//! Catalog browsing.

use anyhow::Result;
use dressline_commerce::catalog::Product;
use dressline_commerce::ids::ProductId;
use dressline_commerce::store::Intent;

use super::{CatalogArgs, Section};
use crate::context::Context;
use crate::output::format_price;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    if let Some(id) = args.product {
        return show_product(ProductId::new(id), ctx);
    }

    let mut store = ctx.storefront();
    if args.show_all {
        let toggle = match args.section {
            Section::NewArrivals => Intent::ToggleShowAllNew,
            _ => Intent::ToggleShowAllTrending,
        };
        store.dispatch(toggle)?;
    }

    let (title, products): (&str, Vec<&Product>) = match args.section {
        Section::All => ("Catalog", store.catalog().products().iter().collect()),
        Section::Trending => ("Trending collection", store.trending().iter().collect()),
        Section::NewArrivals => ("New Arrivals", store.new_arrivals().iter().collect()),
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(title);
    ctx.output.product_rows(products.iter().copied());

    if matches!(args.section, Section::Trending)
        && !args.show_all
        && ctx.config.storefront.sections.trending_has_more(store.catalog().products())
    {
        ctx.output.info("");
        ctx.output.info("Use --show-all to see more");
    }

    Ok(())
}

fn show_product(id: ProductId, ctx: &Context) -> Result<()> {
    let product = ctx.catalog().require(id)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Ref", &format!("#{}", product.id));
    ctx.output.kv("Brand", &product.brand);
    ctx.output.kv("Category", product.category.as_str());
    ctx.output.kv("Price", &format_price(product));
    if let Some(tag) = product.tag {
        ctx.output.kv("Tag", tag.as_str());
    }
    if product.requires_size() {
        ctx.output.kv("Sizes", &product.sizes.join(", "));
    }
    ctx.output.info("");
    ctx.output.info("Gallery:");
    for image in product.gallery() {
        ctx.output.list_item(image);
    }

    Ok(())
}
