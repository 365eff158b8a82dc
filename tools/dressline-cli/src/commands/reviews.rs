//! Review carousel.

use std::time::Duration;

use anyhow::Result;
use dressline_commerce::carousel::AutoAdvanceTimer;
use dressline_commerce::store::{Effect, Intent, Storefront};
use dressline_observability::SessionId;

use super::ReviewsArgs;
use crate::context::Context;
use crate::output::stars;

/// Run the reviews command.
pub async fn run(args: ReviewsArgs, ctx: &Context) -> Result<()> {
    if args.live {
        run_live(&args, ctx).await
    } else {
        run_simulated(&args, ctx)
    }
}

fn run_simulated(args: &ReviewsArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront();
    store.start();
    store.dispatch(Intent::ViewportResized { width: args.width })?;
    let generation = store.carousel().generation();

    let mut pages = vec![page(&store)];
    for _ in 0..args.ticks {
        store.dispatch(Intent::AutoAdvanceTick { generation })?;
        pages.push(page(&store));
    }

    if ctx.output.is_json() {
        ctx.output.json(&pages);
        return Ok(());
    }

    ctx.output.header("Customer Reviews");
    ctx.output.kv(
        "Layout",
        &format!(
            "{} per page at {}px",
            store.carousel().items_per_page(),
            args.width
        ),
    );
    print_page(&store, ctx);

    Ok(())
}

async fn run_live(args: &ReviewsArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront();
    let logger = ctx.logger(SessionId::generate());
    let (mut timer, mut ticks) = AutoAdvanceTimer::new();

    let mut effects = store.start();
    effects.extend(store.dispatch(Intent::ViewportResized { width: args.width })?);
    apply_effects(&mut timer, effects);

    let carousel = store.carousel();
    logger
        .info_builder("Carousel started")
        .field_i64("items_per_page", carousel.items_per_page() as i64)
        .duration_ms("interval", carousel.config().interval())
        .emit();

    let bar = ctx
        .output
        .position_bar(carousel.max_index() as u64 + 1, &reviewer_names(&store));
    bar.set_position(1);

    let deadline = tokio::time::sleep(Duration::from_secs(args.duration));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            Some(tick) = ticks.recv() => {
                let effects = store.dispatch(Intent::AutoAdvanceTick { generation: tick.generation })?;
                apply_effects(&mut timer, effects);
                let index = store.carousel().current_index();
                bar.set_position(index as u64 + 1);
                bar.set_message(reviewer_names(&store));
                if ctx.output.is_json() {
                    ctx.output.json(&page(&store));
                }
                logger
                    .debug_builder("Advanced")
                    .field_i64("index", index as i64)
                    .emit();
            }
            _ = &mut deadline => break,
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    timer.cancel();
    bar.finish_and_clear();
    logger.info("Carousel stopped");

    if !ctx.output.is_json() {
        print_page(&store, ctx);
    }

    Ok(())
}

/// Hand timer effects to the timer. Other effects do not apply here.
fn apply_effects(timer: &mut AutoAdvanceTimer, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::ScheduleAutoAdvance {
                generation,
                interval,
            } => timer.schedule(generation, interval),
            Effect::CancelAutoAdvance => timer.cancel(),
            Effect::OpenDeepLink { .. } | Effect::ScrollToTop => {}
        }
    }
}

fn page(store: &Storefront) -> serde_json::Value {
    let carousel = store.carousel();
    serde_json::json!({
        "current_index": carousel.current_index(),
        "items_per_page": carousel.items_per_page(),
        "indicators": carousel.max_index() + 1,
        "offset_percent": carousel.offset_percent(),
        "reviews": store.visible_reviews(),
    })
}

fn reviewer_names(store: &Storefront) -> String {
    store
        .visible_reviews()
        .iter()
        .map(|r| r.user_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_page(store: &Storefront, ctx: &Context) {
    let carousel = store.carousel();
    let dots: String = carousel
        .indicators()
        .map(|i| if i == carousel.current_index() { '●' } else { '○' })
        .collect();
    ctx.output.kv("Page", &dots);
    println!();

    for review in store.visible_reviews() {
        let initial = review.initial().unwrap_or('?');
        ctx.output.info(&format!(
            "[{}] {} {} ({})",
            initial,
            review.user_name,
            stars(&review.stars()),
            review.date
        ));
        ctx.output.list_item(&review.comment);
    }
}
