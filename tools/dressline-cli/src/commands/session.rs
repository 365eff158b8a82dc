//! Scripted sessions and journal replay.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context as _, Result};
use chrono::Utc;
use dressline_commerce::store::{Intent, Storefront};
use dressline_observability::{Journal, JournalRecorder, SessionId, SessionLogger};

use super::{SessionArgs, SessionCommand};
use crate::context::Context;

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SessionCommand::Run { script, record } => run_script(&script, record, ctx).await,
        SessionCommand::Replay { journal } => replay_journal(&journal, ctx).await,
        SessionCommand::List => list_journals(ctx).await,
    }
}

async fn run_script(script: &str, record: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(script);
    let intents = load_script(&path)?;

    let session_id = SessionId::generate();
    let logger = ctx.logger(session_id.clone());
    let mut recorder = JournalRecorder::new(session_id.clone());
    let mut store = ctx.storefront();

    logger
        .info_builder("Session started")
        .field("script", path.display().to_string())
        .field_i64("intents", intents.len() as i64)
        .emit();

    let effects = store.start();
    recorder.record_applied(&serde_json::json!({ "intent": "start" }), &effects)?;

    for intent in &intents {
        dispatch_logged(&mut store, intent, &logger, &mut recorder, ctx)?;
    }

    let journal = recorder.finalize();
    logger
        .info_builder("Session finished")
        .field_i64("rejected", journal.rejected_count() as i64)
        .emit();

    if record {
        let file = ctx
            .journals_dir()?
            .join(Utc::now().format("session-%Y%m%d-%H%M%S.json").to_string());
        fs::write(&file, journal.to_json()?)
            .with_context(|| format!("Failed to write journal: {}", file.display()))?;
        ctx.output.success(&format!("Journal saved: {}", file.display()));
    }

    print_summary(&store, ctx)
}

fn dispatch_logged(
    store: &mut Storefront,
    intent: &Intent,
    logger: &SessionLogger,
    recorder: &mut JournalRecorder,
    ctx: &Context,
) -> Result<()> {
    match store.dispatch(intent.clone()) {
        Ok(effects) => {
            logger
                .debug_builder("Dispatched")
                .field("intent", intent.as_str())
                .field_json("effects", &effects)
                .emit();
            for effect in &effects {
                ctx.output.debug(&format!("{} -> {:?}", intent.as_str(), effect));
            }
            recorder.record_applied(intent, &effects)?;
        }
        Err(e) => {
            logger
                .warn_builder("Rejected")
                .field("intent", intent.as_str())
                .field("error", e.to_string())
                .field_bool("validation", e.is_validation())
                .emit();
            ctx.output.warn(&e.to_string());
            recorder.record_rejected(intent, &e)?;
        }
    }
    Ok(())
}

async fn replay_journal(journal: &str, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(journal);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read journal: {}", path.display()))?;
    let expected = Journal::from_json(&content)
        .with_context(|| format!("Failed to parse journal: {}", path.display()))?;

    ctx.output.header(&format!("Replaying: {}", path.display()));
    ctx.output.kv("Session", expected.session_id.as_str());
    ctx.output.kv("Recorded", &expected.started_at.to_rfc3339());
    ctx.output.kv("Entries", &expected.entries.len().to_string());

    let session_id = SessionId::generate();
    let logger = ctx.logger(session_id.clone());
    let mut recorder = JournalRecorder::new(session_id);
    let mut store = ctx.storefront();

    for value in expected.intents() {
        if value.get("intent").and_then(|v| v.as_str()) == Some("start") {
            let effects = store.start();
            recorder.record_applied(value, &effects)?;
            continue;
        }
        let intent: Intent = serde_json::from_value(value.clone())
            .with_context(|| format!("Unrecognized intent in journal: {}", value))?;
        dispatch_logged(&mut store, &intent, &logger, &mut recorder, ctx)?;
    }

    let actual = recorder.finalize();
    let diffs = expected.diff(&actual);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "matches": diffs.is_empty(),
            "diffs": diffs,
        }));
        return Ok(());
    }

    if diffs.is_empty() {
        ctx.output.success("Replay matches the recording");
        return Ok(());
    }

    for diff in &diffs {
        ctx.output.list_item(&format!("#{}: {}", diff.seq, diff.diff_type));
    }
    bail!("Replay differs from the recording in {} entries", diffs.len());
}

async fn list_journals(ctx: &Context) -> Result<()> {
    let dir = ctx.journals_dir()?;

    let mut journals: Vec<(String, Journal)> = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.extension().map_or(false, |e| e == "json") {
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(journal) = Journal::from_json(&content) {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    journals.push((name, journal));
                }
            }
        }
    }

    // Newest first
    journals.sort_by(|a, b| b.1.started_at.cmp(&a.1.started_at));

    if ctx.output.is_json() {
        let names: Vec<&str> = journals.iter().map(|(name, _)| name.as_str()).collect();
        ctx.output.json(&names);
        return Ok(());
    }

    ctx.output.header("Journals");

    if journals.is_empty() {
        ctx.output.info("No journals found.");
        ctx.output.info("Run `dressline session run <script> --record` to record one.");
        return Ok(());
    }

    ctx.output.table_row(&["NAME", "STARTED", "ENTRIES", "REJECTED"], &[32, 20, 8, 8]);
    for (name, journal) in &journals {
        ctx.output.table_row(
            &[
                name,
                &journal.started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                &journal.entries.len().to_string(),
                &journal.rejected_count().to_string(),
            ],
            &[32, 20, 8, 8],
        );
    }

    Ok(())
}

fn load_script(path: &Path) -> Result<Vec<Intent>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Failed to parse script: {}", path.display()))
}

fn parse_script(content: &str) -> Result<Vec<Intent>> {
    Ok(serde_json::from_str(content)?)
}

fn print_summary(store: &Storefront, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(store);
        return Ok(());
    }

    let pricing = store.cart_pricing()?;

    ctx.output.header("Session");
    ctx.output.kv("Search", &format!("{:?} in {}", store.search().term, store.search().category));
    ctx.output.kv("Results", &store.products().len().to_string());
    ctx.output.kv("Bag", &format!("{} item(s), {}", pricing.item_count, pricing.subtotal.display()));
    ctx.output.kv("Wishlist", &store.wishlist().len().to_string());
    ctx.output.kv(
        "Reviews",
        &format!(
            "page {} of {}",
            store.carousel().current_index() + 1,
            store.carousel().max_index() + 1
        ),
    );

    let ui = store.ui();
    let mut open = Vec::new();
    if ui.cart_open {
        open.push("cart");
    }
    if ui.wishlist_open {
        open.push("wishlist");
    }
    if let Some(doc) = ui.legal_document {
        open.push(doc.as_str());
    }
    if !open.is_empty() {
        ctx.output.kv("Open", &open.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let intents = parse_script(
            r#"[
                {"intent": "select_category", "category": "Sale"},
                {"intent": "add_to_cart", "product_id": 1, "source": "QuickAdd"},
                {"intent": "update_quantity", "product_id": 1, "delta": -3},
                {"intent": "checkout"}
            ]"#,
        )
        .unwrap();
        assert_eq!(intents.len(), 4);
        assert_eq!(intents[2].as_str(), "update_quantity");
        assert_eq!(intents[3], Intent::Checkout);
    }

    #[test]
    fn test_parse_script_rejects_unknown_intent() {
        assert!(parse_script(r#"[{"intent": "teleport"}]"#).is_err());
    }
}
