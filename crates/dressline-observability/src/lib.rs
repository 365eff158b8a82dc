//! Observability for storefront sessions.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every line a session logs
//! - `SessionLogger` - Structured logging with session context
//! - `JournalRecorder` / `Journal` - Record dispatched intents for replay

mod journal;
mod logging;
mod session;

pub use journal::*;
pub use logging::*;
pub use session::*;
