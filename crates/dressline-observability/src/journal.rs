//! Intent journals for replaying a session.
//!
//! A journal is the ordered list of intents a session dispatched, with the
//! effects or rejection each produced. Feeding the intents back through a
//! fresh storefront and diffing the outcomes shows whether behavior changed.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SessionId;

/// One dispatched intent and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Position in the session, from 0.
    pub seq: usize,
    /// Milliseconds since the session started.
    pub at_ms: u64,
    pub intent: serde_json::Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<serde_json::Value>,
    /// Rejection message, if the intent was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JournalEntry {
    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

/// A complete session recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    /// Journal format version.
    pub version: u32,
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub entries: Vec<JournalEntry>,
}

impl Journal {
    /// Current journal format version.
    pub const VERSION: u32 = 1;

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The recorded intents, in order.
    pub fn intents(&self) -> impl Iterator<Item = &serde_json::Value> {
        self.entries.iter().map(|e| &e.intent)
    }

    pub fn rejected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_rejected()).count()
    }

    /// Compare outcomes entry by entry. Timing is ignored.
    pub fn diff(&self, actual: &Journal) -> Vec<EntryDiff> {
        let mut diffs = Vec::new();

        for (expected, actual) in self.entries.iter().zip(&actual.entries) {
            if expected.intent != actual.intent {
                diffs.push(EntryDiff::new(expected.seq, DiffType::IntentMismatch));
            } else if expected.error != actual.error {
                diffs.push(EntryDiff::new(expected.seq, DiffType::OutcomeMismatch));
            } else if expected.effects != actual.effects {
                diffs.push(EntryDiff::new(expected.seq, DiffType::EffectsMismatch));
            }
        }

        for missing in self.entries.iter().skip(actual.entries.len()) {
            diffs.push(EntryDiff::new(missing.seq, DiffType::Missing));
        }
        for added in actual.entries.iter().skip(self.entries.len()) {
            diffs.push(EntryDiff::new(added.seq, DiffType::Added));
        }

        diffs
    }
}

/// Difference at one journal position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDiff {
    pub seq: usize,
    pub diff_type: DiffType,
}

impl EntryDiff {
    fn new(seq: usize, diff_type: DiffType) -> Self {
        Self { seq, diff_type }
    }
}

/// Type of difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffType {
    /// Entry missing in actual.
    Missing,
    /// Entry added in actual.
    Added,
    /// Different intents at the same position.
    IntentMismatch,
    /// One was applied, the other rejected, or the rejections differ.
    OutcomeMismatch,
    /// Both applied, with different effects.
    EffectsMismatch,
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiffType::Missing => "missing",
            DiffType::Added => "added",
            DiffType::IntentMismatch => "intent mismatch",
            DiffType::OutcomeMismatch => "outcome mismatch",
            DiffType::EffectsMismatch => "effects mismatch",
        };
        f.write_str(s)
    }
}

/// Records dispatched intents as they happen.
#[derive(Debug)]
pub struct JournalRecorder {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    start_time: Instant,
    entries: Vec<JournalEntry>,
}

impl JournalRecorder {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            started_at: Utc::now(),
            start_time: Instant::now(),
            entries: Vec::new(),
        }
    }

    /// Record an applied intent and its effects.
    pub fn record_applied<I, E>(&mut self, intent: &I, effects: &[E]) -> Result<(), serde_json::Error>
    where
        I: Serialize,
        E: Serialize,
    {
        let effects = effects
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.push(serde_json::to_value(intent)?, effects, None);
        Ok(())
    }

    /// Record a rejected intent.
    pub fn record_rejected<I: Serialize>(
        &mut self,
        intent: &I,
        error: impl fmt::Display,
    ) -> Result<(), serde_json::Error> {
        self.push(serde_json::to_value(intent)?, Vec::new(), Some(error.to_string()));
        Ok(())
    }

    fn push(&mut self, intent: serde_json::Value, effects: Vec<serde_json::Value>, error: Option<String>) {
        self.entries.push(JournalEntry {
            seq: self.entries.len(),
            at_ms: self.start_time.elapsed().as_millis() as u64,
            intent,
            effects,
            error,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the recording.
    pub fn finalize(self) -> Journal {
        Journal {
            version: Journal::VERSION,
            session_id: self.session_id,
            started_at: self.started_at,
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recorded(outcomes: Vec<(&str, Result<Vec<&str>, &str>)>) -> Journal {
        let mut recorder = JournalRecorder::new(SessionId::from_string("s"));
        for (intent, outcome) in &outcomes {
            let intent = json!({ "intent": intent });
            match outcome {
                Ok(effects) => recorder.record_applied(&intent, effects.as_slice()).unwrap(),
                Err(e) => recorder.record_rejected(&intent, e).unwrap(),
            }
        }
        recorder.finalize()
    }

    #[test]
    fn test_recording_round_trips_through_json() {
        let journal = recorded(vec![
            ("open_cart", Ok(vec![])),
            ("checkout", Ok(vec!["open_deep_link"])),
            ("add_to_cart", Err("Please select a size for product #1")),
        ]);
        assert_eq!(journal.version, Journal::VERSION);
        assert_eq!(journal.entries.len(), 3);
        assert_eq!(journal.entries[2].seq, 2);
        assert_eq!(journal.rejected_count(), 1);

        let parsed = Journal::from_json(&journal.to_json().unwrap()).unwrap();
        assert_eq!(parsed, journal);
        assert_eq!(parsed.intents().count(), 3);
    }

    #[test]
    fn test_diff_ignores_timing() {
        let a = recorded(vec![("open_cart", Ok(vec![])), ("checkout", Ok(vec!["open_deep_link"]))]);
        let mut b = a.clone();
        b.entries[0].at_ms += 50;
        assert!(a.diff(&b).is_empty());
    }

    #[test]
    fn test_diff_reports_changes() {
        let expected = recorded(vec![
            ("open_cart", Ok(vec![])),
            ("checkout", Ok(vec!["open_deep_link"])),
            ("add_to_cart", Ok(vec![])),
        ]);
        let actual = recorded(vec![
            ("open_cart", Ok(vec![])),
            ("checkout", Ok(vec![])),
            ("add_to_cart", Err("Size required")),
            ("close_cart", Ok(vec![])),
        ]);

        let diffs = expected.diff(&actual);
        assert_eq!(
            diffs,
            vec![
                EntryDiff::new(1, DiffType::EffectsMismatch),
                EntryDiff::new(2, DiffType::OutcomeMismatch),
                EntryDiff::new(3, DiffType::Added),
            ]
        );
        assert!(actual.diff(&expected).contains(&EntryDiff::new(3, DiffType::Missing)));
    }
}
