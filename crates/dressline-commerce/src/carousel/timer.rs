//! Cancellable auto-advance timer.
//!
//! One timer handle per carousel. Every schedule aborts the previous task, so
//! a tick can never carry bounds from before a hover or resize transition.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::TimerCommand;

/// A tick delivered to the loop that owns the carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Owns at most one running tick task.
///
/// Must be driven from inside a tokio runtime.
#[derive(Debug)]
pub struct AutoAdvanceTimer {
    sender: mpsc::UnboundedSender<Tick>,
    task: Option<JoinHandle<()>>,
}

impl AutoAdvanceTimer {
    /// Create a stopped timer and the receiver its ticks arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender, task: None }, receiver)
    }

    /// Carry out a command from the carousel.
    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Schedule {
                generation,
                interval,
            } => self.schedule(generation, interval),
            TimerCommand::Cancel => self.cancel(),
        }
    }

    /// Replace any running task with one ticking every `interval`, first tick
    /// one full interval from now.
    pub fn schedule(&mut self, generation: u64, interval: Duration) {
        self.cancel();
        let sender = self.sender.clone();
        tracing::debug!(generation, interval_ms = interval.as_millis() as u64, "Scheduling auto-advance");
        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if sender.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    /// Stop the running task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Cancelled auto-advance");
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.task.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }
}

impl Drop for AutoAdvanceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
