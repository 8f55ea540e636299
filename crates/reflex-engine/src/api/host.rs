//! Capabilities the engine calls out to: timers, speech and score storage.
//!
//! The browser bridge implements these on top of `web-sys`; the headless
//! implementations here back native embedding and tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::api::types::{RoundId, TimerHandle};
use crate::core::time::ManualScheduler;
use crate::error::ReflexError;

/// One-shot timers. When a timer fires the host must hand the `RoundId` it
/// was armed with back to `App::on_round_timeout`.
pub trait Scheduler {
    fn set_timeout(&mut self, delay_ms: u32, round: RoundId) -> TimerHandle;

    /// Cancel a timer. Unknown or already-fired handles are ignored.
    fn clear_timeout(&mut self, handle: TimerHandle);
}

/// Fire-and-forget spoken (or otherwise announced) instructions.
pub trait Announcer {
    fn announce(&mut self, text: &str, locale: Option<&str>) -> Result<(), ReflexError>;
}

/// Raw key/value storage for the best score. Parsing is the engine's job.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ReflexError>;
}

/// Everything the app needs from its environment.
pub trait Host {
    fn scheduler(&mut self) -> &mut dyn Scheduler;
    fn announcer(&mut self) -> &mut dyn Announcer;
    fn store(&self) -> &dyn ScoreStore;
    fn store_mut(&mut self) -> &mut dyn ScoreStore;
}

/// In-memory score storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    values: HashMap<String, String>,
    reads: Cell<usize>,
    writes: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a raw value, e.g. to simulate corrupted storage.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// How many `get` calls were made.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// How many successful `set` calls were made.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ReflexError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// An announcement as the announcer received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub locale: Option<String>,
}

/// Announcer that logs instructions and keeps them for inspection.
#[derive(Debug, Default, Clone)]
pub struct LogAnnouncer {
    spoken: Vec<Announcement>,
}

impl LogAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> &[Announcement] {
        &self.spoken
    }

    pub fn last(&self) -> Option<&Announcement> {
        self.spoken.last()
    }
}

impl Announcer for LogAnnouncer {
    fn announce(&mut self, text: &str, locale: Option<&str>) -> Result<(), ReflexError> {
        log::info!("announce: {text}");
        self.spoken.push(Announcement {
            text: text.to_string(),
            locale: locale.map(str::to_string),
        });
        Ok(())
    }
}

/// Host with a virtual clock, in-memory storage and a logging announcer.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub scheduler: ManualScheduler,
    pub announcer: LogAnnouncer,
    pub store: MemoryScoreStore,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MemoryScoreStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }
}

impl Host for HeadlessHost {
    fn scheduler(&mut self) -> &mut dyn Scheduler {
        &mut self.scheduler
    }

    fn announcer(&mut self) -> &mut dyn Announcer {
        &mut self.announcer
    }

    fn store(&self) -> &dyn ScoreStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut dyn ScoreStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryScoreStore::new().with_value("k", "abc");
        assert_eq!(store.get("k").as_deref(), Some("abc"));
        assert_eq!(store.writes(), 0);
        store.set("k", "7").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("7"));
        assert_eq!(store.writes(), 1);
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn log_announcer_records() {
        let mut a = LogAnnouncer::new();
        a.announce("Tap it!", Some("en-US")).unwrap();
        let last = a.last().unwrap();
        assert_eq!(last.text, "Tap it!");
        assert_eq!(last.locale.as_deref(), Some("en-US"));
    }
}
