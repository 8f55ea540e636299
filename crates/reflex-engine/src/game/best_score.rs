//! Best score persistence on top of a raw string store.
//!
//! Anything that is not a plain non-negative integer reads as "no best
//! score"; storage failures are logged and otherwise ignored.

use serde::Serialize;

use crate::api::host::ScoreStore;

/// Parse a stored value. Surrounding whitespace is tolerated.
pub fn parse(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

pub fn read(store: &dyn ScoreStore, key: &str) -> Option<u32> {
    let raw = store.get(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        log::warn!("ignoring unreadable best score {raw:?} under {key:?}");
    }
    parsed
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub score: u32,
    /// Best score after this run.
    pub best: Option<u32>,
    pub new_best: bool,
}

/// Persist `score` if it beats the stored best.
pub fn record(store: &mut dyn ScoreStore, key: &str, score: u32) -> RunSummary {
    let previous = read(store, key);
    if score <= previous.unwrap_or(0) {
        return RunSummary {
            score,
            best: previous,
            new_best: false,
        };
    }
    match store.set(key, &score.to_string()) {
        Ok(()) => log::info!("new best score {score} (was {previous:?})"),
        Err(err) => log::warn!("could not save best score {score}: {err}"),
    }
    RunSummary {
        score,
        best: Some(score),
        new_best: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::host::MemoryScoreStore;
    use crate::error::ReflexError;

    const KEY: &str = "best";

    #[test]
    fn parse_accepts_plain_integers() {
        assert_eq!(parse("12"), Some(12));
        assert_eq!(parse(" 3\n"), Some(3));
        assert_eq!(parse("0"), Some(0));
    }

    #[test]
    fn parse_rejects_garbage() {
        for raw in ["", "abc", "-4", "3.5", "12abc", "NaN"] {
            assert_eq!(parse(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn corrupted_value_counts_as_none() {
        let mut store = MemoryScoreStore::new().with_value(KEY, "garbage");
        assert_eq!(read(&store, KEY), None);
        let summary = record(&mut store, KEY, 2);
        assert!(summary.new_best);
        assert_eq!(read(&store, KEY), Some(2));
    }

    #[test]
    fn lower_or_equal_score_keeps_best() {
        let mut store = MemoryScoreStore::new().with_value(KEY, "10");
        for score in [3, 10] {
            let summary = record(&mut store, KEY, score);
            assert!(!summary.new_best);
            assert_eq!(summary.best, Some(10));
        }
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn zero_score_is_not_written() {
        let mut store = MemoryScoreStore::new();
        let summary = record(&mut store, KEY, 0);
        assert_eq!(summary.best, None);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn higher_score_written_once() {
        let mut store = MemoryScoreStore::new().with_value(KEY, "4");
        let summary = record(&mut store, KEY, 5);
        assert!(summary.new_best);
        assert_eq!(store.writes(), 1);
        assert_eq!(store.get(KEY).as_deref(), Some("5"));
    }

    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), ReflexError> {
            Err(ReflexError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn storage_failure_is_swallowed() {
        let summary = record(&mut BrokenStore, KEY, 9);
        assert_eq!(summary.score, 9);
    }
}
