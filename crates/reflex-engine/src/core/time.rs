use crate::api::host::Scheduler;
use crate::api::types::{RoundId, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRound {
    round: RoundId,
    handle: TimerHandle,
}

/// Holds at most one outstanding round timeout.
///
/// Each arm bumps a generation counter and the timeout carries that
/// generation back as its `RoundId`. A timeout only counts if it matches the
/// pending round, so late firings after a cancel are ignored even when the
/// host could not actually cancel the underlying timer.
#[derive(Debug, Default)]
pub struct RoundTimer {
    generation: u64,
    pending: Option<PendingRound>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending round and arm a new one.
    pub fn arm(&mut self, scheduler: &mut dyn Scheduler, delay_ms: u32) -> RoundId {
        self.cancel(scheduler);
        self.generation += 1;
        let round = RoundId(self.generation);
        let handle = scheduler.set_timeout(delay_ms, round);
        self.pending = Some(PendingRound { round, handle });
        round
    }

    /// Cancel the pending round. Safe to call repeatedly.
    /// Returns whether anything was pending.
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        match self.pending.take() {
            Some(pending) => {
                scheduler.clear_timeout(pending.handle);
                true
            }
            None => false,
        }
    }

    /// Consume a fired timeout. Returns true only for the pending round.
    pub fn fire(&mut self, round: RoundId) -> bool {
        match self.pending {
            Some(pending) if pending.round == round => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> Option<RoundId> {
        self.pending.map(|p| p.round)
    }
}

#[derive(Debug, Clone, Copy)]
struct VirtualTimer {
    handle: TimerHandle,
    round: RoundId,
    due_ms: u64,
}

/// Deterministic scheduler driven by an explicit virtual clock.
/// Used headless and in tests in place of `window.setTimeout`.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_handle: i32,
    timers: Vec<VirtualTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of armed, uncancelled timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Absolute time of the earliest armed timer.
    pub fn next_due(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_ms).min()
    }

    /// Move the clock forward and return the rounds whose timers came due,
    /// earliest first. Fired timers are removed.
    pub fn advance(&mut self, ms: u64) -> Vec<RoundId> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due: Vec<VirtualTimer> = Vec::new();
        self.timers.retain(|t| {
            if t.due_ms <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.due_ms, t.handle.0));
        due.into_iter().map(|t| t.round).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&mut self, delay_ms: u32, round: RoundId) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.timers.push(VirtualTimer {
            handle,
            round,
            due_ms: self.now_ms + delay_ms as u64,
        });
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
