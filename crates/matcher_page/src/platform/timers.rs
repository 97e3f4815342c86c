//! Virtual timers: nothing fires until the host advances the clock.

use std::collections::BTreeMap;
use std::time::Duration;

use matcher_core::TimerId;

/// Monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves the clock forward; never backwards.
    pub fn set(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    Timer(TimerId),
    ProcessingTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Once(TimerId),
    Interval { period: Duration },
}

/// Pending timers ordered by deadline, then by scheduling order.
#[derive(Debug, Default)]
pub struct TimerWheel {
    clock: DeterministicClock,
    seq: u64,
    entries: BTreeMap<(Duration, u64), Entry>,
    ticker: Option<(Duration, u64)>,
}

impl TimerWheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, deadline: Duration, entry: Entry) -> (Duration, u64) {
        self.seq += 1;
        let key = (deadline, self.seq);
        self.entries.insert(key, entry);
        key
    }

    pub fn schedule_once(&mut self, timer: TimerId, delay: Duration) {
        let deadline = self.now() + delay;
        self.insert(deadline, Entry::Once(timer));
    }

    /// Starts the processing ticker, replacing any running one.
    pub fn start_ticker(&mut self, period: Duration) {
        self.stop_ticker();
        let deadline = self.now() + period;
        self.ticker = Some(self.insert(deadline, Entry::Interval { period }));
    }

    pub fn stop_ticker(&mut self) -> bool {
        match self.ticker.take() {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Intervals are re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<Due> {
        let (&key, &entry) = self.entries.iter().next()?;
        let (deadline, _) = key;
        if deadline > until {
            return None;
        }
        self.entries.remove(&key);
        self.clock.set(deadline);
        match entry {
            Entry::Once(timer) => Some(Due::Timer(timer)),
            Entry::Interval { period } => {
                self.ticker = Some(self.insert(deadline + period, entry));
                Some(Due::ProcessingTick)
            }
        }
    }

    /// Moves the clock to `until` once every due timer has been popped.
    pub fn settle(&mut self, until: Duration) {
        self.clock.set(until);
    }
}
