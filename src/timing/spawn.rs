// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fixed-interval spawn timer driven by elapsed-time ticks.

/// Accumulates elapsed milliseconds and reports when spawns are due
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnClock {
    /// Time between spawns
    interval_ms: u64,
    /// Time accumulated since the last spawn
    elapsed_ms: u64,
}

impl SpawnClock {
    /// Create a clock; an interval of 0 is treated as 1 ms
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    /// Spawn interval in milliseconds
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Advance by `elapsed_ms` and return how many spawns fell due.
    ///
    /// The remainder past the last due spawn carries over, so a sequence
    /// of short ticks spawns at the same instants as one long tick.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }

    /// Time remaining until the next spawn
    pub fn time_until_next(&self) -> u64 {
        self.interval_ms - self.elapsed_ms
    }

    /// Restart the interval from zero
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
