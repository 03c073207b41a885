//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::TICKS_PER_SECOND;

/// Paces the frame loop
pub trait FrameClock {
    /// Block until the next tick boundary
    fn wait_next_tick(&mut self);

    /// Blocking pause requested by the simulation
    fn delay(&mut self, ms: u32);

    /// Milliseconds of game time elapsed so far
    fn elapsed_ms(&self) -> u64;
}

/// Wall-clock pacing at a fixed rate
#[derive(Debug)]
pub struct SystemClock {
    tick: Duration,
    started: Instant,
    next: Instant,
}

impl SystemClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let now = Instant::now();
        let tick = Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            tick,
            started: now,
            next: now + tick,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND)
    }
}

impl FrameClock for SystemClock {
    fn wait_next_tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.tick;
        } else {
            // Fell behind: drop the missed ticks instead of bursting
            self.next = now + self.tick;
        }
    }

    fn delay(&mut self, ms: u32) {
        let pause = Duration::from_millis(u64::from(ms));
        thread::sleep(pause);
        self.next = Instant::now() + self.tick;
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

/// Simulated time that never sleeps, for tests and batch runs
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub ticks: u64,
    pub delayed_ms: u64,
    ticks_per_second: u32,
}

impl ManualClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks: 0,
            delayed_ms: 0,
            ticks_per_second: ticks_per_second.max(1),
        }
    }
}

impl FrameClock for ManualClock {
    fn wait_next_tick(&mut self) {
        self.ticks += 1;
    }

    fn delay(&mut self, ms: u32) {
        self.delayed_ms += u64::from(ms);
    }

    fn elapsed_ms(&self) -> u64 {
        let rate = u64::from(self.ticks_per_second.max(1));
        self.ticks * 1000 / rate + self.delayed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_counts_time() {
        let mut clock = ManualClock::new(60);
        for _ in 0..120 {
            clock.wait_next_tick();
        }
        clock.delay(500);
        assert_eq!(clock.ticks, 120);
        assert_eq!(clock.elapsed_ms(), 2500);
    }

    #[test]
    fn test_system_clock_paces_ticks() {
        let mut clock = SystemClock::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait_next_tick();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
