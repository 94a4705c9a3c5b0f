use chrono::Duration;
use serde::{Deserialize, Serialize};
use zenith_core::Timestamp;
use zenith_ports::Clock;

use crate::SystemClock;

/// Base tick quantum in milliseconds
pub const BASE_QUANTUM_MS: i64 = 10;

/// Ceiling for the scaled delay in milliseconds
pub const MAX_DELAY_MS: i64 = 100_000_000_000_000;

/// Virtual clock options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Starting datetime; wall-clock now when absent
    pub initial_datetime: Option<Timestamp>,
    /// Run the repeating timer
    pub is_live: bool,
    /// Timer period and base delay, in milliseconds
    pub tick_quantum_ms: i64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial_datetime: None,
            is_live: true,
            tick_quantum_ms: BASE_QUANTUM_MS,
        }
    }
}

/// Rate adjustments an operator can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateCommand {
    /// Speed up by a factor of 10
    Increment,
    /// Slow down by a factor of 10
    Decrement,
    /// Back to the base quantum, time untouched
    Freeze,
    /// Back to the base quantum and to wall-clock now
    Reset,
}

/// Observable clock state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockState {
    pub current_datetime: Timestamp,
    /// Active delay relative to the base quantum
    pub rate_multiplier: f64,
    /// Ticks advance simulated time instead of following the wall clock
    pub is_adjusting_rate: bool,
}

/// Simulated "now" advanced by ticks at an adjustable rate
///
/// Each tick moves time forward by the active delay. While no rate change has
/// happened the clock follows the wall clock (`wall now + delay`), which keeps it
/// free of drift. After the first rate change it enters seek mode and ticks add
/// the delay to the previous value instead, decoupling it from the wall clock.
///
/// The clock itself schedules nothing; see [`crate::LiveClock`] for the timer.
pub struct VirtualClock<C: Clock = SystemClock> {
    wall: C,
    current: Timestamp,
    base_ms: i64,
    delay_ms: i64,
    seeking: bool,
}

impl<C: Clock> VirtualClock<C> {
    /// Create a clock with the default 10 ms quantum
    ///
    /// # Arguments
    /// * `wall` - Wall-clock source used for live ticks and resets
    /// * `initial` - Optional starting time. If None, uses the wall clock's now.
    pub fn new(wall: C, initial: Option<Timestamp>) -> Self {
        Self::with_quantum(wall, initial, BASE_QUANTUM_MS)
    }

    /// Create a clock with a custom base quantum
    ///
    /// A non-positive quantum is invalid and replaced by [`BASE_QUANTUM_MS`].
    pub fn with_quantum(wall: C, initial: Option<Timestamp>, quantum_ms: i64) -> Self {
        let base_ms = if quantum_ms > 0 {
            quantum_ms
        } else {
            BASE_QUANTUM_MS
        };
        let current = initial.unwrap_or_else(|| wall.now());

        Self {
            wall,
            current,
            base_ms,
            delay_ms: base_ms,
            seeking: false,
        }
    }

    pub fn from_config(wall: C, config: &ClockConfig) -> Self {
        Self::with_quantum(wall, config.initial_datetime, config.tick_quantum_ms)
    }

    /// The authoritative simulated time
    pub fn now(&self) -> Timestamp {
        self.current
    }

    /// Explicit override, honored immediately
    pub fn set_datetime(&mut self, datetime: Timestamp) {
        self.current = datetime;
    }

    pub fn delay(&self) -> Duration {
        Duration::milliseconds(self.delay_ms)
    }

    pub fn delay_ms(&self) -> i64 {
        self.delay_ms
    }

    pub fn base_quantum(&self) -> Duration {
        Duration::milliseconds(self.base_ms)
    }

    pub fn rate_multiplier(&self) -> f64 {
        self.delay_ms as f64 / self.base_ms as f64
    }

    pub fn is_adjusting_rate(&self) -> bool {
        self.seeking
    }

    pub fn state(&self) -> ClockState {
        ClockState {
            current_datetime: self.current,
            rate_multiplier: self.rate_multiplier(),
            is_adjusting_rate: self.seeking,
        }
    }

    pub fn wall_clock(&self) -> &C {
        &self.wall
    }

    /// Multiply the delay by 10, up to [`MAX_DELAY_MS`]
    pub fn increment_rate(&mut self) {
        self.seeking = true;
        self.snap_invalid_delay();

        if self.delay_ms < MAX_DELAY_MS {
            self.delay_ms = self.delay_ms.saturating_mul(10).min(MAX_DELAY_MS);
        }
        log::debug!("clock delay raised to {} ms", self.delay_ms);
    }

    /// Divide the delay by 10, down to the base quantum
    pub fn decrement_rate(&mut self) {
        self.seeking = true;
        self.snap_invalid_delay();

        if self.delay_ms > self.base_ms {
            self.delay_ms = (self.delay_ms / 10).max(self.base_ms);
        }
        log::debug!("clock delay lowered to {} ms", self.delay_ms);
    }

    /// Return to the base quantum without touching the current time
    pub fn freeze_rate(&mut self) {
        self.delay_ms = self.base_ms;
        log::debug!("clock delay frozen at {} ms", self.delay_ms);
    }

    /// Return to the base quantum and to wall-clock now, following it again
    pub fn reset_rate(&mut self) {
        self.delay_ms = self.base_ms;
        self.seeking = false;
        self.current = self.wall.now();
        log::info!("clock reset to wall time {}", self.current);
    }

    pub fn apply(&mut self, command: RateCommand) {
        match command {
            RateCommand::Increment => self.increment_rate(),
            RateCommand::Decrement => self.decrement_rate(),
            RateCommand::Freeze => self.freeze_rate(),
            RateCommand::Reset => self.reset_rate(),
        }
    }

    /// One timer fire
    pub fn tick(&mut self) -> Timestamp {
        let delay = self.delay();
        let origin = if self.seeking {
            self.current
        } else {
            self.wall.now()
        };

        match origin.checked_add_signed(delay) {
            Some(next) => self.current = next,
            None => log::warn!(
                "clock advance of {} ms from {} is out of range, holding time",
                self.delay_ms,
                origin
            ),
        }
        self.current
    }

    fn snap_invalid_delay(&mut self) {
        if self.delay_ms <= 0 {
            self.delay_ms = self.base_ms;
        }
    }
}
