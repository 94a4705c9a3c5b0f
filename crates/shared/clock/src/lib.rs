//! Zenith Clock Infrastructure
//!
//! Provides the time base of the pointing system:
//!
//! ## Clock Hierarchy
//!
//! ```text
//! Wall clock (SystemClock in production, ManualClock in tests)
//!     │
//!     └── VirtualClock (simulated "now", delay scaled by 10x steps)
//!             │
//!             └── LiveClock (shared handle + repeating timer task)
//!                     ▲
//!                     │ ticks
//!               TickSource (IntervalTicks, ManualTicks)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use zenith_clock::{LiveClock, SystemClock, VirtualClock};
//!
//! let clock = LiveClock::new(VirtualClock::new(SystemClock::new(), None));
//! clock.start_interval().await;
//!
//! clock.increment_rate().await; // fast-forward
//! clock.freeze_rate().await;    // back to the base quantum
//! clock.reset_rate().await;     // back to wall-clock now
//! clock.stop();
//! ```

mod live;
mod system;
mod ticker;
mod virtual_clock;

pub use live::LiveClock;
pub use system::{ManualClock, SystemClock};
pub use ticker::{IntervalTicks, ManualTickDriver, ManualTicks, manual_ticks};
pub use virtual_clock::{
    BASE_QUANTUM_MS, ClockConfig, ClockState, MAX_DELAY_MS, RateCommand, VirtualClock,
};

// Re-export the ports for convenience
pub use zenith_ports::{Clock, TickSource};
