//! Zenith Slew - Simulated Telescope Motion
//!
//! Animates the pointing position across the projection surface:
//!
//! ```text
//!            slew_to                 step == total
//!   Idle ─────────────► Slewing ──────────────────► Idle
//!    ▲                   │    ▲
//!    │     reset_slew    │    │ slew_to (restart from current position)
//!    └───────────────────┘    └──┘
//! ```
//!
//! Stepping is driven by a [`zenith_ports::TickSource`]; a frame timer in
//! production, a manual driver in tests.

pub mod animator;
pub mod simulator;

pub use animator::{SlewOutcome, animate};
pub use simulator::{AxisDirection, SlewConfig, SlewDirection, SlewSimulator, SlewState};
