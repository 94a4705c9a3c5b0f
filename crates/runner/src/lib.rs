//! Zenith Runner - Observatory Session
//!
//! Wires the pointing core together for one telescope:
//!
//! - **Config**: JSON option records for every component
//! - **Observatory**: live clock, observer state, coordinate pipeline and
//!   slew simulator behind one owner, with optional mount mirroring
//!
//! ## Architecture
//!
//! ```text
//!   keys / compass            operator commands
//!         │                          │
//!   ┌─────▼──────┐            ┌──────▼──────┐
//!   │InputAdapter│            │  set_target │
//!   └─────┬──────┘            │  slew_to    │
//!         │ messages          └──────┬──────┘
//!   ┌─────▼─────────────────────────▼──────┐        ┌──────────────┐
//!   │              Observatory             │◄──now──│  LiveClock   │
//!   │  ObserverState  CoordinatePipeline   │        └──────▲───────┘
//!   │               SlewSimulator          │               │ ticks
//!   └─────┬────────────────────────────────┘        ┌──────┴───────┐
//!         │ goto (fire-and-forget)                   │ TickSource   │
//!   ┌─────▼──────┐                                   └──────────────┘
//!   │MountControl│
//!   └────────────┘
//! ```

pub mod config;
pub mod error;
pub mod observatory;

// Re-export main types
pub use config::{ObservatoryConfig, load_config, load_config_from_str};
pub use error::{ConfigError, PointingError};
pub use observatory::Observatory;
