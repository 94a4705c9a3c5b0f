//! Zenith Pipeline - Coordinate Derivation
//!
//! Keeps the three pointing frames of one observer consistent:
//!
//! - **Frame**: observer, heading offset, viewport and time bundled as a
//!   [`SkyFrame`], the context every derivation runs in
//! - **Pipeline**: instance-owned target with recompute-on-read derived state
//! - **Observer state**: location, heading offset and device orientation,
//!   mutated only through [`ObserverMessage`]s
//! - **Input**: keyboard and compass events translated into messages
//!
//! ## Derivation chain
//!
//! ```text
//!  EquatorialCoordinate ──derive(observer, time)──► HorizontalCoordinate
//!          ▲                                               │
//!          │ inverse_derive                     remove heading offset
//!          │                                               ▼
//!  HorizontalCoordinate ◄──add heading offset── view direction ──project──► ScreenCoordinate
//!                                                    ▲                           │
//!                                                    └────────unproject──────────┘
//! ```

pub mod frame;
pub mod input;
pub mod observer_state;
pub mod orientation;
pub mod pipeline;

pub use frame::{SkyFrame, derive, inverse_derive};
pub use input::{InputAdapter, InputCommand, InputEvent, Key, NUDGE_STEP_DEGREES};
pub use observer_state::{ObserverMessage, ObserverState};
pub use orientation::DeviceOrientation;
pub use pipeline::CoordinatePipeline;

// Projection contracts come straight from the astrometry crate
pub use zenith_astrometry::{project, unproject};
