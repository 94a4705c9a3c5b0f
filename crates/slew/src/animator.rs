use zenith_core::Pointing;
use zenith_pipeline::SkyFrame;
use zenith_ports::TickSource;

use crate::simulator::SlewSimulator;

/// How a frame loop ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlewOutcome {
    /// Reached the target after this many frames
    Completed { frames: u32, pointing: Pointing },
    /// Nothing to animate
    Idle,
    /// The tick source ran dry mid-slew
    Interrupted { frames: u32 },
}

/// Run the frame loop until the slew in flight completes
///
/// `frame` is awaited for a fresh [`SkyFrame`] before every step so the
/// pointing follows the current time and heading. Position update and
/// re-derivation both finish before the next tick is awaited.
pub async fn animate<T, F>(sim: &mut SlewSimulator, ticks: &mut T, mut frame: F) -> SlewOutcome
where
    T: TickSource + ?Sized,
    F: AsyncFnMut() -> SkyFrame,
{
    if !sim.is_slewing() {
        return SlewOutcome::Idle;
    }

    let mut frames = 0;
    while ticks.tick().await {
        let current = frame().await;
        let Some(pointing) = sim.advance(&current) else {
            break;
        };
        frames += 1;

        if !sim.is_slewing() {
            return SlewOutcome::Completed { frames, pointing };
        }
    }

    log::warn!("slew frame loop stopped after {} frames", frames);
    SlewOutcome::Interrupted { frames }
}
