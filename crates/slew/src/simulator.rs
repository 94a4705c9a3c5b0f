use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use zenith_core::{Pointing, ScreenCoordinate};
use zenith_pipeline::SkyFrame;

/// Default number of frames per slew
pub const DEFAULT_STEPS: u32 = 100;

const NOTIFICATION_CAPACITY: usize = 256;

/// Slew animation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlewConfig {
    /// Frames from start to target; zero is treated as one
    pub steps: u32,
    /// Frame timer period in milliseconds
    pub frame_interval_ms: u64,
}

impl Default for SlewConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            frame_interval_ms: 16,
        }
    }
}

/// Travel direction along one screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisDirection {
    Negative,
    #[default]
    Still,
    Positive,
}

impl AxisDirection {
    fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            AxisDirection::Positive
        } else if delta < 0.0 {
            AxisDirection::Negative
        } else {
            AxisDirection::Still
        }
    }

    pub fn sign(&self) -> i8 {
        match self {
            AxisDirection::Negative => -1,
            AxisDirection::Still => 0,
            AxisDirection::Positive => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlewDirection {
    pub x: AxisDirection,
    pub y: AxisDirection,
}

/// Snapshot of the animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlewState {
    pub is_slewing: bool,
    pub position: ScreenCoordinate,
    pub step_index: u32,
    pub total_steps: u32,
}

/// Linear screen-space slew between two positions
///
/// The position moves by `(target - origin) / steps` per [`advance`] and lands
/// exactly on the target at the last step. Each step re-derives the pointing
/// under the new position and broadcasts it to subscribers.
///
/// [`advance`]: SlewSimulator::advance
pub struct SlewSimulator {
    config: SlewConfig,
    slewing: bool,
    origin: ScreenCoordinate,
    target: ScreenCoordinate,
    position: ScreenCoordinate,
    direction: SlewDirection,
    step_index: u32,
    total_steps: u32,
    pointing: Pointing,
    tx: broadcast::Sender<Pointing>,
}

impl SlewSimulator {
    /// Create an idle simulator resting at the frame's center
    pub fn new(config: SlewConfig, frame: &SkyFrame) -> Self {
        let (tx, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        let center = frame.viewport.center();

        Self {
            config,
            slewing: false,
            origin: center,
            target: center,
            position: center,
            direction: SlewDirection::default(),
            step_index: 0,
            total_steps: config.steps.max(1),
            pointing: frame.pointing_at(center),
            tx,
        }
    }

    pub fn config(&self) -> &SlewConfig {
        &self.config
    }

    pub fn is_slewing(&self) -> bool {
        self.slewing
    }

    pub fn position(&self) -> ScreenCoordinate {
        self.position
    }

    pub fn target(&self) -> ScreenCoordinate {
        self.target
    }

    pub fn direction(&self) -> SlewDirection {
        self.direction
    }

    pub fn step_index(&self) -> u32 {
        self.step_index
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Pointing under the current position as of the last step or reset
    pub fn pointing(&self) -> Pointing {
        self.pointing
    }

    pub fn state(&self) -> SlewState {
        SlewState {
            is_slewing: self.slewing,
            position: self.position,
            step_index: self.step_index,
            total_steps: self.total_steps,
        }
    }

    /// Receive the pointing after every step and reset
    pub fn subscribe(&self) -> broadcast::Receiver<Pointing> {
        self.tx.subscribe()
    }

    /// Start moving toward `target`
    ///
    /// An animation in flight is abandoned and the new one starts from the
    /// current position.
    pub fn slew_to(&mut self, target: ScreenCoordinate) {
        if self.slewing {
            log::info!(
                "slew to ({}, {}) cancelled at step {}/{}",
                self.target.x,
                self.target.y,
                self.step_index,
                self.total_steps
            );
        }

        self.origin = self.position;
        self.target = target;
        self.direction = SlewDirection {
            x: AxisDirection::from_delta(target.x - self.origin.x),
            y: AxisDirection::from_delta(target.y - self.origin.y),
        };
        self.step_index = 0;
        self.total_steps = self.config.steps.max(1);
        self.slewing = true;

        log::info!(
            "slewing from ({}, {}) to ({}, {}) in {} steps",
            self.origin.x,
            self.origin.y,
            target.x,
            target.y,
            self.total_steps
        );
    }

    /// Stop any animation and recenter on the viewport midpoint
    pub fn reset_slew(&mut self, frame: &SkyFrame) -> Pointing {
        let center = frame.viewport.center();

        self.slewing = false;
        self.origin = center;
        self.target = center;
        self.position = center;
        self.direction = SlewDirection::default();
        self.step_index = 0;

        log::debug!("slew reset to center ({}, {})", center.x, center.y);
        self.publish(frame)
    }

    /// Stop any animation and rest at `position` without notifying
    ///
    /// Used when the pointing was written directly rather than by a slew, so
    /// the next slew starts from what is actually shown.
    pub fn settle_at(&mut self, position: ScreenCoordinate, frame: &SkyFrame) -> Pointing {
        self.slewing = false;
        self.origin = position;
        self.target = position;
        self.position = position;
        self.direction = SlewDirection::default();
        self.step_index = 0;
        self.pointing = frame.pointing_at(position);
        self.pointing
    }

    /// Take one animation step; `None` while idle
    pub fn advance(&mut self, frame: &SkyFrame) -> Option<Pointing> {
        if !self.slewing {
            return None;
        }

        self.step_index += 1;
        self.position = if self.step_index >= self.total_steps {
            self.target
        } else {
            let fraction = f64::from(self.step_index) / f64::from(self.total_steps);
            ScreenCoordinate::new(
                self.origin.x + (self.target.x - self.origin.x) * fraction,
                self.origin.y + (self.target.y - self.origin.y) * fraction,
            )
        };

        let pointing = self.publish(frame);

        if self.step_index >= self.total_steps {
            self.slewing = false;
            log::info!(
                "slew complete at ra {:.4} dec {:.4}",
                pointing.ra,
                pointing.dec
            );
        }
        Some(pointing)
    }

    fn publish(&mut self, frame: &SkyFrame) -> Pointing {
        self.pointing = frame.pointing_at(self.position);
        // No subscribers is fine
        let _ = self.tx.send(self.pointing);
        self.pointing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use zenith_core::{HeadingOffset, Observer, Viewport};

    fn frame() -> SkyFrame {
        SkyFrame::new(
            Observer::new(-155.468094, 19.820611, 0.0),
            HeadingOffset::default(),
            Viewport::new(800.0, 600.0),
            Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_starts_idle_at_center() {
        let sim = SlewSimulator::new(SlewConfig::default(), &frame());
        assert!(!sim.is_slewing());
        assert_eq!(sim.position(), ScreenCoordinate::new(400.0, 300.0));
        assert!((sim.pointing().alt - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_slew_to_width_lands_exactly() {
        let frame = frame();
        let mut sim = SlewSimulator::new(SlewConfig::default(), &frame);

        sim.slew_to(ScreenCoordinate::new(800.0, 300.0));
        assert!(sim.is_slewing());

        let mut steps = 0;
        while sim.advance(&frame).is_some() {
            steps += 1;
        }

        assert_eq!(steps, 100);
        assert!(!sim.is_slewing());
        assert_eq!(sim.position().x, 800.0);
        assert_eq!(sim.position().y, 300.0);
    }

    #[test]
    fn test_steps_are_linear() {
        let frame = frame();
        let mut sim = SlewSimulator::new(
            SlewConfig {
                steps: 4,
                ..SlewConfig::default()
            },
            &frame,
        );
        sim.slew_to(ScreenCoordinate::new(0.0, 300.0));

        sim.advance(&frame);
        assert_eq!(sim.position().x, 300.0);
        sim.advance(&frame);
        assert_eq!(sim.position().x, 200.0);
        assert_eq!(sim.step_index(), 2);
    }

    #[test]
    fn test_direction_tracks_each_axis() {
        let mut sim = SlewSimulator::new(SlewConfig::default(), &frame());

        sim.slew_to(ScreenCoordinate::new(100.0, 300.0));
        assert_eq!(sim.direction().x, AxisDirection::Negative);
        assert_eq!(sim.direction().y, AxisDirection::Still);
        assert_eq!(sim.direction().y.sign(), 0);

        sim.slew_to(ScreenCoordinate::new(400.0, 600.0));
        assert_eq!(sim.direction().x, AxisDirection::Positive);
        assert_eq!(sim.direction().y, AxisDirection::Positive);
    }

    #[test]
    fn test_slew_to_while_slewing_restarts_from_current_position() {
        let frame = frame();
        let mut sim = SlewSimulator::new(
            SlewConfig {
                steps: 10,
                ..SlewConfig::default()
            },
            &frame,
        );
        sim.slew_to(ScreenCoordinate::new(800.0, 300.0));
        for _ in 0..5 {
            sim.advance(&frame);
        }
        let midway = sim.position();
        assert_eq!(midway.x, 600.0);

        sim.slew_to(ScreenCoordinate::new(600.0, 0.0));

        assert!(sim.is_slewing());
        assert_eq!(sim.step_index(), 0);
        assert_eq!(sim.direction().x, AxisDirection::Still);
        sim.advance(&frame);
        assert_eq!(sim.position().x, 600.0);
        assert!((sim.position().y - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_steps_completes_in_one_frame() {
        let frame = frame();
        let mut sim = SlewSimulator::new(
            SlewConfig {
                steps: 0,
                ..SlewConfig::default()
            },
            &frame,
        );
        sim.slew_to(ScreenCoordinate::new(10.0, 20.0));
        assert!(sim.advance(&frame).is_some());
        assert!(!sim.is_slewing());
        assert_eq!(sim.position(), ScreenCoordinate::new(10.0, 20.0));
    }

    #[test]
    fn test_reset_recenters_and_notifies() {
        let frame = frame();
        let mut sim = SlewSimulator::new(SlewConfig::default(), &frame);
        let mut rx = sim.subscribe();

        sim.slew_to(ScreenCoordinate::new(0.0, 0.0));
        sim.advance(&frame);
        sim.reset_slew(&frame);

        assert!(!sim.is_slewing());
        assert_eq!(sim.position(), frame.viewport.center());
        assert!(sim.advance(&frame).is_none());

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert!(first.alt < 90.0);
        assert!((second.alt - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_pointing_matches_frame() {
        let frame = frame();
        let mut sim = SlewSimulator::new(SlewConfig::default(), &frame);
        sim.slew_to(ScreenCoordinate::new(600.0, 100.0));

        let pointing = sim.advance(&frame).unwrap();

        assert_eq!(pointing, frame.pointing_at(sim.position()));
    }

    #[test]
    fn test_settle_at_stops_and_becomes_origin() {
        let frame = frame();
        let mut sim = SlewSimulator::new(SlewConfig::default(), &frame);
        let mut rx = sim.subscribe();
        sim.slew_to(ScreenCoordinate::new(0.0, 0.0));

        let resting = ScreenCoordinate::new(520.0, 410.0);
        let pointing = sim.settle_at(resting, &frame);

        assert!(!sim.is_slewing());
        assert_eq!(sim.position(), resting);
        assert_eq!(pointing, frame.pointing_at(resting));
        assert!(rx.try_recv().is_err());

        sim.slew_to(ScreenCoordinate::new(521.0, 410.0));
        let first = sim.advance(&frame).unwrap();
        assert!((sim.position().x - 520.01).abs() < 1e-9);
        assert_eq!(sim.direction().y, AxisDirection::Still);
        assert_eq!(first, frame.pointing_at(sim.position()));
    }
}
