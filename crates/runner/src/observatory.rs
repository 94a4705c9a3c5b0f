//! Observatory - one telescope's pointing session
//!
//! Owns every piece of mutable pointing state. Inputs arrive as method calls,
//! derived coordinates are re-read through the pipeline, and the mount only
//! ever receives fire-and-forget gotos.

use std::sync::Arc;
use tokio::sync::broadcast;
use zenith_clock::{ClockState, LiveClock, RateCommand, SystemClock, VirtualClock};
use zenith_core::{
    EquatorialCoordinate, Observer, Pointing, ScreenCoordinate, Timestamp, Viewport,
};
use zenith_gateway::dispatch;
use zenith_pipeline::{
    CoordinatePipeline, InputAdapter, InputCommand, InputEvent, ObserverMessage, ObserverState,
    SkyFrame,
};
use zenith_ports::{Clock, MountControl, PermissionPrompt, TickSource};
use zenith_slew::{SlewOutcome, SlewSimulator, animate};

use crate::config::ObservatoryConfig;
use crate::error::PointingError;

pub struct Observatory<C: Clock + 'static = SystemClock> {
    clock: LiveClock<C>,
    is_live: bool,
    state: ObserverState,
    viewport: Viewport,
    input: InputAdapter,
    pipeline: CoordinatePipeline,
    slew: SlewSimulator,
    mount: Option<Arc<dyn MountControl>>,
    mirror_slews: bool,
}

impl Observatory<SystemClock> {
    pub fn new(config: &ObservatoryConfig) -> Self {
        Self::with_wall_clock(config, SystemClock::new())
    }
}

impl<C: Clock + 'static> Observatory<C> {
    /// Build a session reading wall time from `wall`
    ///
    /// Nothing runs until [`start`](Observatory::start).
    pub fn with_wall_clock(config: &ObservatoryConfig, wall: C) -> Self {
        let clock = VirtualClock::from_config(wall, &config.clock);
        let state = ObserverState::from_sources(&config.observer);
        let frame = SkyFrame::new(state.observer, state.offset, config.viewport, clock.now());

        let mut slew = SlewSimulator::new(config.slew, &frame);
        let target = config
            .target
            .unwrap_or_else(|| slew.pointing().equatorial());
        let pipeline = CoordinatePipeline::new(target, frame);
        if config.target.is_some() {
            settle(&mut slew, &pipeline);
        }

        Self {
            clock: LiveClock::new(clock),
            is_live: config.clock.is_live,
            state,
            viewport: config.viewport,
            input: InputAdapter,
            pipeline,
            slew,
            mount: None,
            mirror_slews: config.mirror_slews,
        }
    }

    /// Attach the mount that mirrored slews are sent to
    pub fn with_mount(mut self, mount: Arc<dyn MountControl>) -> Self {
        self.mount = Some(mount);
        self
    }

    /// Start the clock timer when configured live
    pub async fn start(&self) {
        if self.is_live {
            self.clock.start_interval().await;
        }
    }

    /// Drive the clock from an explicit tick source instead of its timer
    pub fn start_with<T: TickSource + 'static>(&self, ticks: T) {
        self.clock.start(ticks);
    }

    /// Stop the clock timer; safe to call repeatedly
    pub fn stop(&self) {
        self.clock.stop();
    }

    pub fn clock(&self) -> &LiveClock<C> {
        &self.clock
    }

    pub async fn now(&self) -> Timestamp {
        self.clock.now().await
    }

    pub async fn clock_state(&self) -> ClockState {
        self.clock.state().await
    }

    pub async fn apply_rate(&self, command: RateCommand) {
        self.clock.apply(command).await;
    }

    pub async fn set_datetime(&mut self, datetime: Timestamp) {
        self.clock.set_datetime(datetime).await;
        self.pipeline.set_datetime(datetime);
    }

    pub fn observer_state(&self) -> &ObserverState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frame as of the clock's current time
    pub async fn frame(&self) -> SkyFrame {
        SkyFrame::new(
            self.state.observer,
            self.state.offset,
            self.viewport,
            self.now().await,
        )
    }

    /// Bring the pipeline up to date with the clock and observer
    pub async fn sync(&mut self) -> &CoordinatePipeline {
        let frame = self.frame().await;
        self.pipeline.set_frame(frame);
        &self.pipeline
    }

    pub async fn pointing(&mut self) -> Pointing {
        self.sync().await.pointing()
    }

    pub async fn screen(&mut self) -> ScreenCoordinate {
        self.sync().await.screen()
    }

    pub fn target(&self) -> EquatorialCoordinate {
        self.pipeline.target()
    }

    /// Point at an equatorial target; refused while slewing
    pub async fn set_target(
        &mut self,
        target: EquatorialCoordinate,
    ) -> Result<Pointing, PointingError> {
        if self.slew.is_slewing() {
            log::warn!("target {:?} refused during slew", target);
            return Err(PointingError::SlewInProgress);
        }

        self.pipeline.set_target(target);
        let pointing = self.pointing().await;
        settle(&mut self.slew, &self.pipeline);
        Ok(pointing)
    }

    pub async fn set_ra(&mut self, ra: f64) -> Result<Pointing, PointingError> {
        let dec = self.pipeline.target().dec;
        self.set_target(EquatorialCoordinate::new(ra, dec)).await
    }

    pub async fn set_dec(&mut self, dec: f64) -> Result<Pointing, PointingError> {
        let ra = self.pipeline.target().ra;
        self.set_target(EquatorialCoordinate::new(ra, dec)).await
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.pipeline.set_viewport(viewport);
    }

    /// Apply an observer message and propagate the result to the pipeline
    pub fn apply_observer(&mut self, message: ObserverMessage) -> bool {
        let changed = self.state.apply(message);
        if changed {
            self.pipeline.set_observer(self.state.observer);
            self.pipeline.set_offset(self.state.offset);
        }
        changed
    }

    pub fn relocate(&mut self, observer: Observer) -> bool {
        self.apply_observer(ObserverMessage::Relocate(observer))
    }

    /// Translate a keyboard or compass event and apply what it means
    pub async fn handle_input(&mut self, event: InputEvent) {
        for command in self.input.translate(&event, &self.state.orientation) {
            match command {
                InputCommand::Observer(message) => {
                    self.apply_observer(message);
                }
                InputCommand::Rate(rate) => self.apply_rate(rate).await,
            }
        }
    }

    pub async fn request_orientation_permission<P>(&mut self, prompt: &P) -> bool
    where
        P: PermissionPrompt + ?Sized,
    {
        self.state.orientation.request_permission(prompt).await;
        self.state.orientation.in_use()
    }

    pub fn toggle_device_orientation(&mut self) -> bool {
        self.state.orientation.toggle()
    }

    // Slew

    pub fn is_slewing(&self) -> bool {
        self.slew.is_slewing()
    }

    pub fn slew(&self) -> &SlewSimulator {
        &self.slew
    }

    pub fn subscribe_slew(&self) -> broadcast::Receiver<Pointing> {
        self.slew.subscribe()
    }

    /// Start a simulated slew toward a screen position
    ///
    /// A slew already in flight is replaced. From rest, the slew starts where
    /// the current target is shown now. With mirroring on, the mount is sent
    /// the equatorial coordinate under the target position.
    pub async fn slew_to(&mut self, target: ScreenCoordinate) -> Result<(), PointingError> {
        if !target.is_finite() {
            return Err(PointingError::InvalidScreenTarget(target));
        }

        if !self.slew.is_slewing() {
            self.sync().await;
            settle(&mut self.slew, &self.pipeline);
        }
        self.slew.slew_to(target);

        if self.mirror_slews {
            let destination = self.frame().await.pointing_at(target).equatorial();
            self.mirror(destination);
        }
        Ok(())
    }

    /// One frame of the slew in flight, against the clock's current time
    pub async fn step_slew(&mut self) -> Option<Pointing> {
        let frame = self.frame().await;
        let pointing = self.slew.advance(&frame)?;
        self.pipeline.set_frame(frame);
        self.pipeline.set_target(pointing.equatorial());
        Some(pointing)
    }

    /// Run the slew in flight to completion on `ticks`
    ///
    /// Every frame reads the clock afresh, so a slew animated while time runs
    /// fast lands on the sky under the target at the moment it arrives.
    pub async fn animate_slew<T>(&mut self, ticks: &mut T) -> SlewOutcome
    where
        T: TickSource + ?Sized,
    {
        let shared = self.clock.shared();
        let state = self.state;
        let viewport = self.viewport;

        let outcome = animate(&mut self.slew, ticks, async || {
            let datetime = shared.read().await.now();
            SkyFrame::new(state.observer, state.offset, viewport, datetime)
        })
        .await;

        if self.slew.step_index() > 0 {
            let frame = self.frame().await;
            self.pipeline.set_frame(frame);
            self.pipeline.set_target(self.slew.pointing().equatorial());
        }
        outcome
    }

    /// Abandon any slew and point at the viewport center
    pub async fn reset_slew(&mut self) -> Pointing {
        let frame = self.frame().await;
        let pointing = self.slew.reset_slew(&frame);
        self.pipeline.set_frame(frame);
        self.pipeline.set_target(pointing.equatorial());
        pointing
    }

    fn mirror(&self, destination: EquatorialCoordinate) {
        let Some(mount) = self.mount.as_ref().map(Arc::clone) else {
            log::debug!("slew mirroring on but no mount attached");
            return;
        };

        log::info!(
            "mirroring slew to mount: ra {:.4} dec {:.4}",
            destination.ra,
            destination.dec
        );
        dispatch("mount goto", async move {
            mount.goto_equatorial(destination).await
        });
    }
}

/// Rest the simulator where the pipeline shows its target
///
/// A target off the projection (the nadir, or NaN input) leaves it where it was.
fn settle(slew: &mut SlewSimulator, pipeline: &CoordinatePipeline) {
    let screen = pipeline.screen();
    if screen.is_finite() {
        slew.settle_at(screen, pipeline.frame());
    } else {
        log::debug!("target has no screen position, slew origin unchanged");
    }
}

impl<C: Clock + 'static> Drop for Observatory<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
