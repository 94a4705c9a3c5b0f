//! Tick sources for the clock timer and the slew frame loop

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use zenith_ports::TickSource;

/// Repeating timer backed by a Tokio interval
///
/// Missed ticks are skipped rather than bursted, so a stalled runtime never
/// replays a backlog of frames. Must be created inside a Tokio runtime.
pub struct IntervalTicks {
    interval: Interval,
}

impl IntervalTicks {
    pub fn new(period: Duration) -> Self {
        // tokio panics on a zero period
        let period = period.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn every_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl TickSource for IntervalTicks {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Tick source fired by hand through a [`ManualTickDriver`]
///
/// Exhausted once every driver has been dropped and pending ticks are consumed.
pub struct ManualTicks {
    rx: mpsc::UnboundedReceiver<()>,
}

/// Sending half of [`ManualTicks`]
#[derive(Clone)]
pub struct ManualTickDriver {
    tx: mpsc::UnboundedSender<()>,
}

/// Create a connected driver/source pair
pub fn manual_ticks() -> (ManualTickDriver, ManualTicks) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ManualTickDriver { tx }, ManualTicks { rx })
}

impl ManualTickDriver {
    /// Queue one tick; false if the source is gone
    pub fn fire(&self) -> bool {
        self.tx.send(()).is_ok()
    }

    /// Queue `count` ticks; false if the source is gone
    pub fn fire_n(&self, count: usize) -> bool {
        (0..count).all(|_| self.fire())
    }
}

#[async_trait]
impl TickSource for ManualTicks {
    async fn tick(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_ticks_drain_then_exhaust() {
        let (driver, mut ticks) = manual_ticks();
        assert!(driver.fire_n(3));
        drop(driver);

        let mut count = 0;
        while ticks.tick().await {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_driver_reports_dropped_source() {
        let (driver, ticks) = manual_ticks();
        drop(ticks);
        assert!(!driver.fire());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticks_follow_period() {
        let mut ticks = IntervalTicks::every_millis(10);
        let start = tokio::time::Instant::now();

        // First tick completes immediately
        assert!(ticks.tick().await);
        assert!(ticks.tick().await);
        assert!(ticks.tick().await);

        assert_eq!(start.elapsed(), Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_clamped() {
        let ticks = IntervalTicks::new(Duration::ZERO);
        assert_eq!(ticks.period(), Duration::from_millis(1));
    }
}
