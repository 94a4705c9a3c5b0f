use std::cell::Cell;
use zenith_core::{
    EquatorialCoordinate, HeadingOffset, HorizontalCoordinate, Observer, Pointing,
    ScreenCoordinate, Timestamp, Viewport,
};

use crate::frame::SkyFrame;

#[derive(Debug, Clone, Copy)]
struct Derived {
    horizontal: HorizontalCoordinate,
    screen: ScreenCoordinate,
}

/// Instance-owned pointing state for one target
///
/// The target (`ra`/`dec`) and the frame inputs are the only write points.
/// Horizontal and screen coordinates are derived on read and cached until the
/// next write; every setter marks the cache stale:
///
/// | derived field | recomputed after a change of                    |
/// |---------------|-------------------------------------------------|
/// | `horizontal`  | target, observer, datetime                      |
/// | `screen`      | target, observer, datetime, heading, viewport   |
///
/// Only the most recent result is kept, so a non-finite input poisons reads
/// only until it is replaced.
#[derive(Debug, Clone)]
pub struct CoordinatePipeline {
    target: EquatorialCoordinate,
    frame: SkyFrame,
    cache: Cell<Option<Derived>>,
}

impl CoordinatePipeline {
    pub fn new(target: EquatorialCoordinate, frame: SkyFrame) -> Self {
        Self {
            target,
            frame,
            cache: Cell::new(None),
        }
    }

    pub fn target(&self) -> EquatorialCoordinate {
        self.target
    }

    pub fn frame(&self) -> &SkyFrame {
        &self.frame
    }

    pub fn set_target(&mut self, target: EquatorialCoordinate) {
        self.target = target;
        self.invalidate();
    }

    pub fn set_ra(&mut self, ra: f64) {
        self.set_target(EquatorialCoordinate::new(ra, self.target.dec));
    }

    pub fn set_dec(&mut self, dec: f64) {
        self.set_target(EquatorialCoordinate::new(self.target.ra, dec));
    }

    pub fn set_frame(&mut self, frame: SkyFrame) {
        if self.frame != frame {
            self.frame = frame;
            self.invalidate();
        }
    }

    pub fn set_observer(&mut self, observer: Observer) {
        self.set_frame(SkyFrame {
            observer,
            ..self.frame
        });
    }

    pub fn set_offset(&mut self, offset: HeadingOffset) {
        self.set_frame(SkyFrame {
            offset,
            ..self.frame
        });
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.set_frame(SkyFrame {
            viewport,
            ..self.frame
        });
    }

    pub fn set_datetime(&mut self, datetime: Timestamp) {
        self.set_frame(SkyFrame {
            datetime,
            ..self.frame
        });
    }

    /// Whether the next read will recompute
    pub fn is_stale(&self) -> bool {
        self.cache.get().is_none()
    }

    pub fn horizontal(&self) -> HorizontalCoordinate {
        self.derived().horizontal
    }

    pub fn screen(&self) -> ScreenCoordinate {
        self.derived().screen
    }

    pub fn pointing(&self) -> Pointing {
        Pointing::new(self.target, self.horizontal())
    }

    fn invalidate(&self) {
        self.cache.set(None);
    }

    fn derived(&self) -> Derived {
        if let Some(derived) = self.cache.get() {
            return derived;
        }

        let horizontal = self.frame.derive(self.target);
        let derived = Derived {
            horizontal,
            screen: self.frame.project(horizontal),
        };

        if !horizontal.is_finite() {
            log::debug!("non-finite horizontal coordinate for target {:?}", self.target);
        }
        self.cache.set(Some(derived));
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn betelgeuse_pipeline() -> CoordinatePipeline {
        let frame = SkyFrame::new(
            Observer::new(-155.468094, 19.820611, 0.0),
            HeadingOffset::default(),
            Viewport::new(2660.0, 980.0),
            Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap(),
        );
        CoordinatePipeline::new(EquatorialCoordinate::new(88.7929583, 7.4070639), frame)
    }

    #[test]
    fn test_betelgeuse_alt_az() {
        let pipeline = betelgeuse_pipeline();
        let horizontal = pipeline.horizontal();
        assert!((horizontal.alt - 72.78539444063765).abs() < 0.1);
        assert!((horizontal.az - 134.44877920325155).abs() < 0.1);
    }

    #[test]
    fn test_reads_are_cached_until_a_write() {
        let mut pipeline = betelgeuse_pipeline();
        assert!(pipeline.is_stale());

        let first = pipeline.horizontal();
        assert!(!pipeline.is_stale());
        assert_eq!(pipeline.horizontal(), first);

        let datetime = pipeline.frame().datetime + Duration::hours(1);
        pipeline.set_datetime(datetime);
        assert!(pipeline.is_stale());
        assert_ne!(pipeline.horizontal(), first);
    }

    #[test]
    fn test_unchanged_frame_keeps_cache() {
        let mut pipeline = betelgeuse_pipeline();
        pipeline.horizontal();

        let datetime = pipeline.frame().datetime;
        pipeline.set_datetime(datetime);

        assert!(!pipeline.is_stale());
    }

    #[test]
    fn test_ra_dec_setters_are_write_points() {
        let mut pipeline = betelgeuse_pipeline();
        pipeline.set_ra(101.2875);
        pipeline.set_dec(-16.7161);
        assert_eq!(pipeline.target(), EquatorialCoordinate::new(101.2875, -16.7161));
        assert_eq!(pipeline.pointing().ra, 101.2875);
    }

    #[test]
    fn test_offset_moves_screen_but_not_horizontal() {
        let mut pipeline = betelgeuse_pipeline();
        let horizontal = pipeline.horizontal();
        let screen = pipeline.screen();

        pipeline.set_offset(HeadingOffset::new(5.0, 0.0));

        assert_eq!(pipeline.horizontal(), horizontal);
        assert_ne!(pipeline.screen(), screen);
    }

    #[test]
    fn test_bad_observer_does_not_corrupt_later_reads() {
        let mut pipeline = betelgeuse_pipeline();
        let good = pipeline.horizontal();
        let observer = pipeline.frame().observer;

        pipeline.set_observer(Observer::new(f64::NAN, f64::INFINITY, 0.0));
        let bad = pipeline.horizontal();
        assert!(bad.alt.is_nan());
        assert!(!pipeline.screen().is_finite());

        pipeline.set_observer(observer);
        assert_eq!(pipeline.horizontal(), good);
    }
}
