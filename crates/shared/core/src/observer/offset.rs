use serde::{Deserialize, Serialize};

use crate::coordinates::HorizontalCoordinate;
use crate::values::Degrees;

/// Relative change to the observer heading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OffsetDelta {
    pub azimuthal: Degrees,
    pub altitudinal: Degrees,
}

impl OffsetDelta {
    pub fn azimuthal(degrees: Degrees) -> Self {
        Self {
            azimuthal: degrees,
            altitudinal: 0.0,
        }
    }

    pub fn altitudinal(degrees: Degrees) -> Self {
        Self {
            azimuthal: 0.0,
            altitudinal: degrees,
        }
    }
}

/// Manual heading correction of the observer
///
/// The screen shows the sky as seen along this heading. Converting a screen
/// position back to the sky adds the offset; projecting a sky position onto the
/// screen removes it.
///
/// The altitudinal part tilts the view about the east-west axis and the
/// azimuthal part turns it about the zenith. Along the heading meridian this
/// adds plainly to altitude; past the zenith the direction folds over to the
/// opposite azimuth instead of leaving `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadingOffset {
    pub azimuthal: Degrees,
    pub altitudinal: Degrees,
}

impl HeadingOffset {
    pub fn new(azimuthal: Degrees, altitudinal: Degrees) -> Self {
        Self {
            azimuthal,
            altitudinal,
        }
    }

    /// Accumulate a relative nudge
    pub fn apply(&mut self, delta: OffsetDelta) {
        self.azimuthal += delta.azimuthal;
        self.altitudinal += delta.altitudinal;
    }

    /// Heading-relative direction to absolute horizontal direction
    pub fn add_to(&self, view: HorizontalCoordinate) -> HorizontalCoordinate {
        let tilted = tilt(view, self.altitudinal);
        HorizontalCoordinate::new(tilted.alt, tilted.az + self.azimuthal).normalized()
    }

    /// Absolute horizontal direction to heading-relative direction
    pub fn remove_from(&self, horizontal: HorizontalCoordinate) -> HorizontalCoordinate {
        let turned = HorizontalCoordinate::new(horizontal.alt, horizontal.az - self.azimuthal);
        tilt(turned, -self.altitudinal).normalized()
    }
}

/// Rotate a direction about the east-west axis, raising the north horizon by `degrees`
fn tilt(direction: HorizontalCoordinate, degrees: f64) -> HorizontalCoordinate {
    if degrees == 0.0 {
        return direction;
    }

    let (alt, az, angle) = (
        direction.alt.to_radians(),
        direction.az.to_radians(),
        degrees.to_radians(),
    );
    let north = alt.cos() * az.cos();
    let east = alt.cos() * az.sin();
    let up = alt.sin();

    let raised_north = north * angle.cos() - up * angle.sin();
    let raised_up = (up * angle.cos() + north * angle.sin()).clamp(-1.0, 1.0);

    HorizontalCoordinate::new(
        raised_up.asin().to_degrees(),
        east.atan2(raised_north).to_degrees(),
    )
}

impl From<HorizontalCoordinate> for HeadingOffset {
    fn from(offset: HorizontalCoordinate) -> Self {
        Self::new(offset.az, offset.alt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_accumulates() {
        let mut offset = HeadingOffset::default();
        offset.apply(OffsetDelta::azimuthal(0.5));
        offset.apply(OffsetDelta::azimuthal(0.5));
        offset.apply(OffsetDelta::altitudinal(-0.5));
        assert_eq!(offset, HeadingOffset::new(1.0, -0.5));
    }

    #[test]
    fn test_azimuthal_offset_turns_heading() {
        let offset = HeadingOffset::new(350.0, 0.0);
        let view = offset.remove_from(HorizontalCoordinate::new(40.0, 20.0));
        assert!((view.alt - 40.0).abs() < 1e-12);
        assert!((view.az - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_altitudinal_offset_adds_along_meridian() {
        let offset = HeadingOffset::new(0.0, 2.5);
        let raised = offset.add_to(HorizontalCoordinate::new(40.0, 0.0));
        assert!((raised.alt - 42.5).abs() < 1e-9);
        assert!(raised.az.abs() < 1e-9);
    }

    #[test]
    fn test_altitudinal_offset_folds_over_zenith() {
        let offset = HeadingOffset::new(0.0, 0.5);
        let beyond = offset.add_to(HorizontalCoordinate::new(90.0, 0.0));
        assert!((beyond.alt - 89.5).abs() < 1e-9);
        assert!((beyond.az - 180.0).abs() < 1e-9);

        let lowered = offset.add_to(HorizontalCoordinate::new(-90.0, 0.0));
        assert!((lowered.alt + 89.5).abs() < 1e-9);
    }

    #[test]
    fn test_add_and_remove_are_inverse() {
        let offset = HeadingOffset::new(350.0, 2.5);
        for (alt, az) in [(40.0, 20.0), (89.0, 170.0), (-30.0, 275.0), (0.0, 90.0)] {
            let horizontal = HorizontalCoordinate::new(alt, az);
            let back = offset.add_to(offset.remove_from(horizontal));
            assert!((back.alt - alt).abs() < 1e-9, "alt for {alt}/{az}");
            assert!((back.az - az).abs() < 1e-9, "az for {alt}/{az}");
        }
    }

    #[test]
    fn test_nan_propagates() {
        let offset = HeadingOffset::new(0.0, 1.0);
        let out = offset.add_to(HorizontalCoordinate::new(f64::NAN, 0.0));
        assert!(!out.is_finite());
    }
}
