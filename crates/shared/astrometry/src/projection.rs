//! Zenithal stereographic projection
//!
//! The zenith maps to the viewport midpoint and the horizon to a circle whose
//! radius is half the smaller viewport dimension. North is up and east is to
//! the left, as when looking up at the sky. Projection and inverse are exact
//! inverses of each other.

use zenith_core::values::wrap_degrees;
use zenith_core::{HorizontalCoordinate, ScreenCoordinate, Viewport};

/// Pixel radius of the horizon circle
pub fn horizon_radius(viewport: &Viewport) -> f64 {
    viewport.width.min(viewport.height) * 0.5
}

/// Sky direction to screen position
///
/// The nadir (`alt = -90`) lies at infinity and yields non-finite output.
pub fn project(horizontal: HorizontalCoordinate, viewport: &Viewport) -> ScreenCoordinate {
    let center = viewport.center();
    let zenith_distance = (90.0 - horizontal.alt).to_radians();
    let rho = horizon_radius(viewport) * (zenith_distance * 0.5).tan();
    let (sin_az, cos_az) = horizontal.az.to_radians().sin_cos();

    ScreenCoordinate::new(center.x - rho * sin_az, center.y - rho * cos_az)
}

/// Screen position to sky direction
pub fn unproject(screen: ScreenCoordinate, viewport: &Viewport) -> HorizontalCoordinate {
    let center = viewport.center();
    let dx = screen.x - center.x;
    let dy = screen.y - center.y;
    let rho = dx.hypot(dy);

    let zenith_distance = 2.0 * (rho / horizon_radius(viewport)).atan();
    let alt = 90.0 - zenith_distance.to_degrees();

    // Azimuth is undefined at the zenith; report north
    let az = if rho == 0.0 {
        0.0
    } else {
        wrap_degrees((-dx).atan2(-dy).to_degrees())
    };

    HorizontalCoordinate::new(alt, az)
}
