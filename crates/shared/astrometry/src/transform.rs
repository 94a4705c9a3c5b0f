//! Equatorial ↔ horizontal conversion
//!
//! Azimuth is measured from north through east. No refraction, precession or
//! pointing-model terms are applied.

use zenith_core::values::wrap_degrees;
use zenith_core::{Degrees, EquatorialCoordinate, HorizontalCoordinate, Observer, Timestamp};

use crate::sidereal::local_sidereal_time;

/// Local hour angle of a right ascension, `[0, 360)`
pub fn hour_angle(ra: Degrees, observer: &Observer, datetime: Timestamp) -> Degrees {
    wrap_degrees(local_sidereal_time(datetime, observer.longitude) - ra)
}

pub fn equatorial_to_horizontal(
    target: EquatorialCoordinate,
    observer: &Observer,
    datetime: Timestamp,
) -> HorizontalCoordinate {
    let ha = hour_angle(target.ra, observer, datetime).to_radians();
    let dec = target.dec.to_radians();
    let lat = observer.latitude.to_radians();

    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_ha, cos_ha) = ha.sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_ha).clamp(-1.0, 1.0);
    let alt = sin_alt.asin();

    let az = (-sin_ha * cos_dec).atan2(sin_dec * cos_lat - cos_dec * sin_lat * cos_ha);

    HorizontalCoordinate::new(alt.to_degrees(), wrap_degrees(az.to_degrees()))
}

pub fn horizontal_to_equatorial(
    target: HorizontalCoordinate,
    observer: &Observer,
    datetime: Timestamp,
) -> EquatorialCoordinate {
    let alt = target.alt.to_radians();
    let az = target.az.to_radians();
    let lat = observer.latitude.to_radians();

    let (sin_alt, cos_alt) = alt.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_az, cos_az) = az.sin_cos();

    let sin_dec = (sin_alt * sin_lat + cos_alt * cos_lat * cos_az).clamp(-1.0, 1.0);
    let dec = sin_dec.asin();

    let ha = (-sin_az * cos_alt).atan2(sin_alt * cos_lat - cos_alt * sin_lat * cos_az);
    let lst = local_sidereal_time(datetime, observer.longitude);

    EquatorialCoordinate::new(wrap_degrees(lst - ha.to_degrees()), dec.to_degrees())
}
