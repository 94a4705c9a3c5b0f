use serde::{Deserialize, Serialize};
use zenith_core::Degrees;
use zenith_core::values::{degrees_to_hours, wrap_degrees};

/// Sexagesimal rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeFormat {
    /// Degrees, arcminutes, arcseconds: `7º 24' 25.43"`
    #[default]
    Dms,
    /// Hours, minutes, seconds of right ascension: `05ʰ 55ᵐ 10.31ˢ`
    Hms,
}

pub fn format_degrees(degrees: Degrees, format: DegreeFormat) -> String {
    match format {
        DegreeFormat::Dms => to_dms(degrees),
        DegreeFormat::Hms => to_hms(degrees),
    }
}

/// Decimal degrees as humanised hours, minutes and seconds
pub fn to_hms(degrees: Degrees) -> String {
    if !degrees.is_finite() {
        return degrees.to_string();
    }
    let (hours, minutes, centiseconds) = split_sexagesimal(degrees_to_hours(wrap_degrees(degrees)));
    format!(
        "{:02}ʰ {:02}ᵐ {:02}.{:02}ˢ",
        hours % 24,
        minutes,
        centiseconds / 100,
        centiseconds % 100
    )
}

/// Decimal degrees as humanised degrees, arcminutes and arcseconds
pub fn to_dms(degrees: Degrees) -> String {
    if !degrees.is_finite() {
        return degrees.to_string();
    }
    let sign = if degrees < 0.0 { "-" } else { "" };
    let (whole, minutes, centiseconds) = split_sexagesimal(degrees.abs());
    format!(
        "{sign}{whole}º {minutes:02}' {:02}.{:02}\"",
        centiseconds / 100,
        centiseconds % 100
    )
}

/// Split a non-negative value into whole units, minutes and centiseconds
///
/// Rounds once at centisecond precision so carries propagate (59.999s becomes
/// the next minute rather than `60.00`).
fn split_sexagesimal(value: f64) -> (u64, u64, u64) {
    let total = (value * 360_000.0).round() as u64;
    (total / 360_000, (total / 6_000) % 60, total % 6_000)
}
