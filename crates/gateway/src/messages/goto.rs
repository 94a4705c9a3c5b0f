use zenith_core::{EquatorialCoordinate, HorizontalCoordinate, values::degrees_to_hours};

use crate::transport::Endpoints;

/// A goto request in the hardware API's units
///
/// Right ascension goes over the wire in hours; everything else in degrees.
#[derive(Debug, Clone, PartialEq)]
pub enum GotoQuery {
    Equatorial(EquatorialCoordinate),
    Horizontal(HorizontalCoordinate),
    Focuser(String),
    RotatorMech(String),
    RotatorField(String),
}

impl GotoQuery {
    /// Path below the device namespace
    pub fn path(&self) -> &'static str {
        match self {
            GotoQuery::Equatorial(_) => Endpoints::GOTO_EQUATORIAL,
            GotoQuery::Horizontal(_) => Endpoints::GOTO_HORIZONTAL,
            GotoQuery::Focuser(_) => Endpoints::FOCUSER_GOTO,
            GotoQuery::RotatorMech(_) => Endpoints::ROTATOR_GOTO_MECH,
            GotoQuery::RotatorField(_) => Endpoints::ROTATOR_GOTO_FIELD,
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            GotoQuery::Equatorial(target) => vec![
                ("ra_hours", degrees_to_hours(target.ra).to_string()),
                ("dec_degs", target.dec.to_string()),
            ],
            GotoQuery::Horizontal(target) => vec![
                ("alt_degs", target.alt.to_string()),
                ("az_degs", target.az.to_string()),
            ],
            GotoQuery::Focuser(target)
            | GotoQuery::RotatorMech(target)
            | GotoQuery::RotatorField(target) => vec![("target", target.clone())],
        }
    }
}
