mod equatorial;
mod horizontal;
mod pointing;
mod screen;

pub use equatorial::EquatorialCoordinate;
pub use horizontal::HorizontalCoordinate;
pub use pointing::Pointing;
pub use screen::{ScreenCoordinate, Viewport};
