use serde::{Deserialize, Serialize};

/// Position on the projection surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenCoordinate {
    pub x: f64,
    pub y: f64,
}

impl ScreenCoordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Dimensions of the projection surface (canvas), in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Midpoint of the surface, the projection center
    pub fn center(&self) -> ScreenCoordinate {
        ScreenCoordinate::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether the point lies inside `[0, width] x [0, height]`
    pub fn contains(&self, point: ScreenCoordinate) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}
