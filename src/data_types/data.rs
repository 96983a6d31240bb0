/// A single sample of a series, in data-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer position in data-space coordinates, produced by the rendering
/// boundary on every pointer-move notification and discarded after use.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
