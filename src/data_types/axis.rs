use super::data::PointerPosition;

/// Visible data-space extent of the rendered plot, as reported by the
/// rendering backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether the pointer lies inside the bounds on both axes.
    pub fn contains(&self, pos: PointerPosition) -> bool {
        pos.x >= self.x_min && pos.x <= self.x_max && pos.y >= self.y_min && pos.y <= self.y_max
    }
}
