use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum LegendPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Which axes the crosshair tracks while the pointer moves over the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CrosshairAxis {
    #[default]
    X,
    Y,
    Both,
}

/// Display options handed to the rendering backend on every render call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub legend_position: LegendPosition,
    pub crosshair_axis: CrosshairAxis,
    /// When false, pointer-move notifications are dropped and the legend
    /// never updates live.
    pub hover_enabled: bool,
    pub y_axis_tick_size: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            legend_position: LegendPosition::TopRight,
            crosshair_axis: CrosshairAxis::X,
            hover_enabled: true,
            y_axis_tick_size: 200.0,
        }
    }
}

impl DisplayConfig {
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }
}
