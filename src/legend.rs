use crate::hover::LegendValue;

/// UI toolkit boundary. The toolkit owns widget construction and event
/// delivery; the core only pushes content through these hooks.
pub trait UiHooks {
    /// Create a checkbox+label pair for one series. `id` is the stable
    /// widget identifier (chart name + series label).
    fn add_toggle(&mut self, id: &str, label: &str);

    /// Replace the text of the legend element at `row`.
    fn set_legend_text(&mut self, row: usize, text: &str);
}

/// LegendUpdater turns interpolated values into legend text.
pub struct LegendUpdater;

impl LegendUpdater {
    /// Display string for one legend row.
    pub fn format(label: &str, y: f64) -> String {
        format!("{label} = {y:.2}")
    }

    /// Write every interpolated value to its legend row.
    pub fn apply(values: &[LegendValue], ui: &mut dyn UiHooks) {
        for value in values {
            ui.set_legend_text(value.row, &Self::format(&value.label, value.y));
        }
    }
}
