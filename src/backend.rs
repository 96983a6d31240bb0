use crate::data_types::{AxisBounds, DisplayConfig, PlotPoint};

/// One active series as handed to the rendering backend.
#[derive(Clone, Copy, Debug)]
pub struct SeriesFrame<'a> {
    pub label: &'a str,
    pub points: &'a [PlotPoint],
    pub color_index: usize,
}

/// One series as actually rendered, echoed back through [`PlotHandle`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedSeries {
    pub label: String,
    pub points: Vec<PlotPoint>,
}

/// Opaque result of a render call.
///
/// The handle is replaced on every render and queried by the hover path for
/// axis bounds and the rendered data.
pub trait PlotHandle {
    /// Data-space extent of the rendered plot.
    fn axis_bounds(&self) -> AxisBounds;

    /// Rendered series in render order.
    ///
    /// Contract: this order is identical to the order of the legend rows the
    /// render created, so the index into this slice is the legend row index.
    fn series_data(&self) -> &[RenderedSeries];
}

/// Rendering backend boundary. Owns all pixel-space and curve-drawing
/// concerns; the core never inspects pixels.
pub trait RenderBackend {
    /// Render the given active subset. Synchronous: the returned handle is
    /// valid as soon as the call returns.
    fn render(&mut self, series: &[SeriesFrame<'_>], config: &DisplayConfig) -> Box<dyn PlotHandle>;
}
