//! chart_core crate: the interaction core of a multi-series numeric chart.
//!
//! Builds a stable, colored series registry from raw input, tracks per-series
//! visibility, interpolates values under the pointer and feeds them to a live
//! legend. Rendering and widget construction are delegated to external
//! backends through the [`RenderBackend`] and [`UiHooks`] traits.

pub mod backend;
pub mod chart;
pub mod data_types;
pub mod error;
pub mod hover;
pub mod legend;
pub mod scheduler;
pub mod selection;

pub use backend::{PlotHandle, RenderBackend, RenderedSeries, SeriesFrame};
pub use chart::ChartController;
pub use data_types::{
    AxisBounds, CrosshairAxis, DisplayConfig, LegendPosition, PlotPoint, PointerPosition,
    RawSeries, Series, SeriesRegistry,
};
pub use error::ChartError;
pub use hover::{HoverInterpolator, LegendValue};
pub use legend::{LegendUpdater, UiHooks};
pub use scheduler::{HoverScheduler, HOVER_DELAY};
pub use selection::SelectionController;
