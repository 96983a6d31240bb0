use std::time::Instant;

use eyre::Result;
use tracing::{debug, info};

use crate::backend::{PlotHandle, RenderBackend, SeriesFrame};
use crate::data_types::{DisplayConfig, PointerPosition, RawSeries, SeriesRegistry};
use crate::hover::HoverInterpolator;
use crate::legend::{LegendUpdater, UiHooks};
use crate::scheduler::HoverScheduler;
use crate::selection::SelectionController;

/// One running chart instance.
///
/// Owns the registry, the current plot handle and the hover scheduler, so
/// multiple instances on one page never interfere. The host wires pointer
/// and toggle events to [`pointer_moved`](Self::pointer_moved),
/// [`on_timer`](Self::on_timer) and [`toggle`](Self::toggle).
pub struct ChartController {
    registry: SeriesRegistry,
    config: DisplayConfig,
    backend: Box<dyn RenderBackend>,
    ui: Box<dyn UiHooks>,
    handle: Option<Box<dyn PlotHandle>>,
    scheduler: HoverScheduler,
}

impl std::fmt::Debug for ChartController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartController")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

impl ChartController {
    /// Build the registry from raw input, create one toggle row per series
    /// (widget id is `name` + label) and perform the initial render.
    ///
    /// Fails only on malformed input (duplicate labels).
    pub fn new(
        name: &str,
        raw: Vec<RawSeries>,
        config: DisplayConfig,
        backend: Box<dyn RenderBackend>,
        mut ui: Box<dyn UiHooks>,
    ) -> Result<Self> {
        let registry = SeriesRegistry::build(raw)?;

        for series in registry.all() {
            ui.add_toggle(&format!("{name}{}", series.label), &series.label);
        }
        info!(name, series = registry.len(), "chart instance created");

        let mut chart = Self {
            registry,
            config,
            backend,
            ui,
            handle: None,
            scheduler: HoverScheduler::new(),
        };
        chart.render();
        Ok(chart)
    }

    /// Render the active subset and seed the legend rows.
    ///
    /// An empty subset skips the call entirely, leaving the previous plot
    /// (and its handle) in place.
    fn render(&mut self) {
        let active = SelectionController::active_subset(&self.registry);
        if active.is_empty() {
            debug!("all series deselected, keeping previous plot");
            return;
        }

        let frames: Vec<SeriesFrame<'_>> = active
            .iter()
            .map(|s| SeriesFrame {
                label: &s.label,
                points: &s.points,
                color_index: s.color_index,
            })
            .collect();
        let handle = self.backend.render(&frames, &self.config);

        // Fresh legend rows start at zero until the first hover pass.
        for (row, series) in handle.series_data().iter().enumerate() {
            self.ui
                .set_legend_text(row, &LegendUpdater::format(&series.label, 0.0));
        }

        self.handle = Some(handle);
    }

    /// Flip the visibility of the named series and re-render.
    ///
    /// Unknown labels are a no-op.
    pub fn toggle(&mut self, label: &str) {
        if SelectionController::toggle(&mut self.registry, label) {
            self.render();
        }
    }

    /// Feed a pointer-move notification into the coalescing scheduler.
    ///
    /// Returns `true` when the host must arm a wake after
    /// [`HOVER_DELAY`](crate::scheduler::HOVER_DELAY), after which it calls
    /// [`on_timer`](Self::on_timer).
    pub fn pointer_moved(&mut self, pos: PointerPosition, now: Instant) -> bool {
        if !self.config.hover_enabled {
            return false;
        }
        self.scheduler.note_pointer(pos, now)
    }

    /// Run one interpolation pass against the latest pointer position.
    ///
    /// No-op when the deadline has not passed, no render happened yet, or
    /// the pointer sits outside the axis bounds (stale legend text remains).
    pub fn on_timer(&mut self, now: Instant) {
        let Some(pos) = self.scheduler.take_due(now) else {
            return;
        };
        let Some(handle) = self.handle.as_deref() else {
            return;
        };
        let Some(values) = HoverInterpolator::interpolate(pos, handle) else {
            debug!("pointer outside axis bounds, legend left unchanged");
            return;
        };
        LegendUpdater::apply(&values, self.ui.as_mut());
    }

    /// The most recent render result, if any render has happened.
    pub fn handle(&self) -> Option<&dyn PlotHandle> {
        self.handle.as_deref()
    }

    pub fn registry(&self) -> &SeriesRegistry {
        &self.registry
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
}
