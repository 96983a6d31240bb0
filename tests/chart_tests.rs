use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

use chart_core::backend::{PlotHandle, RenderBackend, RenderedSeries, SeriesFrame};
use chart_core::chart::ChartController;
use chart_core::data_types::{AxisBounds, DisplayConfig, PointerPosition, RawSeries};
use chart_core::error::ChartError;
use chart_core::scheduler::HOVER_DELAY;
use chart_core::legend::UiHooks;

#[derive(Default)]
struct UiState {
    toggles: Vec<(String, String)>,
    legend: BTreeMap<usize, String>,
}

struct RecordingUi(Rc<RefCell<UiState>>);

impl UiHooks for RecordingUi {
    fn add_toggle(&mut self, id: &str, label: &str) {
        self.0.borrow_mut().toggles.push((id.to_string(), label.to_string()));
    }
    fn set_legend_text(&mut self, row: usize, text: &str) {
        self.0.borrow_mut().legend.insert(row, text.to_string());
    }
}

struct FakeHandle {
    bounds: AxisBounds,
    data: Vec<RenderedSeries>,
}

impl PlotHandle for FakeHandle {
    fn axis_bounds(&self) -> AxisBounds {
        self.bounds
    }
    fn series_data(&self) -> &[RenderedSeries] {
        &self.data
    }
}

struct FakeBackend {
    renders: Rc<RefCell<usize>>,
}

impl RenderBackend for FakeBackend {
    fn render(
        &mut self,
        series: &[SeriesFrame<'_>],
        _config: &DisplayConfig,
    ) -> Box<dyn PlotHandle> {
        *self.renders.borrow_mut() += 1;

        let mut bounds = AxisBounds {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for frame in series {
            for p in frame.points {
                bounds.x_min = bounds.x_min.min(p.x);
                bounds.x_max = bounds.x_max.max(p.x);
                bounds.y_min = bounds.y_min.min(p.y);
                bounds.y_max = bounds.y_max.max(p.y);
            }
        }

        Box::new(FakeHandle {
            bounds,
            data: series
                .iter()
                .map(|frame| RenderedSeries {
                    label: frame.label.to_string(),
                    points: frame.points.to_vec(),
                })
                .collect(),
        })
    }
}

struct Harness {
    chart: ChartController,
    ui: Rc<RefCell<UiState>>,
    renders: Rc<RefCell<usize>>,
}

fn setup() -> Harness {
    let ui = Rc::new(RefCell::new(UiState::default()));
    let renders = Rc::new(RefCell::new(0));
    let raw = vec![
        RawSeries::new("sent", vec![(0.0, 0.0), (10.0, 10.0)]),
        RawSeries::new("recv", vec![(0.0, 20.0), (10.0, 0.0)]),
    ];
    let chart = ChartController::new(
        "bench",
        raw,
        DisplayConfig::default(),
        Box::new(FakeBackend {
            renders: renders.clone(),
        }),
        Box::new(RecordingUi(ui.clone())),
    )
    .unwrap();
    Harness { chart, ui, renders }
}

#[test]
fn test_setup_creates_toggles_and_renders_once() {
    let h = setup();
    let ui = h.ui.borrow();
    assert_eq!(
        ui.toggles,
        vec![
            ("benchsent".to_string(), "sent".to_string()),
            ("benchrecv".to_string(), "recv".to_string()),
        ]
    );
    assert_eq!(*h.renders.borrow(), 1);
    assert_eq!(ui.legend.get(&0).unwrap(), "sent = 0.00");
    assert_eq!(ui.legend.get(&1).unwrap(), "recv = 0.00");
    assert!(h.chart.handle().is_some());
}

#[test]
fn test_duplicate_label_surfaces_from_setup() {
    let raw = vec![
        RawSeries::new("A", vec![(0.0, 0.0)]),
        RawSeries::new("A", vec![(0.0, 1.0)]),
    ];
    let err = ChartController::new(
        "x",
        raw,
        DisplayConfig::default(),
        Box::new(FakeBackend {
            renders: Rc::new(RefCell::new(0)),
        }),
        Box::new(RecordingUi(Rc::new(RefCell::new(UiState::default())))),
    )
    .unwrap_err();
    let chart_err: &ChartError = err.downcast_ref().unwrap();
    assert_eq!(*chart_err, ChartError::DuplicateLabel("A".to_string()));
}

#[test]
fn test_toggle_rerenders_active_subset() {
    let mut h = setup();
    h.chart.toggle("sent");
    assert_eq!(*h.renders.borrow(), 2);

    let handle = h.chart.handle().unwrap();
    let labels: Vec<&str> = handle.series_data().iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["recv"]);
    // Row 0 now belongs to "recv"
    assert_eq!(h.ui.borrow().legend.get(&0).unwrap(), "recv = 0.00");
}

#[test]
fn test_toggle_unknown_label_does_not_rerender() {
    let mut h = setup();
    h.chart.toggle("ghost");
    assert_eq!(*h.renders.borrow(), 1);
}

#[test]
fn test_empty_selection_skips_render_and_keeps_handle() {
    let mut h = setup();
    h.chart.toggle("sent");
    h.chart.toggle("recv");
    // Second toggle emptied the subset: only the first one re-rendered
    assert_eq!(*h.renders.borrow(), 2);
    let handle = h.chart.handle().unwrap();
    assert_eq!(handle.series_data().len(), 1);

    // Hovering against the stale handle still works
    let t0 = Instant::now();
    assert!(h.chart.pointer_moved(PointerPosition::new(5.0, 10.0), t0));
    h.chart.on_timer(t0 + HOVER_DELAY);
    assert_eq!(h.ui.borrow().legend.get(&0).unwrap(), "recv = 10.00");
}

#[test]
fn test_hover_updates_legend_once_per_window() {
    let mut h = setup();
    let t0 = Instant::now();

    assert!(h.chart.pointer_moved(PointerPosition::new(2.0, 5.0), t0));
    // Burst inside the same window only refreshes the stored position
    assert!(!h.chart.pointer_moved(PointerPosition::new(5.0, 10.0), t0));

    // Before the deadline nothing happens
    h.chart.on_timer(t0);
    assert_eq!(h.ui.borrow().legend.get(&0).unwrap(), "sent = 0.00");

    h.chart.on_timer(t0 + HOVER_DELAY);
    let ui = h.ui.borrow();
    assert_eq!(ui.legend.get(&0).unwrap(), "sent = 5.00");
    assert_eq!(ui.legend.get(&1).unwrap(), "recv = 10.00");
}

#[test]
fn test_out_of_bounds_hover_leaves_legend_untouched() {
    let mut h = setup();
    let t0 = Instant::now();
    h.chart.pointer_moved(PointerPosition::new(5.0, 99.0), t0);
    h.chart.on_timer(t0 + HOVER_DELAY);
    let ui = h.ui.borrow();
    assert_eq!(ui.legend.get(&0).unwrap(), "sent = 0.00");
    assert_eq!(ui.legend.get(&1).unwrap(), "recv = 0.00");
}

#[test]
fn test_hover_disabled_drops_notifications() {
    let ui = Rc::new(RefCell::new(UiState::default()));
    let raw = vec![RawSeries::new("sent", vec![(0.0, 0.0), (10.0, 10.0)])];
    let config = DisplayConfig {
        hover_enabled: false,
        ..DisplayConfig::default()
    };
    let mut chart = ChartController::new(
        "bench",
        raw,
        config,
        Box::new(FakeBackend {
            renders: Rc::new(RefCell::new(0)),
        }),
        Box::new(RecordingUi(ui.clone())),
    )
    .unwrap();

    let t0 = Instant::now();
    assert!(!chart.pointer_moved(PointerPosition::new(5.0, 5.0), t0));
    chart.on_timer(t0 + HOVER_DELAY);
    assert_eq!(ui.borrow().legend.get(&0).unwrap(), "sent = 0.00");
}

#[test]
fn test_instances_do_not_share_state() {
    let mut a = setup();
    let b = setup();
    a.chart.toggle("sent");
    assert_eq!(*a.renders.borrow(), 2);
    assert_eq!(*b.renders.borrow(), 1);
    assert!(b.chart.registry().get("sent").unwrap().selected);
}
