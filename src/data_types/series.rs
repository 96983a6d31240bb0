use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::data::PlotPoint;
use crate::error::ChartError;

/// Raw input for one series: a label and its samples.
///
/// Deserializes from the JSON shape produced by the offline data builder:
/// `["label", [[x, y], ...]]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawSeries(pub String, pub Vec<(f64, f64)>);

impl RawSeries {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self(label.into(), points)
    }
}

/// One named, colored, independently toggleable data line.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Unique key within the registry.
    pub label: String,

    /// Samples, sorted ascending by x. Interpolation relies on this order
    /// and never re-sorts.
    pub points: Vec<PlotPoint>,

    /// Assigned by first-seen insertion order, never reassigned afterwards.
    pub color_index: usize,

    /// Whether the series is part of the active subset.
    pub selected: bool,
}

/// Insertion-ordered collection of series, keyed by label.
#[derive(Clone, Debug, Default)]
pub struct SeriesRegistry {
    series: Vec<Series>,
    index: HashMap<String, usize>,
}

impl SeriesRegistry {
    /// Build the registry from raw input, assigning color indices in input
    /// order and selecting every series.
    ///
    /// Fails on the first repeated label; no partial registry is returned.
    pub fn build(raw: impl IntoIterator<Item = RawSeries>) -> Result<Self, ChartError> {
        let mut series = Vec::new();
        let mut index = HashMap::new();

        for RawSeries(label, points) in raw {
            if index.contains_key(&label) {
                return Err(ChartError::DuplicateLabel(label));
            }
            index.insert(label.clone(), series.len());
            series.push(Series {
                label,
                points: points.into_iter().map(|(x, y)| PlotPoint::new(x, y)).collect(),
                color_index: series.len(),
                selected: true,
            });
        }

        Ok(Self { series, index })
    }

    /// Build the registry from a JSON document: `[["label", [[x, y], ...]], ...]`.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let raw: Vec<RawSeries> =
            serde_json::from_str(json).map_err(|e| ChartError::InvalidInput(e.to_string()))?;
        Self::build(raw)
    }

    pub fn get(&self, label: &str) -> Option<&Series> {
        self.index.get(label).map(|&i| &self.series[i])
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Series> {
        self.index.get(label).map(|&i| &mut self.series[i])
    }

    /// All series in insertion order.
    pub fn all(&self) -> &[Series] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
