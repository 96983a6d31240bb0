use crate::backend::PlotHandle;
use crate::data_types::{PlotPoint, PointerPosition};

/// Interpolated value for one legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendValue {
    /// Legend row index, equal to the series' render-order index.
    pub row: usize,
    pub label: String,
    pub y: f64,
}

/// HoverInterpolator computes one linearly interpolated value per rendered
/// series at the pointer's x-coordinate. Pure queries; nothing is mutated.
pub struct HoverInterpolator;

impl HoverInterpolator {
    /// Interpolate every rendered series at `pos.x`.
    ///
    /// Returns `None` when the pointer lies outside the axis bounds on
    /// either axis; the caller then leaves the legend untouched. Series
    /// without samples produce no row.
    pub fn interpolate(pos: PointerPosition, handle: &dyn PlotHandle) -> Option<Vec<LegendValue>> {
        if !handle.axis_bounds().contains(pos) {
            return None;
        }

        let values = handle
            .series_data()
            .iter()
            .enumerate()
            .filter_map(|(row, series)| {
                Self::value_at(&series.points, pos.x).map(|y| LegendValue {
                    row,
                    label: series.label.clone(),
                    y,
                })
            })
            .collect();

        Some(values)
    }

    /// Value of one series at `x`, assuming points sorted ascending by x.
    ///
    /// Positions before the first sample clamp to the first value, positions
    /// after the last clamp to the last. A degenerate segment (two bracketing
    /// points sharing an x) yields the nearer point's y instead of NaN.
    pub fn value_at(points: &[PlotPoint], x: f64) -> Option<f64> {
        // First index with point.x > x (binary search; assumes sorted by X)
        let j = points.partition_point(|p| p.x <= x);
        let before = j.checked_sub(1).map(|i| points[i]);
        let after = points.get(j).copied();

        match (before, after) {
            (None, None) => None,
            (None, Some(p2)) => Some(p2.y),
            (Some(p1), None) => Some(p1.y),
            (Some(p1), Some(p2)) => {
                let dx = p2.x - p1.x;
                if dx <= f64::EPSILON {
                    if x - p1.x <= p2.x - x {
                        Some(p1.y)
                    } else {
                        Some(p2.y)
                    }
                } else {
                    Some(p1.y + (p2.y - p1.y) * (x - p1.x) / dx)
                }
            }
        }
    }
}
