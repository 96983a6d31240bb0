use tracing::debug;

use crate::data_types::{Series, SeriesRegistry};

/// SelectionController handles the business logic of visibility toggles
/// independently of any UI infrastructure to facilitate testing.
pub struct SelectionController;

impl SelectionController {
    /// Flip the `selected` flag of the named series.
    ///
    /// Unknown labels are tolerated as a no-op (a stray toggle must not
    /// crash the session). Returns whether the label was known.
    pub fn toggle(registry: &mut SeriesRegistry, label: &str) -> bool {
        match registry.get_mut(label) {
            Some(series) => {
                series.selected = !series.selected;
                true
            }
            None => {
                debug!(label, "ignoring toggle for unknown series");
                false
            }
        }
    }

    /// Series currently selected for rendering, in registry insertion order.
    pub fn active_subset(registry: &SeriesRegistry) -> Vec<&Series> {
        registry.all().iter().filter(|s| s.selected).collect()
    }
}
