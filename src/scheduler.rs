use std::time::{Duration, Instant};

use tracing::trace;

use crate::data_types::PointerPosition;

/// Delay between pointer movement and the legend update it triggers.
pub const HOVER_DELAY: Duration = Duration::from_millis(50);

/// Single-slot coalescer for pointer-move notifications.
///
/// A burst of notifications inside one delay window collapses into a single
/// interpolation pass against the last position. At most one deadline is
/// pending at any time. Time is passed in by the caller so the logic stays
/// independent of the host event loop.
#[derive(Debug, Default)]
pub struct HoverScheduler {
    latest: Option<PointerPosition>,
    deadline: Option<Instant>,
}

impl HoverScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move notification.
    ///
    /// Returns `true` when the caller must arm a wake after [`HOVER_DELAY`];
    /// `false` means a deadline is already pending and only the stored
    /// position was refreshed.
    pub fn note_pointer(&mut self, pos: PointerPosition, now: Instant) -> bool {
        self.latest = Some(pos);
        if self.deadline.is_some() {
            trace!(x = pos.x, y = pos.y, "coalesced pointer move into pending window");
            return false;
        }
        self.deadline = Some(now + HOVER_DELAY);
        true
    }

    /// Consume the stored position once the deadline has passed.
    ///
    /// Fires at most once per window; the pending deadline is cleared so the
    /// next notification arms a fresh one.
    pub fn take_due(&mut self, now: Instant) -> Option<PointerPosition> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.latest.take()
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
