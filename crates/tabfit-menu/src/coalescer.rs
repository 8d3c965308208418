#![forbid(unsafe_code)]

//! Resize coalescing for container width notifications.
//!
//! Size-change notifications arrive in bursts while a window is being dragged.
//! Recomputing the split for every one of them is wasted work: only the width
//! present at the next frame matters. [`ResizeCoalescer`] keeps the latest
//! width and hands it out once per flush.
//!
//! ```
//! use tabfit_menu::ResizeCoalescer;
//!
//! let mut coalescer = ResizeCoalescer::new();
//! coalescer.push(300.0);
//! coalescer.push(280.0);
//! coalescer.push(240.0);
//! assert_eq!(coalescer.pending_count(), 3);
//!
//! // Next frame: only the latest width survives
//! assert_eq!(coalescer.flush(), Some(240.0));
//! assert_eq!(coalescer.flush(), None);
//! ```

/// Latest-wins coalescer for container widths.
///
/// Not thread-safe; drive it from the thread that owns the menu.
#[derive(Debug, Clone, Default)]
pub struct ResizeCoalescer {
    /// Most recent width (latest wins).
    pending: Option<f64>,
    /// Notifications folded into `pending` since the last flush.
    count: u32,
}

impl ResizeCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new container width, replacing any pending one.
    pub fn push(&mut self, width: f64) {
        self.pending = Some(width);
        self.count = self.count.saturating_add(1);
    }

    /// Take the pending width, if any. The coalescer is empty afterwards.
    #[must_use]
    pub fn flush(&mut self) -> Option<f64> {
        self.count = 0;
        self.pending.take()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of notifications coalesced since the last flush.
    #[must_use]
    pub fn pending_count(&self) -> u32 {
        self.count
    }

    /// Drop any pending width without applying it.
    pub fn clear(&mut self) {
        self.pending = None;
        self.count = 0;
    }
}
