//! Cumulative growth counters for a single array.
//!
//! [`GrowthMetrics`] records every reallocation an array performs so
//! callers and tests can observe the cost of growth directly rather than
//! inferring it from timings.

/// Reallocation counters, cumulative over the lifetime of one array.
///
/// `clear()` does not reset these; neither does any other mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthMetrics {
    /// Number of times new storage was allocated.
    pub growth_events: u64,
    /// Total elements moved from old storage into new storage.
    pub elements_relocated: u64,
    /// Largest capacity ever allocated.
    pub peak_capacity: usize,
}

impl GrowthMetrics {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            peak_capacity: capacity,
            ..Self::default()
        }
    }

    pub(crate) fn record_growth(&mut self, relocated: usize, new_capacity: usize) {
        self.growth_events += 1;
        self.elements_relocated += relocated as u64;
        self.peak_capacity = self.peak_capacity.max(new_capacity);
    }
}
