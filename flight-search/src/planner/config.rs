//! Search configuration for the itinerary planner.

use chrono::Duration;

/// Configuration parameters for itinerary search.
///
/// The connection window and the round-trip ground-time window are both
/// inclusive ranges. The ground-time ceiling in particular is a product
/// decision with no single canonical value, so it is configuration
/// rather than a constant.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum connection time between legs (minutes), inclusive.
    /// Connections tighter than this are rejected.
    pub min_layover_mins: i64,

    /// Maximum connection time between legs (minutes), inclusive.
    /// Longer waits are rejected.
    pub max_layover_mins: i64,

    /// Minimum ground time at the far airport before the return leg
    /// departs (minutes), inclusive.
    pub min_ground_time_mins: i64,

    /// Maximum ground time at the far airport (minutes), inclusive.
    /// This is the total allowed turnaround window for a round trip.
    pub max_ground_time_mins: i64,

    /// When true, the return leg inherits the outbound leg's visited
    /// airports and cannot pass through them again. When false the two
    /// legs are constrained independently.
    pub shared_visited_across_legs: bool,
}

impl SearchConfig {
    /// Returns the inclusive connection window as Durations.
    pub fn connection_layover_range(&self) -> (Duration, Duration) {
        (
            Duration::minutes(self.min_layover_mins),
            Duration::minutes(self.max_layover_mins),
        )
    }

    /// Returns the inclusive round-trip ground-time window as Durations.
    pub fn return_ground_time_range(&self) -> (Duration, Duration) {
        (
            Duration::minutes(self.min_ground_time_mins),
            Duration::minutes(self.max_ground_time_mins),
        )
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 60,
            max_layover_mins: 360, // 6 hours
            min_ground_time_mins: 60,
            max_ground_time_mins: 7200, // 120 hours
            shared_visited_across_legs: false,
        }
    }
}
