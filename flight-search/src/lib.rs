//! Flight itinerary search.
//!
//! Finds every valid multi-leg itinerary between two airports in a CSV
//! flight schedule, subject to connection-time and baggage-capacity
//! constraints, optionally including a return leg, ranked by total
//! price.

pub mod domain;
pub mod loader;
pub mod output;
pub mod planner;
pub mod query;
