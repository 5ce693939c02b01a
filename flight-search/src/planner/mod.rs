//! Itinerary planner: index, backtracking search, pricing.
//!
//! The planner answers: "which chains of flights get me from A to B
//! within the connection rules, and what does each cost?" Search is
//! exhaustive depth-first backtracking over a prebuilt departure index;
//! ranking is a plain ascending price sort applied afterward.

mod config;
mod index;
mod pricing;
mod search;

pub use config::SearchConfig;
pub use index::FlightIndex;
pub use pricing::{price, sort_by_total_price};
pub use search::{PathSearch, SearchError};
