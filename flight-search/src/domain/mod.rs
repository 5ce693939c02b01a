//! Domain types for the itinerary search engine.
//!
//! These types represent validated flight data. Invariants are
//! enforced at construction time, so code that receives them can trust
//! their validity.

mod airport;
mod error;
mod flight;
mod itinerary;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use flight::FlightRecord;
pub use itinerary::{Itinerary, PricedItinerary};
