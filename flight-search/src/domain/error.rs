//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from loader and search errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Flight record data is internally inconsistent
    #[error("malformed flight: {0}")]
    MalformedFlight(&'static str),

    /// Consecutive legs don't share a connecting airport
    #[error("legs do not connect: {0} -> {1}")]
    LegsNotConnected(AirportCode, AirportCode),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,
}
