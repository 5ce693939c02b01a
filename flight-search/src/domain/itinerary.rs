//! Itinerary types.
//!
//! An `Itinerary` is an ordered chain of connecting flights; a
//! `PricedItinerary` is the read-only projection of one, with the
//! aggregates the output document needs.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, DomainError, FlightRecord};

/// A chain of connecting flights from an origin to a destination.
///
/// Legs are shared as `Arc<FlightRecord>` so itineraries are cheap to
/// build during backtracking search.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of next)
///
/// A round trip is represented as a single itinerary whose legs are the
/// outbound chain followed by the return chain; the adjacency invariant
/// holds across the junction because the return starts where the
/// outbound ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Arc<FlightRecord>>,
}

impl Itinerary {
    /// Constructs an itinerary from legs, validating that they connect.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `legs` is empty
    /// - any adjacent pair fails `a.destination == b.origin`
    pub fn new(legs: Vec<Arc<FlightRecord>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            if window[0].destination != window[1].origin {
                return Err(DomainError::LegsNotConnected(
                    window[0].destination.clone(),
                    window[1].origin.clone(),
                ));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[Arc<FlightRecord>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the origin airport of the whole journey.
    pub fn origin(&self) -> &AirportCode {
        // Safe: validated non-empty at construction
        &self.legs.first().unwrap().origin
    }

    /// Returns the final destination airport.
    pub fn destination(&self) -> &AirportCode {
        // Safe: validated non-empty at construction
        &self.legs.last().unwrap().destination
    }

    /// Returns the departure time of the first leg.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.legs.first().unwrap().departure
    }

    /// Returns the arrival time of the last leg.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.legs.last().unwrap().arrival
    }

    /// Returns total travel time, first departure to last arrival.
    pub fn travel_time(&self) -> Duration {
        self.arrival_time() - self.departure_time()
    }
}

/// A finished itinerary with its derived aggregates.
///
/// Computed once by the pricer, consumed by the output boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItinerary {
    /// The underlying itinerary.
    pub itinerary: Itinerary,

    /// Sum over legs of `base_price + bag_price * bags_count`.
    pub total_price: f64,

    /// Bag capacity of the whole itinerary: the minimum across legs.
    pub bags_allowed: u32,

    /// The bag count the passenger asked for (distinct from capacity).
    pub bags_count: u32,

    /// Last arrival minus first departure.
    pub travel_time: Duration,
}

impl PricedItinerary {
    /// Returns the origin airport of the whole journey.
    pub fn origin(&self) -> &AirportCode {
        self.itinerary.origin()
    }

    /// Returns the final destination airport.
    pub fn destination(&self) -> &AirportCode {
        self.itinerary.destination()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn leg(no: &str, from: &str, to: &str, dep: &str, arr: &str) -> Arc<FlightRecord> {
        Arc::new(
            FlightRecord::new(
                no.into(),
                code(from),
                code(to),
                time(dep),
                time(arr),
                100.0,
                10.0,
                2,
            )
            .unwrap(),
        )
    }

    #[test]
    fn single_leg() {
        let it = Itinerary::new(vec![leg(
            "ZH1",
            "WIW",
            "RFZ",
            "2021-09-01T10:00:00",
            "2021-09-01T12:00:00",
        )])
        .unwrap();

        assert_eq!(it.leg_count(), 1);
        assert_eq!(it.origin(), &code("WIW"));
        assert_eq!(it.destination(), &code("RFZ"));
        assert_eq!(it.travel_time(), Duration::hours(2));
    }

    #[test]
    fn connecting_legs() {
        let it = Itinerary::new(vec![
            leg("ZH1", "WIW", "RFZ", "2021-09-01T10:00:00", "2021-09-01T12:00:00"),
            leg("ZH2", "RFZ", "ECV", "2021-09-01T14:00:00", "2021-09-01T16:00:00"),
        ])
        .unwrap();

        assert_eq!(it.leg_count(), 2);
        assert_eq!(it.origin(), &code("WIW"));
        assert_eq!(it.destination(), &code("ECV"));
        assert_eq!(it.departure_time(), time("2021-09-01T10:00:00"));
        assert_eq!(it.arrival_time(), time("2021-09-01T16:00:00"));
        assert_eq!(it.travel_time(), Duration::hours(6));
    }

    #[test]
    fn round_trip_junction_connects() {
        // Outbound WIW -> RFZ, return RFZ -> WIW as one itinerary
        let it = Itinerary::new(vec![
            leg("ZH1", "WIW", "RFZ", "2021-09-01T10:00:00", "2021-09-01T12:00:00"),
            leg("ZH9", "RFZ", "WIW", "2021-09-02T08:00:00", "2021-09-02T10:00:00"),
        ])
        .unwrap();

        assert_eq!(it.origin(), it.destination());
        assert_eq!(it.travel_time(), Duration::hours(24));
    }

    #[test]
    fn empty_is_rejected() {
        let result = Itinerary::new(vec![]);
        assert!(matches!(result, Err(DomainError::EmptyItinerary)));
    }

    #[test]
    fn disconnected_legs_rejected() {
        let result = Itinerary::new(vec![
            leg("ZH1", "WIW", "RFZ", "2021-09-01T10:00:00", "2021-09-01T12:00:00"),
            leg("ZH2", "ECV", "WIW", "2021-09-01T14:00:00", "2021-09-01T16:00:00"),
        ]);

        assert!(matches!(result, Err(DomainError::LegsNotConnected(_, _))));
    }
}
