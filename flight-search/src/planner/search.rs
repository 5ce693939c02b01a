//! Backtracking itinerary search.
//!
//! Enumerates every simple path of connecting flights from an origin to
//! a destination that satisfies the layover window and bag-capacity
//! constraints, in deterministic input order. Round trips run the same
//! enumeration a second time per completed outbound leg, bridged by a
//! ground-time window.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::domain::{AirportCode, FlightRecord, Itinerary};

use super::config::SearchConfig;
use super::index::FlightIndex;

fn known_list(known: &[AirportCode]) -> String {
    let codes: Vec<&str> = known.iter().map(AirportCode::as_str).collect();
    codes.join(", ")
}

/// Error from itinerary search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Requested origin or destination does not appear in the data
    #[error("unknown airport {code}; known airports are: {}", known_list(.known))]
    UnknownAirport {
        code: AirportCode,
        known: Vec<AirportCode>,
    },
}

/// Itinerary planner over a prebuilt [`FlightIndex`].
///
/// The search is exhaustive within its feasibility checks: every simple
/// path is explored, and ranking is left to the pricer. Exploration
/// order is the index's per-origin input order, so results are
/// deterministic across runs.
pub struct PathSearch<'a> {
    index: &'a FlightIndex,
    config: &'a SearchConfig,
}

impl<'a> PathSearch<'a> {
    /// Create a planner over an index.
    pub fn new(index: &'a FlightIndex, config: &'a SearchConfig) -> Self {
        Self { index, config }
    }

    /// Find all itineraries from `origin` to `destination` accepting
    /// `bag_count` bags, optionally with a return leg.
    ///
    /// Searching `origin == destination` is legal and returns no
    /// itineraries: the origin is seeded into the visited set, so no
    /// closing flight is ever accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownAirport`] if either endpoint never
    /// appears in the data, as an origin or a destination.
    pub fn search(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        bag_count: u32,
        round_trip: bool,
    ) -> Result<Vec<Itinerary>, SearchError> {
        self.check_known(origin)?;
        self.check_known(destination)?;

        debug!(
            origin = %origin,
            destination = %destination,
            bag_count,
            round_trip,
            "searching itineraries"
        );

        let mut seed = HashSet::new();
        seed.insert(origin.clone());
        let outbound_legs = self.enumerate_legs(origin, destination, bag_count, None, seed);

        let mut results = Vec::new();

        if round_trip {
            for outbound in &outbound_legs {
                // Safe: enumerate_legs only produces non-empty paths
                let ground_reference = outbound.last().unwrap().arrival;

                let mut seed = HashSet::new();
                seed.insert(destination.clone());
                if self.config.shared_visited_across_legs {
                    // Unified variant: the return may not pass through
                    // airports the outbound already visited. The trip
                    // origin is deliberately left out so the return can
                    // still close into it.
                    for leg in outbound {
                        seed.insert(leg.destination.clone());
                    }
                }

                let return_legs = self.enumerate_legs(
                    destination,
                    origin,
                    bag_count,
                    Some(ground_reference),
                    seed,
                );

                for ret in return_legs {
                    let mut legs = outbound.clone();
                    legs.extend(ret);
                    if let Ok(itinerary) = Itinerary::new(legs) {
                        results.push(itinerary);
                    }
                }
            }
        } else {
            for legs in outbound_legs {
                if let Ok(itinerary) = Itinerary::new(legs) {
                    results.push(itinerary);
                }
            }
        }

        debug!(count = results.len(), "search finished");
        Ok(results)
    }

    fn check_known(&self, airport: &AirportCode) -> Result<(), SearchError> {
        if self.index.contains(airport) {
            return Ok(());
        }

        Err(SearchError::UnknownAirport {
            code: airport.clone(),
            known: self.index.known_airports().cloned().collect(),
        })
    }

    /// Enumerate all feasible single-direction legs from `start` to
    /// `target`.
    ///
    /// `bridge` carries the outbound leg's final arrival when this is a
    /// return leg; the first flight's departure must then fall within
    /// the ground-time window after it. With no bridge the first flight
    /// has no incoming layover to satisfy.
    fn enumerate_legs(
        &self,
        start: &AirportCode,
        target: &AirportCode,
        bag_count: u32,
        bridge: Option<NaiveDateTime>,
        mut visited: HashSet<AirportCode>,
    ) -> Vec<Vec<Arc<FlightRecord>>> {
        let mut completed = Vec::new();
        let mut path: Vec<Arc<FlightRecord>> = Vec::new();

        for first in self.index.outbound(start) {
            if first.bags_allowed < bag_count {
                trace!(flight = %first.flight_no, "rejected: bag capacity");
                continue;
            }
            if visited.contains(&first.destination) {
                continue;
            }
            if let Some(reference) = bridge {
                let gap = first.departure - reference;
                let (min_ground, max_ground) = self.config.return_ground_time_range();
                if gap < min_ground || gap > max_ground {
                    trace!(flight = %first.flight_no, "rejected: ground time");
                    continue;
                }
            }

            path.push(first.clone());
            if first.destination == *target {
                completed.push(path.clone());
            } else {
                visited.insert(first.destination.clone());
                self.extend(
                    &first.destination,
                    first.arrival,
                    target,
                    bag_count,
                    &mut path,
                    &mut visited,
                    &mut completed,
                );
                visited.remove(&first.destination);
            }
            path.pop();
        }

        completed
    }

    /// One backtracking step: try every outbound flight from `frontier`
    /// against the feasibility checks, recording completed legs and
    /// recursing on the rest.
    ///
    /// A flight that reaches `target` closes the leg and is terminal
    /// for its branch; the search never continues past the target.
    #[allow(clippy::too_many_arguments)]
    fn extend(
        &self,
        frontier: &AirportCode,
        reference_arrival: NaiveDateTime,
        target: &AirportCode,
        bag_count: u32,
        path: &mut Vec<Arc<FlightRecord>>,
        visited: &mut HashSet<AirportCode>,
        completed: &mut Vec<Vec<Arc<FlightRecord>>>,
    ) {
        let (min_layover, max_layover) = self.config.connection_layover_range();

        for flight in self.index.outbound(frontier) {
            if visited.contains(&flight.destination) {
                continue;
            }

            let layover = flight.departure - reference_arrival;
            if layover < min_layover || layover > max_layover {
                trace!(flight = %flight.flight_no, "rejected: layover window");
                continue;
            }

            if flight.bags_allowed < bag_count {
                trace!(flight = %flight.flight_no, "rejected: bag capacity");
                continue;
            }

            path.push(flight.clone());
            if flight.destination == *target {
                trace!(legs = path.len(), "leg completed");
                completed.push(path.clone());
            } else {
                visited.insert(flight.destination.clone());
                self.extend(
                    &flight.destination,
                    flight.arrival,
                    target,
                    bag_count,
                    path,
                    visited,
                    completed,
                );
                visited.remove(&flight.destination);
            }
            path.pop();
        }
    }
}
