//! Output document types.
//!
//! Serializes priced itineraries into the JSON document the caller
//! consumes: one entry per itinerary, legs re-expressed in full with
//! textual timestamps, sorted ascending by total price.

use chrono::Duration;
use serde::Serialize;

use crate::domain::{FlightRecord, PricedItinerary};
use crate::planner::sort_by_total_price;

/// Timestamp format for rendered flight times (round-trippable with
/// the loader's input format).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One flight leg in the output document.
#[derive(Debug, Serialize)]
pub struct LegDocument {
    /// Flight number
    pub flight_no: String,

    /// Departure airport code
    pub origin: String,

    /// Arrival airport code
    pub destination: String,

    /// Scheduled departure, ISO-8601 text
    pub departure: String,

    /// Scheduled arrival, ISO-8601 text
    pub arrival: String,

    /// Ticket price without baggage
    pub base_price: f64,

    /// Price per checked bag
    pub bag_price: f64,

    /// Bag capacity of this flight
    pub bags_allowed: u32,
}

impl From<&FlightRecord> for LegDocument {
    fn from(flight: &FlightRecord) -> Self {
        LegDocument {
            flight_no: flight.flight_no.clone(),
            origin: flight.origin.to_string(),
            destination: flight.destination.to_string(),
            departure: flight.departure.format(TIMESTAMP_FORMAT).to_string(),
            arrival: flight.arrival.format(TIMESTAMP_FORMAT).to_string(),
            base_price: flight.base_price,
            bag_price: flight.bag_price,
            bags_allowed: flight.bags_allowed,
        }
    }
}

/// One itinerary in the output document.
#[derive(Debug, Serialize)]
pub struct ItineraryDocument {
    /// Legs in travel order
    pub flights: Vec<LegDocument>,

    /// Bag capacity of the whole itinerary (minimum across legs)
    pub bags_allowed: u32,

    /// The bag count that was searched for
    pub bags_count: u32,

    /// Origin airport of the whole journey
    pub origin: String,

    /// Final destination airport
    pub destination: String,

    /// Total price for the requested bag count
    pub total_price: f64,

    /// Total travel time as "H:MM:SS" text
    pub travel_time: String,
}

impl From<&PricedItinerary> for ItineraryDocument {
    fn from(priced: &PricedItinerary) -> Self {
        ItineraryDocument {
            flights: priced
                .itinerary
                .legs()
                .iter()
                .map(|leg| LegDocument::from(leg.as_ref()))
                .collect(),
            bags_allowed: priced.bags_allowed,
            bags_count: priced.bags_count,
            origin: priced.origin().to_string(),
            destination: priced.destination().to_string(),
            total_price: priced.total_price,
            travel_time: format_duration(priced.travel_time),
        }
    }
}

/// Render a duration as "H:MM:SS". Hours are not zero-padded and may
/// exceed 24 for multi-day round trips.
fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

/// Render priced itineraries as a pretty JSON document, sorted
/// ascending by total price.
///
/// # Errors
///
/// Returns `Err` only if JSON serialization itself fails.
pub fn render(mut itineraries: Vec<PricedItinerary>) -> Result<String, serde_json::Error> {
    sort_by_total_price(&mut itineraries);
    let documents: Vec<ItineraryDocument> =
        itineraries.iter().map(ItineraryDocument::from).collect();
    serde_json::to_string_pretty(&documents)
}
