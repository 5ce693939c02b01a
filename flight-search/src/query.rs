//! Query boundary.
//!
//! The single entry point CLI (or any other frontend) calls: load the
//! flight data, run the search, price the results, and render the
//! output document. "No itineraries found" is a distinct outcome, not
//! an empty document.

use std::path::PathBuf;

use tracing::info;

use crate::domain::{AirportCode, DomainError, InvalidAirportCode};
use crate::loader::{LoadError, load_flights};
use crate::output::render;
use crate::planner::{FlightIndex, PathSearch, SearchConfig, SearchError, price};

/// A complete itinerary query, as collected from the user.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Path to the CSV flight data.
    pub source_path: PathBuf,

    /// Origin airport code, as typed.
    pub origin: String,

    /// Destination airport code, as typed.
    pub destination: String,

    /// Number of bags per passenger.
    pub bag_count: u32,

    /// Whether to search for round trips.
    pub round_trip: bool,
}

/// Outcome of a successful query.
#[derive(Debug)]
pub enum QueryOutcome {
    /// At least one itinerary was found; carries the rendered document.
    Found(String),

    /// The search ran but nothing satisfied the constraints.
    NoItineraries,
}

/// Error from running a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// An airport argument failed validation before the search ran
    #[error("{0}")]
    InvalidAirport(#[from] InvalidAirportCode),

    /// The flight data could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The search itself failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A domain invariant was violated
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The output document could not be serialized
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Run one itinerary query end to end.
///
/// # Errors
///
/// Fails before the search runs on an unloadable file or an airport
/// argument that is not even a well-formed code; fails with
/// [`SearchError::UnknownAirport`] diagnostics when the code is
/// well-formed but absent from the data.
pub fn run_query(
    request: &QueryRequest,
    config: &SearchConfig,
) -> Result<QueryOutcome, QueryError> {
    let origin = AirportCode::parse(&request.origin)?;
    let destination = AirportCode::parse(&request.destination)?;

    let records = load_flights(&request.source_path)?;
    let index = FlightIndex::build(records);
    info!(
        flights = index.flight_count(),
        "index built, running search"
    );

    let search = PathSearch::new(&index, config);
    let itineraries = search.search(&origin, &destination, request.bag_count, request.round_trip)?;

    if itineraries.is_empty() {
        return Ok(QueryOutcome::NoItineraries);
    }

    let mut priced = Vec::with_capacity(itineraries.len());
    for itinerary in &itineraries {
        priced.push(price(itinerary, request.bag_count)?);
    }

    Ok(QueryOutcome::Found(render(priced)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed";

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file
    }

    fn request(file: &NamedTempFile, origin: &str, destination: &str) -> QueryRequest {
        QueryRequest {
            source_path: file.path().to_path_buf(),
            origin: origin.into(),
            destination: destination.into(),
            bag_count: 1,
            round_trip: false,
        }
    }

    #[test]
    fn found_outcome_carries_sorted_document() {
        let file = write_csv(&[
            "F1,WIW,RFZ,2021-09-01T10:00:00,2021-09-01T11:00:00,300,10,2",
            "F2,WIW,RFZ,2021-09-01T12:00:00,2021-09-01T13:00:00,100,10,2",
        ]);

        let outcome = run_query(&request(&file, "WIW", "RFZ"), &SearchConfig::default()).unwrap();

        match outcome {
            QueryOutcome::Found(json) => {
                let docs: serde_json::Value = serde_json::from_str(&json).unwrap();
                let docs = docs.as_array().unwrap();
                assert_eq!(docs.len(), 2);
                // Cheapest first
                assert_eq!(docs[0]["flights"][0]["flight_no"], "F2");
                assert_eq!(docs[0]["bags_count"], 1);
            }
            QueryOutcome::NoItineraries => panic!("expected itineraries"),
        }
    }

    #[test]
    fn no_itineraries_is_distinct_from_empty_document() {
        // The only flight allows zero bags, and the request asks for
        // one, so the search legitimately returns nothing
        let file = write_csv(&[
            "F1,WIW,RFZ,2021-09-01T10:00:00,2021-09-01T11:00:00,100,10,0",
        ]);
        let outcome = run_query(&request(&file, "WIW", "RFZ"), &SearchConfig::default()).unwrap();
        assert!(matches!(outcome, QueryOutcome::NoItineraries));
    }

    #[test]
    fn garbage_airport_argument_fails_before_search() {
        let file = write_csv(&["F1,WIW,RFZ,2021-09-01T10:00:00,2021-09-01T11:00:00,100,10,2"]);

        let result = run_query(&request(&file, "", "RFZ"), &SearchConfig::default());
        assert!(matches!(result, Err(QueryError::InvalidAirport(_))));
    }

    #[test]
    fn unknown_airport_surfaces_search_diagnostics() {
        let file = write_csv(&["F1,WIW,RFZ,2021-09-01T10:00:00,2021-09-01T11:00:00,100,10,2"]);

        let result = run_query(&request(&file, "PRG", "RFZ"), &SearchConfig::default());
        match result {
            Err(QueryError::Search(SearchError::UnknownAirport { code, known })) => {
                assert_eq!(code.as_str(), "PRG");
                assert_eq!(known.len(), 2);
            }
            other => panic!("expected UnknownAirport, got {other:?}"),
        }
    }

    #[test]
    fn malformed_file_surfaces_load_error() {
        let file = write_csv(&["F1,WIW,RFZ,garbage,2021-09-01T11:00:00,100,10,2"]);

        let result = run_query(&request(&file, "WIW", "RFZ"), &SearchConfig::default());
        assert!(matches!(
            result,
            Err(QueryError::Load(LoadError::MalformedRecord { .. }))
        ));
    }

    #[test]
    fn round_trip_query_end_to_end() {
        let file = write_csv(&[
            "F1,WIW,RFZ,2021-09-01T10:00:00,2021-09-01T11:00:00,100,10,2",
            "R1,RFZ,WIW,2021-09-02T10:00:00,2021-09-02T11:00:00,120,10,2",
        ]);

        let mut req = request(&file, "WIW", "RFZ");
        req.round_trip = true;

        let outcome = run_query(&req, &SearchConfig::default()).unwrap();
        match outcome {
            QueryOutcome::Found(json) => {
                let docs: serde_json::Value = serde_json::from_str(&json).unwrap();
                let doc = &docs.as_array().unwrap()[0];
                assert_eq!(doc["flights"].as_array().unwrap().len(), 2);
                assert_eq!(doc["origin"], "WIW");
                assert_eq!(doc["destination"], "WIW");
                // 2 legs with 1 bag each: (100 + 10) + (120 + 10)
                assert_eq!(doc["total_price"], 240.0);
                assert_eq!(doc["travel_time"], "25:00:00");
            }
            QueryOutcome::NoItineraries => panic!("expected a round trip"),
        }
    }
}
