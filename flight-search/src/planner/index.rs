//! Departure index over loaded flight records.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::domain::{AirportCode, FlightRecord};

/// Flights grouped by origin airport, in input order.
///
/// Built once per search session and read-only afterward, so it can be
/// shared across concurrent searches without locking. Per-origin order
/// equals input-file order; that order becomes the planner's
/// deterministic exploration order.
#[derive(Debug, Default)]
pub struct FlightIndex {
    by_origin: HashMap<AirportCode, Vec<Arc<FlightRecord>>>,
    airports: BTreeSet<AirportCode>,
}

impl FlightIndex {
    /// Build an index from loaded records.
    pub fn build(records: Vec<FlightRecord>) -> Self {
        let mut by_origin: HashMap<AirportCode, Vec<Arc<FlightRecord>>> = HashMap::new();
        let mut airports = BTreeSet::new();

        for record in records {
            airports.insert(record.origin.clone());
            airports.insert(record.destination.clone());
            by_origin
                .entry(record.origin.clone())
                .or_default()
                .push(Arc::new(record));
        }

        FlightIndex { by_origin, airports }
    }

    /// Flights departing from `airport`, in input order.
    ///
    /// Unknown airports yield an empty slice, not an error.
    pub fn outbound(&self, airport: &AirportCode) -> &[Arc<FlightRecord>] {
        self.by_origin.get(airport).map_or(&[], Vec::as_slice)
    }

    /// True iff the code appears anywhere in the data, as an origin or
    /// a destination.
    pub fn contains(&self, airport: &AirportCode) -> bool {
        self.airports.contains(airport)
    }

    /// All airport codes seen in the data, sorted. Used for
    /// unknown-airport diagnostics.
    pub fn known_airports(&self) -> impl Iterator<Item = &AirportCode> {
        self.airports.iter()
    }

    /// Number of flights in the index.
    pub fn flight_count(&self) -> usize {
        self.by_origin.values().map(Vec::len).sum()
    }
}
