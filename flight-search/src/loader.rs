//! CSV flight-data loader.
//!
//! Reads the delimited input file into validated [`FlightRecord`]s.
//! All malformed-row diagnostics surface here, before the planner runs.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AirportCode, FlightRecord};

/// Timestamp format used by the input data (naive ISO-8601).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error from loading flight data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read or is not well-formed CSV
    #[error("failed to read flight data: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed as CSV but its fields are invalid
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// One raw CSV row, before field validation.
#[derive(Debug, Deserialize)]
struct RawFlight {
    flight_no: String,
    origin: String,
    destination: String,
    departure: String,
    arrival: String,
    base_price: f64,
    bag_price: f64,
    bags_allowed: u32,
}

impl RawFlight {
    fn into_record(self) -> Result<FlightRecord, String> {
        let origin = AirportCode::parse(&self.origin).map_err(|e| e.to_string())?;
        let destination = AirportCode::parse(&self.destination).map_err(|e| e.to_string())?;

        let departure = chrono::NaiveDateTime::parse_from_str(&self.departure, TIMESTAMP_FORMAT)
            .map_err(|e| format!("unparseable departure '{}': {e}", self.departure))?;
        let arrival = chrono::NaiveDateTime::parse_from_str(&self.arrival, TIMESTAMP_FORMAT)
            .map_err(|e| format!("unparseable arrival '{}': {e}", self.arrival))?;

        FlightRecord::new(
            self.flight_no,
            origin,
            destination,
            departure,
            arrival,
            self.base_price,
            self.bag_price,
            self.bags_allowed,
        )
        .map_err(|e| e.to_string())
    }
}

/// Load flight records from a CSV file.
///
/// Expected header:
/// `flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed`
/// with ISO-8601 timestamps.
///
/// # Errors
///
/// Returns `Err` on IO failure, CSV syntax failure, or the first row
/// whose fields do not validate (unparseable timestamp, negative price,
/// arrival before departure). The error names the 1-based file line.
pub fn load_flights(path: &Path) -> Result<Vec<FlightRecord>, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for (i, row) in reader.deserialize::<RawFlight>().enumerate() {
        // Line 1 is the header
        let line = i + 2;
        let raw = row?;
        let record = raw
            .into_record()
            .map_err(|reason| LoadError::MalformedRecord { line, reason })?;
        records.push(record);
    }

    debug!(count = records.len(), path = %path.display(), "loaded flight data");
    Ok(records)
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

    #[test]
    fn load_valid_file() {
        let file = write_csv(&[
            "ZH214,WIW,RFZ,2021-09-01T23:20:00,2021-09-02T03:50:00,168,12,2",
            "ZH214,RFZ,WIW,2021-09-04T23:20:00,2021-09-05T03:50:00,168,12,2",
        ]);

        let records = load_flights(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].flight_no, "ZH214");
        assert_eq!(records[0].origin.as_str(), "WIW");
        assert_eq!(records[0].destination.as_str(), "RFZ");
        assert_eq!(records[0].base_price, 168.0);
        assert_eq!(records[0].bag_price, 12.0);
        assert_eq!(records[0].bags_allowed, 2);
    }

    #[test]
    fn input_order_is_preserved() {
        let file = write_csv(&[
            "F3,AAA,BBB,2021-09-01T10:00:00,2021-09-01T11:00:00,10,1,1",
            "F1,AAA,BBB,2021-09-01T12:00:00,2021-09-01T13:00:00,10,1,1",
            "F2,AAA,BBB,2021-09-01T14:00:00,2021-09-01T15:00:00,10,1,1",
        ]);

        let records = load_flights(file.path()).unwrap();
        let nos: Vec<&str> = records.iter().map(|r| r.flight_no.as_str()).collect();
        assert_eq!(nos, ["F3", "F1", "F2"]);
    }

    #[test]
    fn bad_timestamp_names_the_line() {
        let file = write_csv(&[
            "F1,AAA,BBB,2021-09-01T10:00:00,2021-09-01T11:00:00,10,1,1",
            "F2,AAA,BBB,not-a-time,2021-09-01T13:00:00,10,1,1",
        ]);

        match load_flights(file.path()) {
            Err(LoadError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("departure"), "reason was: {reason}");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn negative_price_is_malformed() {
        let file = write_csv(&["F1,AAA,BBB,2021-09-01T10:00:00,2021-09-01T11:00:00,-5,1,1"]);
        assert!(matches!(
            load_flights(file.path()),
            Err(LoadError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn arrival_before_departure_is_malformed() {
        let file = write_csv(&["F1,AAA,BBB,2021-09-01T12:00:00,2021-09-01T10:00:00,10,1,1"]);
        assert!(matches!(
            load_flights(file.path()),
            Err(LoadError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn negative_bag_capacity_is_a_csv_error() {
        // bags_allowed deserializes as u32, so -1 fails in the csv layer
        let file = write_csv(&["F1,AAA,BBB,2021-09-01T10:00:00,2021-09-01T11:00:00,10,1,-1"]);
        assert!(matches!(load_flights(file.path()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn missing_file_is_a_csv_error() {
        let err = load_flights(Path::new("/nonexistent/flights.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn empty_file_with_header_loads_nothing() {
        let file = write_csv(&[]);
        let records = load_flights(file.path()).unwrap();
        assert!(records.is_empty());
    }
}
