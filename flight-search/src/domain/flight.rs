//! Scheduled flight type.

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, DomainError};

/// One scheduled flight, as loaded from the input data.
///
/// Immutable after construction. Validated so that downstream code can
/// rely on `arrival >= departure` and non-negative prices without
/// re-checking.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use flight_search::domain::{AirportCode, FlightRecord};
///
/// let dep = NaiveDate::from_ymd_opt(2021, 9, 1)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let arr = dep + chrono::Duration::hours(2);
///
/// let flight = FlightRecord::new(
///     "ZH214".into(),
///     AirportCode::parse("WIW").unwrap(),
///     AirportCode::parse("RFZ").unwrap(),
///     dep,
///     arr,
///     168.0,
///     12.0,
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(flight.duration(), chrono::Duration::hours(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    /// Flight number, e.g. "ZH214". Opaque identifier.
    pub flight_no: String,

    /// Departure airport.
    pub origin: AirportCode,

    /// Arrival airport.
    pub destination: AirportCode,

    /// Scheduled departure time (naive; the source data carries no zone).
    pub departure: NaiveDateTime,

    /// Scheduled arrival time.
    pub arrival: NaiveDateTime,

    /// Ticket price without baggage.
    pub base_price: f64,

    /// Price per checked bag.
    pub bag_price: f64,

    /// Number of bags allowed per passenger on this flight.
    pub bags_allowed: u32,
}

impl FlightRecord {
    /// Construct a flight record, validating internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `arrival` is before `departure`
    /// - either price is negative or not finite
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_no: String,
        origin: AirportCode,
        destination: AirportCode,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        base_price: f64,
        bag_price: f64,
        bags_allowed: u32,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::MalformedFlight("arrival is before departure"));
        }

        if !base_price.is_finite() || base_price < 0.0 {
            return Err(DomainError::MalformedFlight(
                "base price must be non-negative",
            ));
        }

        if !bag_price.is_finite() || bag_price < 0.0 {
            return Err(DomainError::MalformedFlight(
                "bag price must be non-negative",
            ));
        }

        Ok(FlightRecord {
            flight_no,
            origin,
            destination,
            departure,
            arrival,
            base_price,
            bag_price,
            bags_allowed,
        })
    }

    /// Returns the in-air duration of this flight.
    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }

    /// Returns the price of this flight for the given bag count.
    pub fn price_with_bags(&self, bag_count: u32) -> f64 {
        self.base_price + self.bag_price * f64::from(bag_count)
    }
}
