//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// An airport code, e.g. "PRG" or "WIW".
///
/// Codes are opaque keys taken from the flight data: they are not
/// checked against any airport registry, but a `AirportCode` value is
/// guaranteed non-empty and free of whitespace, so it is always usable
/// as an index key and printable in diagnostics.
///
/// # Examples
///
/// ```
/// use flight_search::domain::AirportCode;
///
/// let prg = AirportCode::parse("PRG").unwrap();
/// assert_eq!(prg.as_str(), "PRG");
///
/// assert!(AirportCode::parse("").is_err());
/// assert!(AirportCode::parse("P G").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode(String);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be non-empty and contain no whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        if s.is_empty() {
            return Err(InvalidAirportCode {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidAirportCode {
                reason: "must not contain whitespace",
            });
        }

        Ok(AirportCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.0)
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
