//! Station code types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A station code in canonical form (e.g. `"A"`, `"KGX"`).
///
/// Canonical codes are non-empty, contain no whitespace and no lowercase
/// letters. Every code that reaches the network has been through this type,
/// so station identity is plain string equality.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationCode;
///
/// let a = StationCode::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// // Lowercase is rejected by the strict parser...
/// assert!(StationCode::parse("a").is_err());
///
/// // ...but accepted by the normalizing one.
/// assert_eq!(StationCode::parse_normalized(" a ").unwrap(), a);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code that is already in canonical form.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationCode {
                reason: "must not contain whitespace",
            });
        }

        if s.chars().any(char::is_lowercase) {
            return Err(InvalidStationCode {
                reason: "must be upper case",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Parse a station code from user or file input.
    ///
    /// Surrounding whitespace is trimmed and letters are upper-cased
    /// before validation, so `" kgx"` and `"KGX"` name the same station.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z0-9]{1,8}") {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Normalizing is idempotent and case-insensitive
        #[test]
        fn normalized_ignores_case(s in "[a-zA-Z0-9]{1,8}") {
            let lower = StationCode::parse_normalized(&s.to_lowercase()).unwrap();
            let upper = StationCode::parse_normalized(&s.to_uppercase()).unwrap();
            prop_assert_eq!(&lower, &upper);
            prop_assert_eq!(StationCode::parse_normalized(lower.as_str()).unwrap(), lower);
        }

        /// Lowercase letters are always rejected by the strict parser
        #[test]
        fn lowercase_rejected(s in "[a-z]{1,5}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
