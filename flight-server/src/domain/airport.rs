//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Iata` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_server::domain::Iata;
///
/// let dub = Iata::parse("DUB").unwrap();
/// assert_eq!(dub.as_str(), "DUB");
///
/// // Lowercase is rejected
/// assert!(Iata::parse("dub").is_err());
///
/// // Wrong length is rejected
/// assert!(Iata::parse("DU").is_err());
/// assert!(Iata::parse("DUBX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIata {
                    reason: "must be uppercase ASCII letters",
                });
            }
        }

        Ok(Iata([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse an IATA code, trimming whitespace and uppercasing first.
    ///
    /// Useful for user-supplied input like query parameters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIata> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Safe: validated as ASCII at construction
        std::str::from_utf8(&self.0).expect("Iata is always valid ASCII")
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 3 uppercase letters parse, and round-trip through as_str.
        #[test]
        fn valid_codes_round_trip(s in "[A-Z]{3}") {
            let code = Iata::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s);
        }

        /// Anything that is not exactly 3 uppercase letters is rejected.
        #[test]
        fn invalid_codes_rejected(s in "[a-z0-9]{0,5}") {
            if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_uppercase()) {
                prop_assert!(Iata::parse(&s).is_err());
            }
        }
    }
}
