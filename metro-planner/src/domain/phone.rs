//! Phone number type.

use std::fmt;

/// Error returned when parsing an invalid phone number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid phone number: {reason}")]
pub struct InvalidPhoneNumber {
    reason: &'static str,
}

/// A 10-digit phone number.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("9876543210").unwrap();
/// assert_eq!(phone.as_str(), "9876543210");
///
/// // Wrong length is rejected
/// assert!(PhoneNumber::parse("12345").is_err());
///
/// // Non-digits are rejected
/// assert!(PhoneNumber::parse("98765-4321").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumber([u8; 10]);

impl PhoneNumber {
    /// Parse a phone number from a string.
    ///
    /// Surrounding whitespace is ignored; what remains must be exactly
    /// 10 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidPhoneNumber> {
        let bytes = s.trim().as_bytes();

        if bytes.len() != 10 {
            return Err(InvalidPhoneNumber {
                reason: "must be exactly 10 digits",
            });
        }

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidPhoneNumber {
                reason: "must contain only digits 0-9",
            });
        }

        let mut digits = [0u8; 10];
        digits.copy_from_slice(bytes);
        Ok(PhoneNumber(digits))
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.as_str())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip(s in "[0-9]{10}") {
            let phone = PhoneNumber::parse(&s).unwrap();
            prop_assert_eq!(phone.as_str(), s.as_str());
        }

        #[test]
        fn wrong_length_rejected(s in "[0-9]{0,9}|[0-9]{11,15}") {
            prop_assert!(PhoneNumber::parse(&s).is_err());
        }

        #[test]
        fn letters_rejected(s in "[0-9a-z]{10}".prop_filter("has letter", |s| s.chars().any(|c| c.is_ascii_alphabetic()))) {
            prop_assert!(PhoneNumber::parse(&s).is_err());
        }
    }
}
