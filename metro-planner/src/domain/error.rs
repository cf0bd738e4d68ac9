//! Domain error types.

use super::InvalidPhoneNumber;

/// Errors from constructing a [`Passenger`](super::Passenger).
///
/// Each is fatal to the single construction attempt only; the caller is
/// expected to retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassengerError {
    /// Name was empty or whitespace
    #[error("name cannot be empty")]
    EmptyName,

    /// Age outside 1..=120
    #[error("invalid age: {0}")]
    InvalidAge(u32),

    /// Phone number was not 10 digits
    #[error(transparent)]
    InvalidPhone(#[from] InvalidPhoneNumber),
}
