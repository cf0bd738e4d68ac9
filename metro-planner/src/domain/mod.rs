//! Domain types for the metro planner.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod error;
mod mode;
mod passenger;
mod path;
mod phone;
mod station;

pub use error::PassengerError;
pub use mode::SearchMode;
pub use passenger::{Bill, Passenger, PassengerBuilder, RiderClass, SENIOR_AGE};
pub use path::Path;
pub use phone::{InvalidPhoneNumber, PhoneNumber};
pub use station::StationId;
