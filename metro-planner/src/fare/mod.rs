//! Fare calculation.
//!
//! Two distinct pricing operations live here:
//! - [`FareCalculator::path_fare`] is the authoritative fare: zone-banded
//!   per-distance pricing plus rider discounts, rounded to the nearest 0.5.
//! - [`FareCalculator::quick_estimate`] is a rough quote based only on the
//!   number of stations, shown alongside minimal-transfer routes.
//!
//! The two are intentionally not reconciled.

mod calculator;
mod config;

pub use calculator::{FareCalculator, round_to_half};
pub use config::{FareConfig, ZoneBand};
