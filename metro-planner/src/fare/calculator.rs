//! Fare calculator.

use crate::domain::{Path, RiderClass};
use crate::network::MetroNetwork;

use super::config::FareConfig;

/// Round to the nearest multiple of 0.5 (halves round up).
pub fn round_to_half(amount: f64) -> f64 {
    (amount * 2.0).round() / 2.0
}

/// Converts trips into fares.
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    config: FareConfig,
}

impl FareCalculator {
    /// Create a calculator with the given configuration.
    pub fn new(config: FareConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// Fare for a trip of the given total distance.
    ///
    /// `base + distance × zone multiplier`, then the student and senior
    /// factors in that order (both apply if both flags are set), rounded to
    /// the nearest 0.5.
    pub fn distance_fare(&self, distance: u32, rider: RiderClass) -> f64 {
        let mut total =
            self.config.base_fare + f64::from(distance) * self.config.zone_multiplier(distance);

        if rider.student {
            total *= self.config.student_factor;
        }
        if rider.senior {
            total *= self.config.senior_factor;
        }

        round_to_half(total)
    }

    /// Authoritative fare for travelling along `path`.
    ///
    /// An empty path costs nothing.
    pub fn path_fare(&self, network: &MetroNetwork, path: &Path, rider: RiderClass) -> f64 {
        if path.is_empty() {
            return 0.0;
        }
        self.distance_fare(network.path_distance(path), rider)
    }

    /// Rough quote: `base + station count × per-station amount`.
    ///
    /// Ignores distance, zones, discounts and rounding.
    pub fn quick_estimate(&self, path: &Path) -> f64 {
        self.config.base_fare + path.len() as f64 * self.config.estimate_per_station
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rider() -> impl Strategy<Value = RiderClass> {
        (any::<bool>(), any::<bool>()).prop_map(|(student, senior)| RiderClass::new(student, senior))
    }

    proptest! {
        /// Every fare is an exact multiple of 0.5
        #[test]
        fn fare_is_multiple_of_half(distance in 0u32..200, rider in rider()) {
            let fare = FareCalculator::default().distance_fare(distance, rider);
            prop_assert_eq!((fare * 2.0).fract(), 0.0);
        }

        /// Discounts never increase the fare
        #[test]
        fn discounts_are_monotone(distance in 0u32..200) {
            let calc = FareCalculator::default();
            let full = calc.distance_fare(distance, RiderClass::FULL_FARE);
            let student = calc.distance_fare(distance, RiderClass::new(true, false));
            let senior = calc.distance_fare(distance, RiderClass::new(false, true));
            let both = calc.distance_fare(distance, RiderClass::new(true, true));

            prop_assert!(student <= full);
            prop_assert!(senior <= full);
            prop_assert!(both <= student.min(senior));
        }

        /// Longer trips never cost less
        #[test]
        fn fare_grows_with_distance(distance in 0u32..200, extra in 0u32..50, rider in rider()) {
            let calc = FareCalculator::default();
            prop_assert!(calc.distance_fare(distance, rider) <= calc.distance_fare(distance + extra, rider));
        }
    }
}
