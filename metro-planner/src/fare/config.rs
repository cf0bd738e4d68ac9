//! Fare configuration.

/// A distance band with its per-unit multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBand {
    /// Inclusive upper bound on total distance; `None` for the open-ended
    /// outermost band.
    pub max_distance: Option<u32>,

    /// Price per distance unit within this band.
    pub multiplier: f64,
}

impl ZoneBand {
    /// A band covering distances up to and including `max_distance`.
    pub const fn up_to(max_distance: u32, multiplier: f64) -> Self {
        Self {
            max_distance: Some(max_distance),
            multiplier,
        }
    }

    /// The open-ended outermost band.
    pub const fn beyond(multiplier: f64) -> Self {
        Self {
            max_distance: None,
            multiplier,
        }
    }
}

/// Configuration parameters for fare calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct FareConfig {
    /// Flat amount charged on every trip.
    pub base_fare: f64,

    /// Distance bands in ascending order of `max_distance`.
    /// The whole trip distance is priced at the multiplier of the band it
    /// falls into.
    pub zones: Vec<ZoneBand>,

    /// Multiplier applied for student riders.
    pub student_factor: f64,

    /// Multiplier applied for senior riders.
    pub senior_factor: f64,

    /// Per-station amount used by the quick estimate.
    pub estimate_per_station: f64,
}

impl FareConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        base_fare: f64,
        zones: Vec<ZoneBand>,
        student_factor: f64,
        senior_factor: f64,
        estimate_per_station: f64,
    ) -> Self {
        Self {
            base_fare,
            zones,
            student_factor,
            senior_factor,
            estimate_per_station,
        }
    }

    /// Multiplier for a trip of the given total distance.
    ///
    /// Distances beyond every bounded band use the last band. With no bands
    /// configured the multiplier is 1.
    pub fn zone_multiplier(&self, distance: u32) -> f64 {
        self.zones
            .iter()
            .find(|band| band.max_distance.is_none_or(|max| distance <= max))
            .or_else(|| self.zones.last())
            .map_or(1.0, |band| band.multiplier)
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: 20.0,
            zones: vec![
                ZoneBand::up_to(5, 1.0),
                ZoneBand::up_to(12, 1.5),
                ZoneBand::up_to(21, 2.0),
                ZoneBand::beyond(2.5),
            ],
            student_factor: 0.5,
            senior_factor: 0.6,
            estimate_per_station: 1.5,
        }
    }
}
