//! Shortest-path search modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How edges are weighted during a shortest-path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Use true edge distances; finds the shortest trip.
    TimeOptimized,
    /// Count every hop as 1; finds the trip through the fewest stations.
    MinimalTransfers,
}

impl SearchMode {
    /// Mode matching a `time_optimized` flag.
    pub fn from_time_optimized(time_optimized: bool) -> Self {
        if time_optimized {
            SearchMode::TimeOptimized
        } else {
            SearchMode::MinimalTransfers
        }
    }

    /// Cost of traversing an edge of the given weight.
    pub fn edge_cost(self, weight: u32) -> u32 {
        match self {
            SearchMode::TimeOptimized => weight,
            SearchMode::MinimalTransfers => 1,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::TimeOptimized => f.write_str("time-optimized"),
            SearchMode::MinimalTransfers => f.write_str("minimal-transfers"),
        }
    }
}
