//! Query results handed back to the caller for rendering.

use std::fmt;

use serde::Serialize;

use crate::domain::{Bill, Path};

/// A route with its station names and distance.
///
/// Renders as `A -> B -> C -> End`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDetails {
    /// Station ids in travel order
    pub path: Path,

    /// Station names in travel order
    pub stations: Vec<String>,

    /// Total distance in network units
    pub distance: u32,
}

impl fmt::Display for RouteDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.stations {
            write!(f, "{name} -> ")?;
        }
        f.write_str("End")
    }
}

/// A route together with its fare.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedRoute {
    pub route: RouteDetails,
    pub fare: f64,
}

impl fmt::Display for PricedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.route)?;
        writeln!(f, "Distance: {} units", self.route.distance)?;
        write!(f, "Price: {}", self.fare)
    }
}

/// Outcome of an alternative-route query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum AlternativeRoutes {
    /// The stations are not connected.
    NoRoute,

    /// Only the shortest route is within the deviation threshold.
    NoAlternatives { shortest: PricedRoute },

    /// The shortest route plus ranked alternatives (never empty).
    Found {
        shortest: PricedRoute,
        alternatives: Vec<PricedRoute>,
    },
}

impl AlternativeRoutes {
    /// The shortest route, if any route exists.
    pub fn shortest(&self) -> Option<&PricedRoute> {
        match self {
            AlternativeRoutes::NoRoute => None,
            AlternativeRoutes::NoAlternatives { shortest }
            | AlternativeRoutes::Found { shortest, .. } => Some(shortest),
        }
    }

    /// Alternatives to the shortest route, best first.
    pub fn alternatives(&self) -> &[PricedRoute] {
        match self {
            AlternativeRoutes::Found { alternatives, .. } => alternatives,
            _ => &[],
        }
    }
}

/// Result of a minimal-transfer query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRoute {
    /// Route through the fewest stations
    pub route: RouteDetails,

    /// Quick station-count estimate for this route
    pub quick_estimate: f64,

    /// Bill generated for the trip at the authoritative fare
    pub bill: Bill,
}

/// Result of changing destination part-way through a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteChange {
    /// Minimal-transfer route from the change point to the new destination,
    /// if one exists
    pub onward: Option<TransferRoute>,

    /// Fare from the origin to the change point
    pub first_leg_fare: f64,

    /// Fare from the change point to the new destination
    pub onward_fare: f64,

    /// Final bill covering both legs
    pub bill: Bill,
}
