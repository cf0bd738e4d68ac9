//! Planner configuration.

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Maximum number of routes shown by an alternative-route query,
    /// counting the shortest route itself.
    pub max_alternative_routes: usize,

    /// Maximum ratio of an alternative's distance to the shortest distance.
    pub max_route_deviation: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_alternative_routes: usize, max_route_deviation: f64) -> Self {
        Self {
            max_alternative_routes,
            max_route_deviation,
        }
    }

    /// Maximum number of alternatives besides the shortest route.
    pub fn alternative_limit(&self) -> usize {
        self.max_alternative_routes.saturating_sub(1)
    }

    /// Longest distance an alternative may have, given the shortest distance.
    pub fn max_alternative_distance(&self, shortest_distance: u32) -> f64 {
        f64::from(shortest_distance) * self.max_route_deviation
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_alternative_routes: 3,
            max_route_deviation: 1.5, // 50% longer than shortest
        }
    }
}
