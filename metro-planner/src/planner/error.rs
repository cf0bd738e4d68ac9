//! Planner error types.

/// Errors from planner queries.
///
/// "No route exists" is not an error: queries report it as `None` or
/// [`AlternativeRoutes::NoRoute`](super::AlternativeRoutes::NoRoute).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// Station name is not in the network
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// Requested change point is not on the current route
    #[error("station {midpoint} does not lie on the route from {origin} to {destination}")]
    NotOnPath {
        origin: String,
        midpoint: String,
        destination: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlannerError::UnknownStation("ATLANTIS".into());
        assert_eq!(err.to_string(), "unknown station: ATLANTIS");

        let err = PlannerError::NotOnPath {
            origin: "CENTRAL SECRETARIAT".into(),
            midpoint: "ASHRAM".into(),
            destination: "RAJIV CHOWK".into(),
        };
        assert_eq!(
            err.to_string(),
            "station ASHRAM does not lie on the route from CENTRAL SECRETARIAT to RAJIV CHOWK"
        );
    }
}
