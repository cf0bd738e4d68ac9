//! Route planning over a metro network.
//!
//! Shortest paths come from Dijkstra's algorithm, weighted either by true
//! distance or by hop count. Alternatives are every simple path whose
//! distance stays within a deviation threshold of the shortest one.
//! [`RoutePlanner`] ties these together with the route cache and the fare
//! calculator.

mod alternatives;
mod config;
mod dijkstra;
mod engine;
mod error;
mod result;

#[cfg(test)]
mod testing;

pub use alternatives::{rank_alternatives, simple_paths_within};
pub use config::PlannerConfig;
pub use dijkstra::shortest_path;
pub use engine::{RouteChangeRequest, RoutePlanner};
pub use error::PlannerError;
pub use result::{AlternativeRoutes, PricedRoute, RouteChange, RouteDetails, TransferRoute};
