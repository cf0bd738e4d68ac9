//! The route planner.

use tracing::{debug, trace};

use crate::cache::{CacheConfig, RouteCache};
use crate::domain::{Bill, Passenger, Path, RiderClass, SearchMode, StationId};
use crate::fare::{FareCalculator, FareConfig};
use crate::network::MetroNetwork;

use super::alternatives::{rank_alternatives, simple_paths_within};
use super::config::PlannerConfig;
use super::dijkstra::shortest_path;
use super::error::PlannerError;
use super::result::{AlternativeRoutes, PricedRoute, RouteChange, RouteDetails, TransferRoute};

/// Stations involved in a mid-trip change of destination.
#[derive(Debug, Clone, Copy)]
pub struct RouteChangeRequest<'a> {
    /// Where the trip started
    pub origin: &'a str,
    /// The trip's current destination
    pub destination: &'a str,
    /// Where the rider gets off to re-route
    pub midpoint: &'a str,
    /// Where the rider now wants to go
    pub new_destination: &'a str,
}

/// Answers route, fare and alternative-path queries over one network.
///
/// Station names are matched exactly as registered in the network. Unknown
/// names are reported as [`PlannerError::UnknownStation`]; "no route" is a
/// normal result (`None` or [`AlternativeRoutes::NoRoute`]).
///
/// Shortest paths are memoized in a [`RouteCache`] owned by the planner.
pub struct RoutePlanner {
    network: MetroNetwork,
    config: PlannerConfig,
    cache: RouteCache,
    fares: FareCalculator,
}

impl RoutePlanner {
    /// Create a planner with default configuration.
    pub fn new(network: MetroNetwork) -> Self {
        Self::with_config(
            network,
            PlannerConfig::default(),
            &CacheConfig::default(),
            FareConfig::default(),
        )
    }

    /// Create a planner with explicit configuration.
    pub fn with_config(
        network: MetroNetwork,
        config: PlannerConfig,
        cache_config: &CacheConfig,
        fare_config: FareConfig,
    ) -> Self {
        Self {
            network,
            config,
            cache: RouteCache::new(cache_config),
            fares: FareCalculator::new(fare_config),
        }
    }

    pub fn network(&self) -> &MetroNetwork {
        &self.network
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }

    /// Check whether `name` is a registered station.
    pub fn is_valid_station(&self, name: &str) -> bool {
        self.network.is_valid_station(name)
    }

    /// Station names in id order.
    pub fn station_names(&self) -> Vec<&str> {
        self.network.station_names()
    }

    fn resolve(&self, name: &str) -> Result<StationId, PlannerError> {
        self.network
            .station_id(name)
            .ok_or_else(|| PlannerError::UnknownStation(name.to_string()))
    }

    /// Shortest path between two station ids, consulting the cache first.
    ///
    /// Only found paths are cached. With
    /// [`CacheKeyMode::OrderedPair`](crate::cache::CacheKeyMode::OrderedPair)
    /// a path cached under one mode is returned for the other.
    pub fn route_between(
        &self,
        origin: StationId,
        destination: StationId,
        mode: SearchMode,
    ) -> Option<Path> {
        if let Some(cached) = self.cache.get(origin, destination, mode) {
            trace!(origin = %origin, destination = %destination, mode = %mode, "Route cache hit");
            return Some(cached);
        }

        let path = shortest_path(&self.network, origin, destination, mode)?;
        self.cache.insert(origin, destination, mode, path.clone());
        debug!(
            origin = %origin,
            destination = %destination,
            mode = %mode,
            stations = path.len(),
            "Cached new route"
        );
        Some(path)
    }

    /// Find the shortest path between two named stations.
    pub fn find_shortest_path(
        &self,
        origin: &str,
        destination: &str,
        mode: SearchMode,
    ) -> Result<Option<Path>, PlannerError> {
        let origin = self.resolve(origin)?;
        let destination = self.resolve(destination)?;
        Ok(self.route_between(origin, destination, mode))
    }

    fn details(&self, path: Path) -> RouteDetails {
        RouteDetails {
            stations: self.network.path_names(&path),
            distance: self.network.path_distance(&path),
            path,
        }
    }

    fn priced(&self, path: Path, rider: RiderClass) -> PricedRoute {
        let fare = self.fare(Some(&path), rider);
        PricedRoute {
            route: self.details(path),
            fare,
        }
    }

    /// Station names and distance of the shortest route, for display.
    pub fn route_details(
        &self,
        origin: &str,
        destination: &str,
        mode: SearchMode,
    ) -> Result<Option<RouteDetails>, PlannerError> {
        Ok(self
            .find_shortest_path(origin, destination, mode)?
            .map(|path| self.details(path)))
    }

    /// Shortest route plus up to `max_alternative_routes - 1` alternatives,
    /// each priced at the full fare.
    pub fn find_alternative_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<AlternativeRoutes, PlannerError> {
        self.find_alternative_routes_for(origin, destination, RiderClass::FULL_FARE)
    }

    /// Shortest route plus up to `max_alternative_routes - 1` alternatives,
    /// each priced for `rider`.
    ///
    /// Alternatives are simple paths no longer than the shortest distance
    /// times `max_route_deviation`, shortest first.
    pub fn find_alternative_routes_for(
        &self,
        origin: &str,
        destination: &str,
        rider: RiderClass,
    ) -> Result<AlternativeRoutes, PlannerError> {
        let origin = self.resolve(origin)?;
        let destination = self.resolve(destination)?;

        let Some(shortest) = self.route_between(origin, destination, SearchMode::TimeOptimized)
        else {
            return Ok(AlternativeRoutes::NoRoute);
        };

        let max_distance = self
            .config
            .max_alternative_distance(self.network.path_distance(&shortest));
        let candidates = simple_paths_within(&self.network, origin, destination, max_distance);
        let ranked = rank_alternatives(
            candidates,
            &shortest,
            max_distance,
            self.config.alternative_limit(),
        );

        debug!(
            origin = %origin,
            destination = %destination,
            alternatives = ranked.len(),
            "Alternative route search complete"
        );

        let shortest = self.priced(shortest, rider);
        if ranked.is_empty() {
            return Ok(AlternativeRoutes::NoAlternatives { shortest });
        }

        let alternatives = ranked
            .into_iter()
            .map(|(path, _)| self.priced(path, rider))
            .collect();

        Ok(AlternativeRoutes::Found {
            shortest,
            alternatives,
        })
    }

    /// Authoritative fare along a path. A missing or empty path costs 0.
    pub fn fare(&self, path: Option<&Path>, rider: RiderClass) -> f64 {
        path.map_or(0.0, |path| self.fares.path_fare(&self.network, path, rider))
    }

    /// Authoritative fare between two named stations, along the
    /// time-optimized route. Unconnected stations cost 0.
    pub fn calculate_fare(
        &self,
        origin: &str,
        destination: &str,
        rider: RiderClass,
    ) -> Result<f64, PlannerError> {
        let path = self.find_shortest_path(origin, destination, SearchMode::TimeOptimized)?;
        Ok(self.fare(path.as_ref(), rider))
    }

    /// Quick station-count estimate for a path.
    ///
    /// Not the authoritative fare; see [`RoutePlanner::fare`].
    pub fn quick_estimate(&self, path: &Path) -> f64 {
        self.fares.quick_estimate(path)
    }

    /// Bill the passenger for a trip between two named stations.
    pub fn generate_bill(
        &self,
        passenger: &mut Passenger,
        origin: &str,
        destination: &str,
    ) -> Result<Bill, PlannerError> {
        let fare = self.calculate_fare(origin, destination, passenger.rider_class())?;
        let bill = passenger.record_bill(fare);
        debug!(passenger = %bill.passenger, amount = bill.amount, "Generated bill");
        Ok(bill)
    }

    /// Route through the fewest stations, with a quick estimate, and bill
    /// the passenger at the authoritative fare.
    ///
    /// Returns `None` (and bills nothing) if the stations are not connected.
    pub fn find_minimal_transfer_path(
        &self,
        passenger: &mut Passenger,
        origin: &str,
        destination: &str,
    ) -> Result<Option<TransferRoute>, PlannerError> {
        let Some(path) = self.find_shortest_path(origin, destination, SearchMode::MinimalTransfers)?
        else {
            return Ok(None);
        };

        let quick_estimate = self.quick_estimate(&path);
        let bill = self.generate_bill(passenger, origin, destination)?;

        Ok(Some(TransferRoute {
            route: self.details(path),
            quick_estimate,
            bill,
        }))
    }

    /// Check whether `midpoint` lies on the minimal-transfer route from
    /// `origin` to `destination`.
    pub fn is_on_path(
        &self,
        origin: &str,
        midpoint: &str,
        destination: &str,
    ) -> Result<bool, PlannerError> {
        let midpoint = self.resolve(midpoint)?;
        let path = self.find_shortest_path(origin, destination, SearchMode::MinimalTransfers)?;
        Ok(path.is_some_and(|path| path.contains(midpoint)))
    }

    /// Get off part-way through a trip and continue to a new destination.
    ///
    /// The change point must lie on the current trip (see
    /// [`RoutePlanner::is_on_path`]). The passenger is billed the fare to
    /// the change point plus the fare from there to the new destination.
    pub fn change_route(
        &self,
        passenger: &mut Passenger,
        request: &RouteChangeRequest<'_>,
    ) -> Result<RouteChange, PlannerError> {
        self.resolve(request.new_destination)?;

        if !self.is_on_path(request.origin, request.midpoint, request.destination)? {
            return Err(PlannerError::NotOnPath {
                origin: request.origin.to_string(),
                midpoint: request.midpoint.to_string(),
                destination: request.destination.to_string(),
            });
        }

        let onward =
            self.find_minimal_transfer_path(passenger, request.midpoint, request.new_destination)?;

        let rider = passenger.rider_class();
        let first_leg_fare = self.calculate_fare(request.origin, request.midpoint, rider)?;
        let onward_fare = self.calculate_fare(request.midpoint, request.new_destination, rider)?;
        let bill = passenger.record_bill(first_leg_fare + onward_fare);

        debug!(
            midpoint = request.midpoint,
            new_destination = request.new_destination,
            amount = bill.amount,
            "Route changed"
        );

        Ok(RouteChange {
            onward,
            first_leg_fare,
            onward_fare,
            bill,
        })
    }
}
