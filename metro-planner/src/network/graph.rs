//! Adjacency-list network representation.

use std::collections::HashMap;

use crate::domain::{Path, StationId};

/// One direction of an undirected edge, as stored in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Station at the far end
    pub to: StationId,
    /// Distance units between the two stations
    pub weight: u32,
}

/// A fixed-size metro network.
///
/// Edges are stored symmetrically: adding `u - v` inserts `v` into `u`'s
/// adjacency list and `u` into `v`'s. Station names and ids form a
/// bijection.
///
/// Station ids must be in `0..station_count()`. Passing an id outside that
/// range to any method is a contract violation and panics.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    adjacency: Vec<Vec<Edge>>,
    names: Vec<Option<String>>,
    ids: HashMap<String, StationId>,
}

impl MetroNetwork {
    /// Create a network with room for `station_count` stations and no edges.
    pub fn with_capacity(station_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); station_count],
            names: vec![None; station_count],
            ids: HashMap::with_capacity(station_count),
        }
    }

    /// Register a station name under the given id.
    ///
    /// Re-registering an id or a name replaces the earlier mapping, so the
    /// name ↔ id relation stays one-to-one.
    ///
    /// # Panics
    ///
    /// Panics if `id` is outside `0..station_count()`.
    pub fn add_station(&mut self, name: impl Into<String>, id: StationId) {
        let name = name.into();

        if let Some(old_name) = self.names[id.index()].take() {
            self.ids.remove(&old_name);
        }
        if let Some(old_id) = self.ids.insert(name.clone(), id) {
            self.names[old_id.index()] = None;
        }
        self.names[id.index()] = Some(name);
    }

    /// Add an undirected edge between `u` and `v`.
    ///
    /// Weights are expected to be positive; this is not checked here
    /// (definitions loaded through [`NetworkDefinition`](super::NetworkDefinition)
    /// are validated).
    ///
    /// # Panics
    ///
    /// Panics if either id is outside `0..station_count()`.
    pub fn add_edge(&mut self, u: StationId, v: StationId, weight: u32) {
        self.adjacency[u.index()].push(Edge { to: v, weight });
        self.adjacency[v.index()].push(Edge { to: u, weight });
    }

    /// Number of station slots in the network.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Check whether `name` is a registered station (exact match).
    pub fn is_valid_station(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Look up a station id by exact name.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.ids.get(name).copied()
    }

    /// Look up a station name by id.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.names.get(id.index()).and_then(|n| n.as_deref())
    }

    /// Registered station names in id order.
    pub fn station_names(&self) -> Vec<&str> {
        self.stations().map(|(_, name)| name).collect()
    }

    /// Registered stations as `(id, name)` pairs in id order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_deref().map(|name| (StationId(i), name)))
    }

    /// Edges leaving a station, in insertion order.
    pub fn neighbours(&self, id: StationId) -> &[Edge] {
        &self.adjacency[id.index()]
    }

    /// Weight of the first edge from `u` to `v`, if they are adjacent.
    pub fn edge_weight(&self, u: StationId, v: StationId) -> Option<u32> {
        self.neighbours(u)
            .iter()
            .find(|e| e.to == v)
            .map(|e| e.weight)
    }

    /// Total distance along a path.
    ///
    /// Each hop's weight is looked up in the adjacency lists. A hop between
    /// stations that are not adjacent contributes nothing.
    pub fn path_distance(&self, path: &Path) -> u32 {
        path.hops()
            .filter_map(|(u, v)| self.edge_weight(u, v))
            .sum()
    }

    /// Station names along a path, in travel order.
    pub fn path_names(&self, path: &Path) -> Vec<String> {
        path.stations()
            .iter()
            .map(|&id| self.station_name(id).unwrap_or_default().to_string())
            .collect()
    }
}
