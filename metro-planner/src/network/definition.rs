//! Serializable network definitions.
//!
//! A definition lists stations as `{name, id}` pairs and edges as
//! `{from, to, weight}` triples:
//!
//! ```json
//! {
//!   "stations": [{"name": "A", "id": 0}, {"name": "B", "id": 1}],
//!   "edges": [{"from": 0, "to": 1, "weight": 2}]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::NetworkError;
use super::graph::MetroNetwork;
use crate::domain::StationId;

/// A station registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDefinition {
    pub name: String,
    pub id: StationId,
}

/// An undirected edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: StationId,
    pub to: StationId,
    pub weight: u32,
}

/// A complete network description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    pub stations: Vec<StationDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

impl NetworkDefinition {
    /// Parse a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a definition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Describe an existing network.
    pub fn from_network(network: &MetroNetwork) -> Self {
        let stations = network
            .stations()
            .map(|(id, name)| StationDefinition {
                name: name.to_string(),
                id,
            })
            .collect();

        // Each undirected edge appears twice in the adjacency lists; keep the
        // copy stored on the lower-numbered endpoint.
        let mut edges = Vec::new();
        for i in 0..network.station_count() {
            let from = StationId(i);
            for edge in network.neighbours(from) {
                if from < edge.to {
                    edges.push(EdgeDefinition {
                        from,
                        to: edge.to,
                        weight: edge.weight,
                    });
                }
            }
        }

        Self { stations, edges }
    }

    /// Validate the definition and build a network from it.
    ///
    /// Station ids must cover `0..stations.len()` exactly once, names must be
    /// unique and non-empty, and every edge must join known stations with a
    /// positive weight.
    pub fn build(&self) -> Result<MetroNetwork, NetworkError> {
        let count = self.stations.len();
        let mut seen_ids = HashSet::with_capacity(count);
        let mut seen_names = HashSet::with_capacity(count);

        for station in &self.stations {
            if station.id.index() >= count {
                return Err(NetworkError::StationIdOutOfRange {
                    id: station.id,
                    count,
                });
            }
            if !seen_ids.insert(station.id) {
                return Err(NetworkError::DuplicateStationId(station.id));
            }
            if station.name.trim().is_empty() {
                return Err(NetworkError::EmptyStationName(station.id));
            }
            if !seen_names.insert(station.name.as_str()) {
                return Err(NetworkError::DuplicateStationName(station.name.clone()));
            }
        }

        for edge in &self.edges {
            if edge.from.index() >= count || edge.to.index() >= count {
                return Err(NetworkError::UnknownEdgeEndpoint {
                    from: edge.from,
                    to: edge.to,
                });
            }
            if edge.weight == 0 {
                return Err(NetworkError::NonPositiveWeight {
                    from: edge.from,
                    to: edge.to,
                });
            }
        }

        let mut network = MetroNetwork::with_capacity(count);
        for station in &self.stations {
            network.add_station(station.name.clone(), station.id);
        }
        for edge in &self.edges {
            network.add_edge(edge.from, edge.to, edge.weight);
        }

        debug!(
            stations = network.station_count(),
            edges = network.edge_count(),
            "Built network from definition"
        );

        Ok(network)
    }
}
