//! Shared helpers for planner tests.

use proptest::prelude::*;

use crate::domain::{Path, StationId};
use crate::network::MetroNetwork;

/// Random small network plus an (origin, destination) pair within it.
///
/// Stations are named `S0`, `S1`, ... At most one edge joins any pair of
/// stations, and weights are positive.
pub fn network_strategy() -> impl Strategy<Value = (MetroNetwork, StationId, StationId)> {
    (2usize..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 1u32..10), 0..16),
            0..n,
            0..n,
        )
            .prop_map(|(n, edges, origin, destination)| {
                (
                    build_network(n, &edges),
                    StationId(origin),
                    StationId(destination),
                )
            })
    })
}

/// Build a network of `n` stations from `(u, v, weight)` triples, skipping
/// self-loops and repeated pairs.
pub fn build_network(n: usize, edges: &[(usize, usize, u32)]) -> MetroNetwork {
    let mut network = MetroNetwork::with_capacity(n);
    for i in 0..n {
        network.add_station(format!("S{i}"), StationId(i));
    }
    for &(u, v, weight) in edges {
        let (u, v) = (StationId(u), StationId(v));
        if u != v && network.edge_weight(u, v).is_none() {
            network.add_edge(u, v, weight);
        }
    }
    network
}

/// Every simple path from `origin` to `destination`, by plain recursion.
pub fn all_simple_paths(
    network: &MetroNetwork,
    origin: StationId,
    destination: StationId,
) -> Vec<Path> {
    fn walk(
        network: &MetroNetwork,
        current: StationId,
        destination: StationId,
        visited: &mut Vec<bool>,
        stack: &mut Vec<StationId>,
        out: &mut Vec<Path>,
    ) {
        visited[current.index()] = true;
        stack.push(current);

        if current == destination {
            out.push(Path::new(stack.clone()));
        } else {
            for edge in network.neighbours(current) {
                if !visited[edge.to.index()] {
                    walk(network, edge.to, destination, visited, stack, out);
                }
            }
        }

        stack.pop();
        visited[current.index()] = false;
    }

    let mut out = Vec::new();
    let mut visited = vec![false; network.station_count()];
    walk(
        network,
        origin,
        destination,
        &mut visited,
        &mut Vec::new(),
        &mut out,
    );
    out
}
