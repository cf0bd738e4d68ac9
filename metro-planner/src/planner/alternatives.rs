//! Alternative route enumeration.
//!
//! Finds every simple path (no repeated station) between two stations whose
//! distance stays within a bound, using depth-first search over an explicit
//! stack. Enumeration is exponential in the branching factor; it is meant
//! for networks of a few dozen stations.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::{Path, StationId};
use crate::network::MetroNetwork;

/// One level of the depth-first search.
struct Frame {
    station: StationId,
    /// Distance travelled to reach `station`.
    distance: u32,
    /// Index of the next adjacency-list entry to try.
    next_edge: usize,
}

/// Every simple path from `origin` to `destination` with distance at most
/// `max_distance`, paired with that distance.
///
/// Paths are deduplicated and returned in station-id order. Distances are
/// looked up from the network for each complete path. Paths never exceed
/// `station_count()` stations.
pub fn simple_paths_within(
    network: &MetroNetwork,
    origin: StationId,
    destination: StationId,
    max_distance: f64,
) -> Vec<(Path, u32)> {
    let mut found: BTreeSet<Path> = BTreeSet::new();

    if origin == destination {
        found.insert(Path::new(vec![origin]));
    } else {
        let depth_cap = network.station_count();
        let mut visited = vec![false; network.station_count()];
        let mut stack = vec![Frame {
            station: origin,
            distance: 0,
            next_edge: 0,
        }];
        visited[origin.index()] = true;

        while let Some(frame) = stack.last_mut() {
            let edges = network.neighbours(frame.station);
            let Some(edge) = edges.get(frame.next_edge).copied() else {
                visited[frame.station.index()] = false;
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            if visited[edge.to.index()] {
                continue;
            }

            // Weights are non-negative, so an over-long prefix never recovers
            let distance = frame.distance.saturating_add(edge.weight);
            if f64::from(distance) > max_distance {
                continue;
            }

            if edge.to == destination {
                let path: Path = stack
                    .iter()
                    .map(|f| f.station)
                    .chain(std::iter::once(destination))
                    .collect();
                found.insert(path);
                continue;
            }

            if stack.len() + 1 >= depth_cap {
                continue;
            }

            visited[edge.to.index()] = true;
            stack.push(Frame {
                station: edge.to,
                distance,
                next_edge: 0,
            });
        }
    }

    let paths: Vec<(Path, u32)> = found
        .into_iter()
        .map(|path| {
            let distance = network.path_distance(&path);
            (path, distance)
        })
        .filter(|(_, distance)| f64::from(*distance) <= max_distance)
        .collect();

    debug!(
        origin = %origin,
        destination = %destination,
        max_distance,
        paths = paths.len(),
        "Enumerated simple paths"
    );

    paths
}

/// Pick the alternatives to show next to `shortest`.
///
/// Sorts candidates by distance (ties by station sequence), drops the
/// shortest path itself and anything longer than `max_distance`, and keeps
/// at most `limit` routes.
pub fn rank_alternatives(
    mut candidates: Vec<(Path, u32)>,
    shortest: &Path,
    max_distance: f64,
    limit: usize,
) -> Vec<(Path, u32)> {
    candidates.sort_by(|(a_path, a_dist), (b_path, b_dist)| {
        a_dist.cmp(b_dist).then_with(|| a_path.cmp(b_path))
    });
    candidates.dedup_by(|a, b| a.0 == b.0);

    candidates
        .into_iter()
        .filter(|(path, _)| path != shortest)
        .filter(|(_, distance)| f64::from(*distance) <= max_distance)
        .take(limit)
        .collect()
}
