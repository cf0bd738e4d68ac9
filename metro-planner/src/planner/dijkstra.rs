//! Dijkstra shortest-path search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::domain::{Path, SearchMode, StationId};
use crate::network::MetroNetwork;

/// Find the cheapest path from `origin` to `destination`.
///
/// Edge costs come from `mode`: true distances for
/// [`SearchMode::TimeOptimized`], 1 per hop for
/// [`SearchMode::MinimalTransfers`]. The search stops as soon as the
/// destination is settled.
///
/// Returns `None` if the destination is unreachable. A query from a station
/// to itself yields the single-station path.
///
/// Both ids must belong to `network`.
pub fn shortest_path(
    network: &MetroNetwork,
    origin: StationId,
    destination: StationId,
    mode: SearchMode,
) -> Option<Path> {
    let n = network.station_count();
    let mut distances = vec![u32::MAX; n];
    let mut previous: Vec<Option<StationId>> = vec![None; n];
    let mut settled = 0usize;

    distances[origin.index()] = 0;
    let mut queue = BinaryHeap::new();
    queue.push(Reverse((0u32, origin)));

    while let Some(Reverse((distance, station))) = queue.pop() {
        // Stale entry superseded by a cheaper one
        if distance > distances[station.index()] {
            continue;
        }
        settled += 1;

        if station == destination {
            break;
        }

        for edge in network.neighbours(station) {
            let candidate = distance.saturating_add(mode.edge_cost(edge.weight));
            if candidate < distances[edge.to.index()] {
                distances[edge.to.index()] = candidate;
                previous[edge.to.index()] = Some(station);
                queue.push(Reverse((candidate, edge.to)));
            }
        }
    }

    trace!(
        origin = %origin,
        destination = %destination,
        mode = %mode,
        settled,
        "Dijkstra search complete"
    );

    if distances[destination.index()] == u32::MAX {
        return None;
    }

    let mut stations = vec![destination];
    let mut at = destination;
    while let Some(prev) = previous[at.index()] {
        stations.push(prev);
        at = prev;
    }
    stations.reverse();

    Some(Path::new(stations))
}
