//! The 22-station reference network.

use super::graph::MetroNetwork;
use crate::domain::StationId;

const STATIONS: [&str; 22] = [
    "CENTRAL SECRETARIAT",
    "PATEL CHOWK",
    "RAJIV CHOWK",
    "MANDI HOUSE",
    "SUPREME COURT",
    "INDRAPRASTHA",
    "YAMUNA BANK",
    "AKSHARDHAM",
    "MAYUR VIHAR",
    "NIZAMUDDIN",
    "ASHRAM",
    "VINOBAPURI",
    "LAJPAT NAGAR",
    "SOUTH EXTENTION",
    "DILLI HAAT",
    "JOR BAGH",
    "LOK KALYAN MARG",
    "UDYOG BHAWAN",
    "KHAN MARKET",
    "JLN STADIUM",
    "JANGPURA",
    "JANPATH",
];

/// (station, station, distance)
const EDGES: [(usize, usize, u32); 24] = [
    (0, 1, 2),
    (0, 21, 1),
    (0, 17, 2),
    (0, 18, 4),
    (1, 2, 2),
    (2, 3, 4),
    (3, 4, 2),
    (3, 21, 3),
    (4, 5, 2),
    (5, 6, 3),
    (6, 7, 3),
    (7, 8, 3),
    (8, 9, 5),
    (9, 10, 3),
    (10, 11, 3),
    (11, 12, 3),
    (12, 13, 3),
    (12, 20, 3),
    (13, 14, 2),
    (14, 15, 2),
    (15, 16, 2),
    (16, 17, 2),
    (18, 19, 3),
    (19, 20, 2),
];

/// Build the reference network.
///
/// Station ids follow the order of the names below, starting at
/// `CENTRAL SECRETARIAT` = 0 and ending at `JANPATH` = 21.
pub fn reference_network() -> MetroNetwork {
    let mut network = MetroNetwork::with_capacity(STATIONS.len());
    for (id, name) in STATIONS.iter().enumerate() {
        network.add_station(*name, StationId(id));
    }
    for &(u, v, weight) in &EDGES {
        network.add_edge(StationId(u), StationId(v), weight);
    }
    network
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_and_edge_counts() {
        let network = reference_network();
        assert_eq!(network.station_count(), 22);
        assert_eq!(network.station_names().len(), 22);
        assert_eq!(network.edge_count(), 24);
    }

    #[test]
    fn known_stations() {
        let network = reference_network();
        assert_eq!(network.station_id("CENTRAL SECRETARIAT"), Some(StationId(0)));
        assert_eq!(network.station_id("RAJIV CHOWK"), Some(StationId(2)));
        assert_eq!(network.station_id("JANPATH"), Some(StationId(21)));
        assert!(!network.is_valid_station("rajiv chowk"));
    }

    #[test]
    fn known_edges() {
        let network = reference_network();
        assert_eq!(network.edge_weight(StationId(0), StationId(1)), Some(2));
        assert_eq!(network.edge_weight(StationId(21), StationId(0)), Some(1));
        assert_eq!(network.edge_weight(StationId(8), StationId(9)), Some(5));
        assert_eq!(network.edge_weight(StationId(0), StationId(2)), None);
    }

    #[test]
    fn every_station_is_connected() {
        let network = reference_network();
        for (id, name) in network.stations() {
            assert!(
                !network.neighbours(id).is_empty(),
                "{name} has no connections"
            );
        }
    }
}
