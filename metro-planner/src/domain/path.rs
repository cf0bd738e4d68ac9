//! Station sequences through the network.

use serde::Serialize;

use super::StationId;

/// An ordered sequence of stations from origin to destination, inclusive.
///
/// A `Path` does not know its own distance: edge weights live in the
/// network, so distance is always looked up there
/// (see [`MetroNetwork::path_distance`](crate::network::MetroNetwork::path_distance)).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<StationId>);

impl Path {
    /// Creates a path from an ordered list of stations.
    pub fn new(stations: Vec<StationId>) -> Self {
        Self(stations)
    }

    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.0
    }

    /// Returns the first station, if any.
    pub fn origin(&self) -> Option<StationId> {
        self.0.first().copied()
    }

    /// Returns the last station, if any.
    pub fn destination(&self) -> Option<StationId> {
        self.0.last().copied()
    }

    /// Number of stations on the path, including both ends.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the path has no stations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of station-to-station hops.
    pub fn hop_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Returns true if the station appears anywhere on the path.
    pub fn contains(&self, station: StationId) -> bool {
        self.0.contains(&station)
    }

    /// Iterates over consecutive `(from, to)` station pairs.
    pub fn hops(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

impl From<Vec<StationId>> for Path {
    fn from(stations: Vec<StationId>) -> Self {
        Self(stations)
    }
}

impl FromIterator<StationId> for Path {
    fn from_iter<I: IntoIterator<Item = StationId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[usize]) -> Path {
        ids.iter().copied().map(StationId).collect()
    }

    #[test]
    fn endpoints() {
        let p = path(&[0, 1, 2]);
        assert_eq!(p.origin(), Some(StationId(0)));
        assert_eq!(p.destination(), Some(StationId(2)));
        assert_eq!(p.len(), 3);
        assert_eq!(p.hop_count(), 2);
    }

    #[test]
    fn empty_path() {
        let p = Path::default();
        assert!(p.is_empty());
        assert_eq!(p.origin(), None);
        assert_eq!(p.destination(), None);
        assert_eq!(p.hop_count(), 0);
        assert_eq!(p.hops().count(), 0);
    }

    #[test]
    fn single_station_has_no_hops() {
        let p = path(&[5]);
        assert_eq!(p.hop_count(), 0);
        assert_eq!(p.hops().count(), 0);
        assert_eq!(p.origin(), p.destination());
    }

    #[test]
    fn hops_are_consecutive_pairs() {
        let p = path(&[3, 4, 5]);
        let hops: Vec<_> = p.hops().collect();
        assert_eq!(
            hops,
            vec![(StationId(3), StationId(4)), (StationId(4), StationId(5))]
        );
    }

    #[test]
    fn contains() {
        let p = path(&[0, 21, 3]);
        assert!(p.contains(StationId(21)));
        assert!(!p.contains(StationId(1)));
    }

    #[test]
    fn serializes_as_id_list() {
        let json = serde_json::to_string(&path(&[0, 1, 2])).unwrap();
        assert_eq!(json, "[0,1,2]");
    }
}
