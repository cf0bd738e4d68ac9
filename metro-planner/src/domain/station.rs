//! Station identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense, zero-based station identifier.
///
/// Ids are assigned when the network is built and never reused. An id is
/// only meaningful for the network that issued it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

impl StationId {
    /// Returns the id as an index into per-station tables.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StationId {
    fn from(index: usize) -> Self {
        StationId(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug() {
        let id = StationId(7);
        assert_eq!(format!("{}", id), "7");
        assert_eq!(format!("{:?}", id), "StationId(7)");
    }

    #[test]
    fn ordering_follows_index() {
        assert!(StationId(1) < StationId(2));
        assert_eq!(StationId::from(3).index(), 3);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&StationId(21)).unwrap();
        assert_eq!(json, "21");
        let back: StationId = serde_json::from_str("4").unwrap();
        assert_eq!(back, StationId(4));
    }
}
