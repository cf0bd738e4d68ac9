//! Network definition error types.

use std::path::PathBuf;

use crate::domain::StationId;

/// Errors from loading or validating a network definition.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Definition file could not be read
    #[error("failed to read network file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Definition was not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Station id is not within the dense range `0..count`
    #[error("station id {id} out of range for {count} stations")]
    StationIdOutOfRange { id: StationId, count: usize },

    /// Two stations share an id
    #[error("duplicate station id {0}")]
    DuplicateStationId(StationId),

    /// Two stations share a name
    #[error("duplicate station name {0:?}")]
    DuplicateStationName(String),

    /// Station name was empty or whitespace
    #[error("station {0} has an empty name")]
    EmptyStationName(StationId),

    /// Edge refers to a station that does not exist
    #[error("edge {from} - {to} refers to an unknown station")]
    UnknownEdgeEndpoint { from: StationId, to: StationId },

    /// Edge has zero weight
    #[error("edge {from} - {to} must have a positive weight")]
    NonPositiveWeight { from: StationId, to: StationId },
}
