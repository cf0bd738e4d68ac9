//! Metro network graph store.
//!
//! Stations and weighted, bidirectional edges between them. A network is
//! built once, either programmatically or from a JSON definition, and is
//! read-only afterwards.

mod definition;
mod error;
mod graph;
mod reference;

pub use definition::{EdgeDefinition, NetworkDefinition, StationDefinition};
pub use error::NetworkError;
pub use graph::{Edge, MetroNetwork};
pub use reference::reference_network;
