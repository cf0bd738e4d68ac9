//! Metro route planner.
//!
//! Answers route, fare, and alternative-path queries over a small,
//! fixed-topology metro network.

pub mod cache;
pub mod domain;
pub mod fare;
pub mod network;
pub mod planner;
