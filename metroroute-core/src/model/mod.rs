//! Data model for the metro network
//!
//! Stations live in a dense arena, connections are stored as
//! `(neighbor index, minutes)` pairs on both endpoints.

pub mod network;
pub mod station;

pub use network::MetroNetwork;
pub use station::Station;
