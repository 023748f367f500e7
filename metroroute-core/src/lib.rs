//! Route finding over a metro network.
//!
//! The network is an undirected graph of stations joined by connections
//! weighted with travel time in minutes. Two queries are answered over it:
//! the route with the fewest connections (BFS) and the route with the lowest
//! total travel time (Dijkstra).

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Index of a station inside the network arena
pub type StationIdx = usize;
/// Travel time in minutes
pub type Minutes = u32;
