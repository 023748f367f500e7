//! Route search over the metro network

pub mod bfs;
pub mod dijkstra;
pub mod route;

pub use dijkstra::dijkstra_travel_times;
pub use route::{Route, RouteSummary};
