// Re-export key components
pub use crate::algo::matrix::travel_time_matrix;
pub use crate::algo::reachability::{ReachableStation, reachable_within};
pub use crate::loading::{NetworkConfig, create_metro_network, sample_network};
pub use crate::model::{MetroNetwork, Station};
pub use crate::routing::{Route, RouteSummary, dijkstra_travel_times};

// Core types for the network
pub use crate::Error;
pub use crate::Minutes;
pub use crate::StationIdx;
