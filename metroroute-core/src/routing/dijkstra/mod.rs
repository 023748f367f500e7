pub mod fastest_route;
pub mod state;
pub mod travel_times;

pub(crate) use fastest_route::fastest_route;
pub use travel_times::dijkstra_travel_times;
