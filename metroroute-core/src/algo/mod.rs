//! Queries built on top of the one-to-all travel time search

pub mod matrix;
pub mod reachability;
