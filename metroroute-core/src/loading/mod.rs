//! This module is responsible for loading station and connection data
//! from CSV feeds and building a metro network.

mod builder;
mod config;
pub mod feed;
mod sample;

pub use builder::create_metro_network;
pub use config::NetworkConfig;
pub use sample::sample_network;
