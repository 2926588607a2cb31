//! nearby-providers - List support providers by distance from a UK postcode

pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod locate;
pub mod server;
