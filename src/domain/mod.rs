pub mod coordinate;
pub mod provider;

pub use coordinate::Coordinate;
pub use provider::Provider;
