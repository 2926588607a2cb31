pub mod distance;

pub use distance::distance_miles;
