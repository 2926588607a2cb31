use serde::{Deserialize, Serialize};

/// A resolved WGS84 point, longitude first to match the geocoder payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_wire_names() {
        let coord = Coordinate::new(-2.3597, 51.3811);
        let json = serde_json::to_value(coord).unwrap();

        assert_eq!(json["longitude"], -2.3597);
        assert_eq!(json["latitude"], 51.3811);
    }
}
