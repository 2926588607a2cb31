pub mod postcodes;

pub use postcodes::PostcodesIo;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Coordinate;

/// Failure to turn a postal code into a coordinate.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("geocoding request for {postcode} failed: {source}")]
    Network {
        postcode: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("geocoding request for {postcode} timed out")]
    Timeout { postcode: String },

    #[error("failed to decode geocoding response for {postcode}: {source}")]
    Decode {
        postcode: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("geocoder rejected {postcode} (status {status}): {message}")]
    Rejected {
        postcode: String,
        status: u16,
        message: String,
    },
}

impl ResolveError {
    pub fn postcode(&self) -> &str {
        match self {
            Self::Network { postcode, .. }
            | Self::Timeout { postcode }
            | Self::Decode { postcode, .. }
            | Self::Rejected { postcode, .. } => postcode,
        }
    }
}

/// Resolves postal codes to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, postcode: &str) -> Result<Coordinate, ResolveError>;
}

/// Strip every whitespace character, so "BA1 3QE" and " ba1  3qe" hit the same lookup path.
pub fn normalize_postcode(postcode: &str) -> String {
    postcode.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_postcode() {
        assert_eq!(normalize_postcode("BA1 3QE"), "BA13QE");
        assert_eq!(normalize_postcode("  DT10 1QU\t"), "DT101QU");
        assert_eq!(normalize_postcode("BS8\u{a0}3HA"), "BS83HA");
        assert_eq!(normalize_postcode(""), "");
    }

    #[test]
    fn test_error_message_names_postcode() {
        let err = ResolveError::Rejected {
            postcode: "ZZ99ZZ".to_string(),
            status: 404,
            message: "Postcode not found".to_string(),
        };
        assert_eq!(err.postcode(), "ZZ99ZZ");
        assert_eq!(
            err.to_string(),
            "geocoder rejected ZZ99ZZ (status 404): Postcode not found"
        );
    }
}
