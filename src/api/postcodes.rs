use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use super::{Geocoder, ResolveError, normalize_postcode};
use crate::config::GeocoderConfig;
use crate::domain::Coordinate;

pub const DEFAULT_BASE_URL: &str = "https://api.postcodes.io/postcodes/";
const USER_AGENT: &str = concat!("nearby-providers/", env!("CARGO_PKG_VERSION"));

/// Raw postcodes.io lookup response.
///
/// Successful lookups carry `result`; failures carry `error` and a
/// non-2xx `status` that mirrors the HTTP status.
#[derive(Debug, Deserialize)]
struct PostcodeResponse {
    status: u16,
    #[serde(default)]
    result: Option<PostcodeResult>,
    #[serde(default)]
    error: Option<String>,
}

/// Only the coordinate is kept; the service returns many more fields.
#[derive(Debug, Deserialize)]
struct PostcodeResult {
    longitude: Option<f64>,
    latitude: Option<f64>,
}

/// Geocoder backed by a postcodes.io compatible service.
///
/// Lookups are `GET <base_url>/<postcode>` with whitespace removed from the
/// postcode. The client (and its timeout) is built once and reused.
#[derive(Debug, Clone)]
pub struct PostcodesIo {
    client: reqwest::Client,
    base_url: Url,
}

impl PostcodesIo {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid geocoder URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Geocoder URL cannot be used as a base: {}", base_url);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &GeocoderConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Append the postcode as a single, percent-encoded path segment.
    fn lookup_url(&self, postcode: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(postcode);
        }
        url
    }
}

#[async_trait]
impl Geocoder for PostcodesIo {
    async fn resolve(&self, postcode: &str) -> Result<Coordinate, ResolveError> {
        let postcode = normalize_postcode(postcode);
        let url = self.lookup_url(&postcode);
        tracing::debug!(%postcode, %url, "resolving postcode");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(&postcode, e))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| request_error(&postcode, e))?;

        decode_response(&postcode, &body)
    }
}

fn request_error(postcode: &str, source: reqwest::Error) -> ResolveError {
    if source.is_timeout() {
        ResolveError::Timeout {
            postcode: postcode.to_string(),
        }
    } else {
        ResolveError::Network {
            postcode: postcode.to_string(),
            source,
        }
    }
}

/// Decode a lookup body. The `status` field is checked, so a not-found
/// answer never turns into a zero coordinate.
fn decode_response(postcode: &str, body: &[u8]) -> Result<Coordinate, ResolveError> {
    let response: PostcodeResponse =
        serde_json::from_slice(body).map_err(|source| ResolveError::Decode {
            postcode: postcode.to_string(),
            source,
        })?;

    if !(200..300).contains(&response.status) {
        return Err(ResolveError::Rejected {
            postcode: postcode.to_string(),
            status: response.status,
            message: response
                .error
                .unwrap_or_else(|| "no error message".to_string()),
        });
    }

    match response.result {
        Some(PostcodeResult {
            longitude: Some(longitude),
            latitude: Some(latitude),
        }) => Ok(Coordinate::new(longitude, latitude)),
        _ => Err(ResolveError::Rejected {
            postcode: postcode.to_string(),
            status: response.status,
            message: "response carried no coordinates".to_string(),
        }),
    }
}
