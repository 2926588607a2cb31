use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::ResolveError;
use crate::locate::LocateError;

/// Everything that can stop a provider lookup request.
///
/// Each variant maps to an explicit status; the body is the error text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing postcode query parameter")]
    MissingPostcode,

    #[error(transparent)]
    Source(#[from] ResolveError),

    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error("failed to encode providers: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingPostcode => StatusCode::BAD_REQUEST,
            Self::Source(ResolveError::Rejected { .. }) => StatusCode::NOT_FOUND,
            Self::Source(ResolveError::Timeout { .. })
            | Self::Locate(LocateError::Provider {
                source: ResolveError::Timeout { .. },
                ..
            }) => StatusCode::GATEWAY_TIMEOUT,
            Self::Source(_) | Self::Locate(LocateError::Provider { .. }) => StatusCode::BAD_GATEWAY,
            Self::Locate(LocateError::Catalog(_)) | Self::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::MissingPostcode = self {
            return status.into_response();
        }

        if status.is_server_error() {
            tracing::error!(%status, error = %self, "provider lookup failed");
        } else {
            tracing::warn!(%status, error = %self, "provider lookup rejected");
        }
        (status, self.to_string()).into_response()
    }
}
