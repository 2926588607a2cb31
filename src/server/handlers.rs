//! Request handlers.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::AppState;
use super::error::ApiError;
use crate::locate::compute_providers;

#[derive(Debug, Deserialize)]
pub struct ProviderParams {
    pub postcode: Option<String>,
}

/// List every catalog provider with its distance from `?postcode=`.
pub async fn nearby_providers(
    State(state): State<AppState>,
    Query(params): Query<ProviderParams>,
) -> Result<Response, ApiError> {
    let Some(postcode) = params.postcode.filter(|p| !p.trim().is_empty()) else {
        return Err(ApiError::MissingPostcode);
    };

    let source = state.geocoder.resolve(&postcode).await?;
    tracing::info!(%postcode, ?source, "resolved source postcode");

    let providers = compute_providers(state.geocoder.as_ref(), source).await?;
    let body = serde_json::to_vec(&providers).map_err(ApiError::Encode)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}
