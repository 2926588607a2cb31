//! Resolve-then-measure pass over the provider catalog.

use thiserror::Error;

use crate::api::{Geocoder, ResolveError};
use crate::catalog;
use crate::domain::{Coordinate, Provider};
use crate::geometry::distance_miles;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("failed to load provider catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("failed to locate provider {name:?}: {source}")]
    Provider {
        name: String,
        #[source]
        source: ResolveError,
    },
}

/// Load the catalog and locate every provider relative to `source`.
pub async fn compute_providers(
    geocoder: &dyn Geocoder,
    source: Coordinate,
) -> Result<Vec<Provider>, LocateError> {
    let providers = catalog::all()?;
    locate_providers(geocoder, providers, source).await
}

/// Attach a coordinate and a distance from `source` to each provider.
///
/// Providers are resolved one at a time, in order, and the order of the
/// returned list matches the input. The first lookup failure aborts the
/// whole pass; nothing partial is returned. Providers without a postal code
/// are passed through unlocated.
pub async fn locate_providers(
    geocoder: &dyn Geocoder,
    mut providers: Vec<Provider>,
    source: Coordinate,
) -> Result<Vec<Provider>, LocateError> {
    for provider in providers.iter_mut() {
        if !provider.is_locatable() {
            tracing::debug!(name = %provider.name, "no postal code, leaving unlocated");
            continue;
        }

        let coordinate = geocoder
            .resolve(&provider.postcode)
            .await
            .map_err(|err| LocateError::Provider {
                name: provider.name.clone(),
                source: err,
            })?;
        provider.set_location(coordinate, distance_miles(source, coordinate));
    }

    Ok(providers)
}
