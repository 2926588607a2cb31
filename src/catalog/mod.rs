use crate::domain::Provider;

const PROVIDERS_JSON: &str = include_str!("providers.json");

/// Decode the embedded provider list.
///
/// Decoded fresh on every call; callers own and mutate their copy.
pub fn all() -> Result<Vec<Provider>, serde_json::Error> {
    serde_json::from_str(PROVIDERS_JSON)
}
