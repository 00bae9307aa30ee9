//! Access to the creature data service
//!
//! The roster only needs two calls: a paginated name listing for search
//! suggestions and a lookup by name or id. Both are behind the
//! [`PokemonRepository`] trait so callers can swap the HTTP client for a
//! fixture in tests.

mod pokeapi;
mod search;

pub use pokeapi::{PokeApiClient, DEFAULT_ARTWORK_URL_TEMPLATE, DEFAULT_BASE_URL};
pub use search::{plan_search, SearchPlan, MAX_SEARCH_RESULTS, MIN_QUERY_LEN};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TeamEntry;

/// Error returned by repository calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Transport failure or unexpected HTTP status
    #[error("network error: {0}")]
    Network(String),
    /// The service has no record for the key
    #[error("\"{0}\" not found")]
    NotFound(String),
    /// The service answered with a body we could not understand
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A name from the listing endpoint together with its detail URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    #[serde(rename = "url")]
    pub ref_url: String,
}

/// Source of team entries.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// List up to `page_limit` names in service order.
    async fn list_names(&self, page_limit: u32) -> Result<Vec<NamedRef>, RepositoryError>;

    /// Look up a single record by name or numeric id.
    ///
    /// The key is trimmed and lower-cased before the lookup.
    async fn fetch_by_name_or_id(&self, key: &str) -> Result<TeamEntry, RepositoryError>;
}

/// Normalize a lookup key the way the service expects it.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
