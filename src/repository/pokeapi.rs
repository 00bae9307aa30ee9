//! HTTP repository backed by PokéAPI

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::{normalize_key, NamedRef, PokemonRepository, RepositoryError};
use crate::models::{SpriteUrls, TeamEntry};

/// PokéAPI endpoint for individual records and the name listing
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon/";

/// Official artwork lives outside the record; `{id}` is replaced with the numeric id
pub const DEFAULT_ARTWORK_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png";

#[derive(Debug, Deserialize)]
struct ListPage {
    results: Vec<NamedRef>,
}

#[derive(Debug, Deserialize)]
struct PokemonRecord {
    id: u32,
    name: String,
    sprites: SpriteRecord,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
struct SpriteRecord {
    front_default: Option<String>,
    front_shiny: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedType,
}

#[derive(Debug, Deserialize)]
struct NamedType {
    name: String,
}

/// [`PokemonRepository`] talking to the public PokéAPI service.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
    artwork_url_template: String,
}

impl PokeApiClient {
    /// Build a client for `base_url` (a trailing `/` is added if missing).
    pub fn new(
        base_url: &str,
        artwork_url_template: &str,
        timeout_ms: u64,
    ) -> Result<Self, RepositoryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| RepositoryError::Network(format!("failed to build HTTP client: {}", e)))?;

        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { client, base_url, artwork_url_template: artwork_url_template.to_string() })
    }

    /// Artwork URL for a numeric id.
    pub fn artwork_url(&self, id: u32) -> String {
        self.artwork_url_template.replace("{id}", &id.to_string())
    }

    fn record_to_entry(&self, record: PokemonRecord) -> TeamEntry {
        TeamEntry {
            id: record.id,
            sprites: SpriteUrls {
                default: record.sprites.front_default,
                shiny: record.sprites.front_shiny,
                artwork: Some(self.artwork_url(record.id)),
            },
            name: record.name,
            types: record.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, key: &str) -> Result<T, RepositoryError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RepositoryError::Network(format!("GET {} failed: {}", url, e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(RepositoryError::NotFound(key.to_string())),
            status if !status.is_success() => {
                return Err(RepositoryError::Network(format!("GET {} returned HTTP {}", url, status)))
            }
            _ => {}
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RepositoryError::InvalidResponse(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl PokemonRepository for PokeApiClient {
    async fn list_names(&self, page_limit: u32) -> Result<Vec<NamedRef>, RepositoryError> {
        let url = format!("{}?limit={}", self.base_url, page_limit);
        let page: ListPage = self.get_json(&url, "name listing").await?;
        tracing::info!("fetched {} names", page.results.len());
        Ok(page.results)
    }

    async fn fetch_by_name_or_id(&self, key: &str) -> Result<TeamEntry, RepositoryError> {
        let key = normalize_key(key);
        if key.is_empty() {
            return Err(RepositoryError::NotFound(key));
        }
        let url = format!("{}{}", self.base_url, key);
        let record: PokemonRecord = self.get_json(&url, &key).await?;
        Ok(self.record_to_entry(record))
    }
}
