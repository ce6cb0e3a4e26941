//! Record source abstraction and the PokéAPI-backed implementation.
//!
//! Defines the [`RecordSource`] trait — the seam between the engine and
//! the upstream HTTP API — and [`PokeApiSource`], the reqwest-backed
//! implementation. Consumers and tests can substitute their own
//! implementation (an in-memory double, a different host) without
//! touching the resolver or hydrator.
//!
//! # Status mapping
//!
//! The HTTP implementation maps responses onto the error taxonomy:
//! - 2xx → parsed JSON body
//! - 404 → [`Error::NotFound`]
//! - any other status → [`Error::Transport`]
//! - network error / timeout → [`Error::Transport`]
//!
//! No retry is performed at this layer; callers own retry-by-resubmission.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::Error;
use crate::models::{DetailRecord, IndexPage, SpeciesRecord};

/// Read-only access to the upstream species-data API.
///
/// All three operations are unauthenticated, idempotent GETs. Name
/// arguments are lower-cased before transmission.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch one page of lightweight name references.
    ///
    /// An offset beyond the data's actual extent yields an empty
    /// `results` sequence with a valid `count`, not an error.
    async fn index(&self, limit: i64, offset: i64) -> Result<IndexPage, Error>;

    /// Fetch the canonical detail record for a name.
    async fn detail(&self, name: &str) -> Result<DetailRecord, Error>;

    /// Fetch the species grouping for a name.
    async fn species(&self, name: &str) -> Result<SpeciesRecord, Error>;
}

/// [`RecordSource`] implementation over the PokéAPI REST endpoints.
pub struct PokeApiSource {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiSource {
    /// Build a source from configuration.
    ///
    /// The underlying client carries the configured timeout; there is no
    /// other time bound anywhere in the engine.
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a JSON body, mapping the response status onto the taxonomy.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, subject: &str) -> Result<T, Error> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "record source request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "record source returned {} for {}",
                status, url
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RecordSource for PokeApiSource {
    async fn index(&self, limit: i64, offset: i64) -> Result<IndexPage, Error> {
        let path = format!("pokemon?limit={}&offset={}", limit, offset);
        self.get_json(&path, "index").await
    }

    async fn detail(&self, name: &str) -> Result<DetailRecord, Error> {
        let name = name.to_lowercase();
        let path = format!("pokemon/{}", name);
        self.get_json(&path, &name).await
    }

    async fn species(&self, name: &str) -> Result<SpeciesRecord, Error> {
        let name = name.to_lowercase();
        let path = format!("pokemon-species/{}", name);
        self.get_json(&path, &name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = ApiConfig {
            base_url: "https://pokeapi.co/api/v2/".to_string(),
            timeout_secs: 30,
        };
        let source = PokeApiSource::new(&config).unwrap();
        assert_eq!(source.base_url, "https://pokeapi.co/api/v2");
    }
}
