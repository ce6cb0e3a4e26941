//! # Pokédex Engine
//!
//! Resolution and ranking engine for a Pokédex browser over the PokéAPI.
//!
//! The engine sits between a presentation layer (list pages, cards,
//! autocomplete) and the upstream species-data REST API. It exposes three
//! entry points and returns plain data; no UI types cross the boundary.
//!
//! ```text
//! ┌──────────────┐    resolve / rank / hydrate    ┌──────────────┐
//! │ Presentation │ ─────────────────────────────▶ │    Engine    │
//! │    Layer     │ ◀───────────────────────────── │              │
//! └──────────────┘   DetailRecord / Page / ...    └──────┬───────┘
//!                                                        │ RecordSource
//!                                                        ▼
//!                                                 ┌──────────────┐
//!                                                 │   PokéAPI    │
//!                                                 │  (HTTP GET)  │
//!                                                 └──────────────┘
//! ```
//!
//! ## Entry points
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`resolve`](fn@resolve) | Free-text query → one canonical [`DetailRecord`] via a fallback chain |
//! | [`rank`] | Score a universe of known names against a partial query for autocomplete |
//! | [`hydrate`](fn@hydrate) | Fetch one index page and concurrently hydrate every entry |
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration (endpoint, timeout, browse defaults) |
//! | [`error`] | Typed error taxonomy |
//! | [`models`] | Wire and result data types |
//! | [`source`] | [`RecordSource`] trait + reqwest-backed PokéAPI client |
//! | [`resolve`](mod@resolve) | Query normalization and the fallback chain |
//! | [`suggest`] | Tiered suggestion scoring |
//! | [`hydrate`](mod@hydrate) | Paginated fan-out/fan-in hydration |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pokedex_engine::{hydrate, resolve, Config, PokeApiSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let source = PokeApiSource::new(&config.api)?;
//!
//! let record = resolve(&source, "Mr Mime").await?;
//! let page = hydrate(&source, 0, config.browse.page_size).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod hydrate;
pub mod models;
pub mod resolve;
pub mod source;
pub mod suggest;

pub use config::{load_config, Config};
pub use error::Error;
pub use hydrate::hydrate;
pub use models::{DetailRecord, IndexPage, NameReference, Page, ScoredCandidate, SpeciesRecord};
pub use resolve::{normalize_query, resolve};
pub use source::{PokeApiSource, RecordSource};
pub use suggest::rank;
