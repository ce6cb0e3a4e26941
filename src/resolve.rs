//! Query normalization and the name resolution fallback chain.
//!
//! [`resolve`] turns raw user text into one canonical [`DetailRecord`]
//! by probing the record source in order:
//!
//! 1. canonical detail lookup on the normalized query (the common case);
//! 2. on a miss, species lookup on the same name;
//! 3. on a species hit, detail lookup on the base variety
//!    (`varieties[0]`).
//!
//! The chain short-circuits on the first success. Only a "not found"
//! answer advances it to the next step; a transport failure at any step
//! aborts immediately as [`Error::Transport`] so callers can distinguish
//! "no such record" from "service unavailable".

use tracing::debug;

use crate::error::Error;
use crate::models::DetailRecord;
use crate::source::RecordSource;

/// Normalize raw user text into the record source's name form.
///
/// Lower-cases, trims, and collapses internal whitespace runs to single
/// hyphens (`"Mr Mime"` → `"mr-mime"`). Idempotent: normalizing an
/// already-normalized string yields the same string.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolve a free-text query to a canonical detail record.
///
/// Fails with [`Error::NotFound`] when no resolution path succeeds and
/// with [`Error::Transport`] when the record source is unreachable. An
/// input that normalizes to the empty string fails without touching the
/// network.
pub async fn resolve(source: &dyn RecordSource, raw_query: &str) -> Result<DetailRecord, Error> {
    let name = normalize_query(raw_query);
    if name.is_empty() {
        return Err(Error::NotFound(raw_query.to_string()));
    }

    match source.detail(&name).await {
        Ok(record) => Ok(record),
        Err(err) if err.is_not_found() => resolve_via_species(source, &name).await,
        Err(err) => Err(err),
    }
}

/// Species fallback: the query may be an umbrella species name grouping
/// several concrete forms; the base form is `varieties[0]`.
async fn resolve_via_species(
    source: &dyn RecordSource,
    name: &str,
) -> Result<DetailRecord, Error> {
    debug!(%name, "canonical lookup missed, trying species");

    let species = source.species(name).await?;
    let base = species
        .varieties
        .first()
        .ok_or_else(|| Error::NotFound(name.to_string()))?;

    debug!(%name, variety = %base.pokemon.name, "resolved species to base variety");
    source.detail(&base.pokemon.name).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_query("  Pikachu  "), "pikachu");
        assert_eq!(normalize_query("CHARIZARD"), "charizard");
    }

    #[test]
    fn test_normalize_collapses_whitespace_to_hyphens() {
        assert_eq!(normalize_query("Mr Mime"), "mr-mime");
        assert_eq!(normalize_query("tapu   koko"), "tapu-koko");
        assert_eq!(normalize_query("ho\toh"), "ho-oh");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  Mr   Mime ", "pikachu", "", " \t ", "Giratina Origin"] {
            let once = normalize_query(raw);
            assert_eq!(normalize_query(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_whitespace_only_is_empty() {
        assert_eq!(normalize_query("   "), "");
        assert_eq!(normalize_query(""), "");
    }

    #[test]
    fn test_normalize_preserves_existing_hyphens() {
        assert_eq!(normalize_query("mr-mime"), "mr-mime");
        assert_eq!(normalize_query("Deoxys-Attack"), "deoxys-attack");
    }
}
