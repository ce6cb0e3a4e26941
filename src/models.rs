//! Core data models used throughout the engine.
//!
//! These types mirror the record source's JSON bodies plus the two shapes
//! the engine itself produces ([`ScoredCandidate`] and [`Page`]). All of
//! them are transient: fetched or computed fresh per request, never cached
//! or mutated after creation.

use serde::{Deserialize, Serialize};

/// Lightweight pointer returned by the index endpoint.
///
/// The `url` encodes a positional identifier upstream; the engine relies
/// only on the ordering of the `results` sequence it arrives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameReference {
    pub name: String,
    pub url: String,
}

/// One page of the record source's index endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexPage {
    /// Total number of records upstream, independent of this page's extent.
    pub count: i64,
    pub results: Vec<NameReference>,
}

/// A named sub-resource, e.g. a type or the pokemon a variety points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// One slot in a record's type list (`types[].type.name` upstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Sprite URLs for a record. Only the front sprite is carried; the
/// upstream body holds many more, all ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Canonical, directly-displayable record for one concrete creature form.
///
/// Identity is `id`; uniqueness is assumed from the record source and
/// never re-validated here. Everything beyond `id` and `name` is display
/// material the engine passes through untouched, so those fields
/// deserialize leniently and default to empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: i64,
    pub name: String,
    /// Height in decimetres, as upstream reports it.
    #[serde(default)]
    pub height: i64,
    /// Weight in hectograms, as upstream reports it.
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub sprites: SpriteSet,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

/// One concrete form belonging to a species grouping.
#[derive(Debug, Clone, Deserialize)]
pub struct Variety {
    pub pokemon: NamedResource,
}

/// Umbrella grouping mapping one species name to its concrete forms.
///
/// `varieties` is non-empty upstream; element 0 is the base form.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    pub varieties: Vec<Variety>,
}

/// A scored autocomplete candidate. Ephemeral: produced during ranking,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub reference: NameReference,
    pub score: u32,
}

/// A fully hydrated page of detail records.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Items in the same order as the index endpoint's `results`.
    pub items: Vec<DetailRecord>,
    pub page_index: i64,
    /// `ceil(count / page_size)` from the index response.
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_record_lenient_deserialization() {
        // Representative slice of a PokéAPI /pokemon/{name} body: the
        // engine keeps id/name/height/weight/sprites/types and ignores
        // the rest without failing.
        let json = serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "sprites": {
                "front_default": "https://example.test/pikachu.png",
                "back_default": "https://example.test/pikachu-back.png"
            },
            "types": [
                { "slot": 1, "type": { "name": "electric", "url": "https://example.test/type/13/" } }
            ],
            "abilities": []
        });

        let record: DetailRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.height, 4);
        assert_eq!(record.weight, 60);
        assert_eq!(
            record.sprites.front_default.as_deref(),
            Some("https://example.test/pikachu.png")
        );
        assert_eq!(record.types.len(), 1);
        assert_eq!(record.types[0].kind.name, "electric");
    }

    #[test]
    fn test_detail_record_minimal_body() {
        // Display fields are optional; id and name are not.
        let json = serde_json::json!({ "id": 132, "name": "ditto" });
        let record: DetailRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.height, 0);
        assert!(record.sprites.front_default.is_none());
        assert!(record.types.is_empty());
    }

    #[test]
    fn test_species_record_deserialization() {
        let json = serde_json::json!({
            "varieties": [
                { "is_default": true, "pokemon": { "name": "deoxys-normal", "url": "" } },
                { "is_default": false, "pokemon": { "name": "deoxys-attack", "url": "" } }
            ]
        });
        let species: SpeciesRecord = serde_json::from_value(json).unwrap();
        assert_eq!(species.varieties.len(), 2);
        assert_eq!(species.varieties[0].pokemon.name, "deoxys-normal");
    }

    #[test]
    fn test_index_page_deserialization() {
        let json = serde_json::json!({
            "count": 1302,
            "next": "https://example.test/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://example.test/pokemon/1/" },
                { "name": "ivysaur", "url": "https://example.test/pokemon/2/" }
            ]
        });
        let page: IndexPage = serde_json::from_value(json).unwrap();
        assert_eq!(page.count, 1302);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "ivysaur");
    }
}
