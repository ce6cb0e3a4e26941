//! Tiered suggestion scoring for autocomplete.
//!
//! [`rank`] is a pure function: no I/O, deterministic, total order by
//! descending score with ties kept in original universe order. The
//! universe of known names is an explicit argument rather than shared
//! state, so the ranker is independently testable.

use crate::models::{NameReference, ScoredCandidate};
use crate::resolve::normalize_query;

/// Candidate equals the query exactly.
pub const SCORE_EXACT: u32 = 100;
/// Candidate starts with the query.
pub const SCORE_PREFIX: u32 = 90;
/// Candidate contains the query.
pub const SCORE_SUBSTRING: u32 = 70;
/// Candidate contains the query once hyphens are removed from both.
pub const SCORE_LOOSE: u32 = 50;

/// Rank a universe of known names against a partial query.
///
/// Scores are fixed tier constants, not a continuous function; the first
/// matching tier wins. Zero-score candidates are excluded before
/// truncation to `limit`. An empty or whitespace-only query yields an
/// empty result.
pub fn rank(raw_query: &str, universe: &[NameReference], limit: usize) -> Vec<ScoredCandidate> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return Vec::new();
    }
    let loose_query = query.replace('-', "");

    let mut candidates: Vec<ScoredCandidate> = universe
        .iter()
        .filter_map(|reference| {
            let score = score_name(&reference.name, &query, &loose_query);
            (score > 0).then(|| ScoredCandidate {
                reference: reference.clone(),
                score,
            })
        })
        .collect();

    // Stable sort: ties keep universe order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(limit);
    candidates
}

fn score_name(candidate: &str, query: &str, loose_query: &str) -> u32 {
    if candidate == query {
        SCORE_EXACT
    } else if candidate.starts_with(query) {
        SCORE_PREFIX
    } else if candidate.contains(query) {
        SCORE_SUBSTRING
    } else if candidate.replace('-', "").contains(loose_query) {
        SCORE_LOOSE
    } else {
        0
    }
}
