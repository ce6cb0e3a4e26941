//! Paginated list hydration: index fetch plus concurrent per-item
//! resolution into full detail records.
//!
//! The fan-out is ordered: however the individual network calls complete,
//! the hydrated `items` come back in the index endpoint's `results`
//! order. A page of N references costs roughly the latency of one lookup,
//! not N sequential lookups. Any single failing item fails the whole
//! page; partial pages are never produced.

use futures::future::try_join_all;
use tracing::debug;

use crate::error::Error;
use crate::models::Page;
use crate::resolve::resolve;
use crate::source::RecordSource;

/// Fetch and fully hydrate one page of the record index.
///
/// Fails with [`Error::PageIndex`] for a negative `page_index` or a
/// non-positive `page_size`, and with [`Error::Transport`] /
/// [`Error::NotFound`] when the index fetch or any per-item resolution
/// fails. A `page_index` beyond the data's actual extent yields a
/// legitimate empty page — callers decide whether that is out of range.
pub async fn hydrate(
    source: &dyn RecordSource,
    page_index: i64,
    page_size: i64,
) -> Result<Page, Error> {
    if page_index < 0 {
        return Err(Error::PageIndex(page_index));
    }
    if page_size < 1 {
        return Err(Error::PageIndex(page_size));
    }

    let offset = page_index * page_size;
    let index = source.index(page_size, offset).await?;
    let total_pages = (index.count + page_size - 1) / page_size;

    debug!(
        page_index,
        total_pages,
        fetched = index.results.len(),
        "hydrating index page"
    );

    // Ordered fan-out: one resolution per reference, first failure wins.
    let items = try_join_all(
        index
            .results
            .iter()
            .map(|reference| resolve(source, &reference.name)),
    )
    .await?;

    Ok(Page {
        items,
        page_index,
        total_pages,
    })
}
