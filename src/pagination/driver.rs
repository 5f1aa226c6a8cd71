//! The pagination driver
//!
//! Orchestrates repeated page fetches for one logical retrieval. The fetch
//! function is bound to a single endpoint by the caller; the driver only
//! manages the `offset`/`limit` parameters and merges pages.

use std::future::Future;

use tracing::debug;

use super::types::PageResult;
use crate::error::Result;
use crate::params::RequestParams;

/// Page size used when fetching a full collection
pub const DEFAULT_PAGE_LIMIT: &str = "100";

/// Retrieve one page or the fully merged collection from a list endpoint.
///
/// If the caller already set `limit`, this is a manual single-page request:
/// `fetch` is called exactly once and its page returned verbatim, whatever
/// its `next_offset` says. Otherwise the driver fetches pages of
/// [`DEFAULT_PAGE_LIMIT`] records, following each page's `next_offset`
/// cursor until the server returns an empty one, and merges the pages in
/// fetch order. An unset `offset` defaults to `"0"` in both modes.
///
/// Fetches are strictly sequential; each request's cursor comes from the
/// previous response. The first fetch error aborts the retrieval and is
/// returned unchanged, with no partial result.
///
/// The driver places no bound on the number of iterations: it trusts the
/// server to eventually return an empty cursor. A server that answers with
/// a cursor cycle would make this loop forever.
pub async fn retrieve<P, F, Fut>(mut params: RequestParams, mut fetch: F) -> Result<P>
where
    P: PageResult,
    F: FnMut(RequestParams) -> Fut,
    Fut: Future<Output = Result<P>>,
{
    if params.get("offset").is_none() {
        params.set("offset", "0");
    }

    // Manual mode: the caller picked a page size, hand back exactly one page.
    if params.get("limit").is_some() {
        return fetch(params).await;
    }

    params.set("limit", DEFAULT_PAGE_LIMIT);
    let mut accumulator = fetch(params.clone()).await?;

    while let Some(cursor) = accumulator.metadata().next_cursor().map(str::to_owned) {
        debug!(%cursor, accumulated = accumulator.items().len(), "fetching next page");
        params.set("offset", cursor);
        let mut page = fetch(params.clone()).await?;
        // The new page becomes the accumulator, carrying its own metadata;
        // the earlier records go in front so order stays old-then-new.
        let earlier = accumulator.take_items();
        page.merge_front(earlier);
        accumulator = page;
    }

    Ok(accumulator)
}
