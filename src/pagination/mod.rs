//! Pagination engine
//!
//! The Admin API returns bounded pages: each response carries a `metadata`
//! block with a `next_offset` cursor and the page's records. This module
//! holds the two pieces that make whole-collection retrieval work:
//!
//! - [`ListPage`] / [`PageResult`]: a page of decoded records plus its
//!   pagination metadata, with a merge operation that preserves server
//!   ordering across pages.
//! - [`retrieve`]: the driver that repeatedly invokes a fetch function,
//!   follows the cursor, and accumulates pages until the server reports no
//!   further page.

mod driver;
mod types;

pub use driver::{retrieve, DEFAULT_PAGE_LIMIT};
pub use types::{ListPage, PageMeta, PageResult};

#[cfg(test)]
mod tests;
