//! Page result types
//!
//! Defines the pagination metadata shape and the page protocol the driver
//! operates on.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Pagination metadata attached to every list response
///
/// Cursors are opaque tokens echoed back verbatim as the next request's
/// `offset` parameter. On the wire they arrive as either a JSON number or a
/// numeric string; both are normalized to `String` here. An empty or absent
/// `next_offset` signals the end of the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    /// Cursor for the next page; empty/absent means no further pages
    #[serde(default, deserialize_with = "cursor_field")]
    pub next_offset: Option<String>,
    /// Cursor for the previous page (unused by the driver)
    #[serde(default, deserialize_with = "cursor_field")]
    pub prev_offset: Option<String>,
    /// Total count across all pages, advisory only
    #[serde(default, deserialize_with = "count_field")]
    pub total_objects: Option<u64>,
}

impl PageMeta {
    /// The next-page cursor, with empty strings treated as absent
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_offset.as_deref().filter(|c| !c.is_empty())
    }
}

/// Accept a cursor as a JSON string or number, normalized to `String`
fn cursor_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number cursor, got {other}"
        ))),
    }
}

/// Accept a count as a JSON number or numeric string
fn count_field<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid object count: {n}"))),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid object count: {s:?}"))),
        Some(other) => Err(de::Error::custom(format!(
            "expected numeric count, got {other}"
        ))),
    }
}

/// The page protocol the pagination driver operates on
///
/// Implemented once, generically, by [`ListPage`]; the driver only ever
/// merges pages of a single concrete item type per retrieval, so mixing
/// item types is a compile error rather than a runtime condition.
pub trait PageResult {
    /// Record type carried by the page
    type Item;

    /// Pagination metadata for this page
    fn metadata(&self) -> &PageMeta;

    /// The currently accumulated records, in server order
    fn items(&self) -> &[Self::Item];

    /// Take ownership of the accumulated records, leaving the page empty
    fn take_items(&mut self) -> Vec<Self::Item>;

    /// Splice earlier records in front of this page's records
    ///
    /// Used by the driver when an older accumulator hands its records to a
    /// newly fetched page: the result holds the earlier records first, then
    /// this page's own, preserving ascending-offset order.
    fn merge_front(&mut self, earlier: Vec<Self::Item>);
}

/// One decoded page of a list endpoint
///
/// After the driver finishes, `items` holds the whole collection and
/// `metadata` is the final page's metadata (so `next_offset` is empty).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ListPage<T> {
    /// Pagination metadata for this page
    #[serde(default)]
    pub metadata: PageMeta,
    /// Records in the order the server returned them
    #[serde(default, rename = "response")]
    pub items: Vec<T>,
}

impl<T> ListPage<T> {
    /// Pagination metadata for this page
    pub fn metadata(&self) -> &PageMeta {
        &self.metadata
    }

    /// The records, in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, yielding its records
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            metadata: PageMeta::default(),
            items: Vec::new(),
        }
    }
}

impl<T> PageResult for ListPage<T> {
    type Item = T;

    fn metadata(&self) -> &PageMeta {
        &self.metadata
    }

    fn items(&self) -> &[T] {
        &self.items
    }

    fn take_items(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    fn merge_front(&mut self, mut earlier: Vec<T>) {
        earlier.append(&mut self.items);
        self.items = earlier;
    }
}
