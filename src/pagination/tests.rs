//! Tests for the pagination engine

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::{ready, Ready};

use pretty_assertions::assert_eq;

use super::*;
use crate::error::{Error, Result};
use crate::params::RequestParams;

// ============================================================================
// Stub fetcher
// ============================================================================

/// Scripted fetch function: records every parameter set it was called with
/// and replays a fixed sequence of page results.
struct Script {
    calls: RefCell<Vec<RequestParams>>,
    responses: RefCell<VecDeque<Result<ListPage<String>>>>,
}

impl Script {
    fn new(responses: Vec<Result<ListPage<String>>>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            responses: RefCell::new(responses.into()),
        }
    }

    fn fetch(&self, params: RequestParams) -> Ready<Result<ListPage<String>>> {
        self.calls.borrow_mut().push(params);
        ready(
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("fetch called more times than scripted"),
        )
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn param(&self, call: usize, key: &str) -> Option<String> {
        self.calls.borrow()[call].get(key).map(str::to_owned)
    }
}

fn page(items: &[&str], next_offset: &str) -> ListPage<String> {
    ListPage {
        metadata: PageMeta {
            next_offset: if next_offset.is_empty() {
                None
            } else {
                Some(next_offset.to_string())
            },
            ..PageMeta::default()
        },
        items: items.iter().map(|s| (*s).to_string()).collect(),
    }
}

// ============================================================================
// Driver tests
// ============================================================================

#[tokio::test]
async fn test_manual_mode_calls_fetch_exactly_once() {
    // A non-empty next_offset must not trigger a second fetch when the
    // caller supplied a limit.
    let script = Script::new(vec![Ok(page(&["a", "b"], "42"))]);
    let params = RequestParams::new().with("limit", "2");

    let result = retrieve(params, |p| script.fetch(p)).await.unwrap();

    assert_eq!(script.call_count(), 1);
    assert_eq!(result.items(), ["a".to_string(), "b".to_string()]);
    assert_eq!(result.metadata().next_offset.as_deref(), Some("42"));
    assert_eq!(script.param(0, "limit"), Some("2".to_string()));
}

#[tokio::test]
async fn test_manual_mode_defaults_offset_to_zero() {
    let script = Script::new(vec![Ok(page(&[], ""))]);
    let params = RequestParams::new().with("limit", "10");

    retrieve(params, |p| script.fetch(p)).await.unwrap();

    assert_eq!(script.param(0, "offset"), Some("0".to_string()));
}

#[tokio::test]
async fn test_manual_mode_keeps_caller_offset() {
    let script = Script::new(vec![Ok(page(&[], ""))]);
    let params = RequestParams::new().with("limit", "10").with("offset", "30");

    retrieve(params, |p| script.fetch(p)).await.unwrap();

    assert_eq!(script.param(0, "offset"), Some("30".to_string()));
}

#[tokio::test]
async fn test_auto_mode_terminates_and_concatenates() {
    let script = Script::new(vec![
        Ok(page(&["a", "b"], "5")),
        Ok(page(&["c"], "")),
    ]);

    let result = retrieve(RequestParams::new(), |p| script.fetch(p))
        .await
        .unwrap();

    assert_eq!(script.call_count(), 2);
    assert_eq!(
        result.items(),
        ["a".to_string(), "b".to_string(), "c".to_string()]
    );
    assert!(result.metadata().next_cursor().is_none());
}

#[tokio::test]
async fn test_auto_mode_advances_offset_from_cursor() {
    let script = Script::new(vec![
        Ok(page(&["a"], "7")),
        Ok(page(&["b"], "19")),
        Ok(page(&["c"], "")),
    ]);

    retrieve::<ListPage<String>, _, _>(RequestParams::new(), |p| script.fetch(p))
        .await
        .unwrap();

    assert_eq!(script.param(0, "offset"), Some("0".to_string()));
    assert_eq!(script.param(1, "offset"), Some("7".to_string()));
    assert_eq!(script.param(2, "offset"), Some("19".to_string()));
}

#[tokio::test]
async fn test_auto_mode_sets_default_limit_on_every_fetch() {
    let script = Script::new(vec![
        Ok(page(&["a"], "100")),
        Ok(page(&["b"], "")),
    ]);

    retrieve::<ListPage<String>, _, _>(RequestParams::new(), |p| script.fetch(p))
        .await
        .unwrap();

    assert_eq!(script.param(0, "limit"), Some(DEFAULT_PAGE_LIMIT.to_string()));
    assert_eq!(script.param(1, "limit"), Some(DEFAULT_PAGE_LIMIT.to_string()));
}

#[tokio::test]
async fn test_fail_fast_returns_error_without_partial_items() {
    let script = Script::new(vec![
        Ok(page(&["a", "b"], "10")),
        Err(Error::http_status(503, "unavailable")),
        Ok(page(&["e"], "")),
    ]);

    let result = retrieve::<ListPage<String>, _, _>(RequestParams::new(), |p| script.fetch(p)).await;

    assert_eq!(script.call_count(), 2);
    match result {
        Err(Error::HttpStatus { status: 503, .. }) => {}
        other => panic!("expected HTTP 503 error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_first_fetch_error_propagates() {
    let script = Script::new(vec![Err(Error::http_status(401, "unauthorized"))]);

    let result = retrieve::<ListPage<String>, _, _>(RequestParams::new(), |p| script.fetch(p)).await;

    assert_eq!(script.call_count(), 1);
    assert!(matches!(result, Err(Error::HttpStatus { status: 401, .. })));
}

#[tokio::test]
async fn test_three_page_scenario() {
    // Pages [a,b], [c,d], [e] with cursors "10", "20", "" must merge into
    // [a,b,c,d,e] over exactly three fetches at offsets 0, 10, 20.
    let script = Script::new(vec![
        Ok(page(&["a", "b"], "10")),
        Ok(page(&["c", "d"], "20")),
        Ok(page(&["e"], "")),
    ]);

    let result = retrieve(RequestParams::new(), |p| script.fetch(p))
        .await
        .unwrap();

    assert_eq!(script.call_count(), 3);
    assert_eq!(
        result.items(),
        ["a", "b", "c", "d", "e"].map(str::to_string)
    );
    assert_eq!(script.param(0, "offset"), Some("0".to_string()));
    assert_eq!(script.param(1, "offset"), Some("10".to_string()));
    assert_eq!(script.param(2, "offset"), Some("20".to_string()));
}

#[tokio::test]
async fn test_final_metadata_comes_from_last_page() {
    let script = Script::new(vec![
        Ok(ListPage {
            metadata: PageMeta {
                next_offset: Some("2".to_string()),
                total_objects: Some(3),
                ..PageMeta::default()
            },
            items: vec!["a".to_string(), "b".to_string()],
        }),
        Ok(ListPage {
            metadata: PageMeta {
                prev_offset: Some("0".to_string()),
                total_objects: Some(3),
                ..PageMeta::default()
            },
            items: vec!["c".to_string()],
        }),
    ]);

    let result = retrieve(RequestParams::new(), |p| script.fetch(p))
        .await
        .unwrap();

    assert_eq!(result.metadata().total_objects, Some(3));
    assert_eq!(result.metadata().prev_offset.as_deref(), Some("0"));
    assert!(result.metadata().next_offset.is_none());
}

// ============================================================================
// Merge order
// ============================================================================

#[test]
fn test_merge_front_preserves_old_then_new_order() {
    // The accumulated items go in FRONT of the newly fetched page; getting
    // this backwards would silently reverse page order.
    let mut newer = page(&["c", "d"], "");
    newer.merge_front(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(newer.items(), ["a", "b", "c", "d"].map(str::to_string));
}

#[test]
fn test_take_items_leaves_page_empty() {
    let mut p = page(&["a", "b"], "5");
    let taken = p.take_items();
    assert_eq!(taken, vec!["a".to_string(), "b".to_string()]);
    assert!(p.items().is_empty());
    // Metadata is untouched by the move.
    assert_eq!(p.metadata().next_offset.as_deref(), Some("5"));
}

// ============================================================================
// Metadata decoding
// ============================================================================

#[test]
fn test_page_meta_accepts_numeric_cursors() {
    let meta: PageMeta =
        serde_json::from_str(r#"{"next_offset": 100, "prev_offset": 0, "total_objects": 951}"#)
            .unwrap();
    assert_eq!(meta.next_offset.as_deref(), Some("100"));
    assert_eq!(meta.prev_offset.as_deref(), Some("0"));
    assert_eq!(meta.total_objects, Some(951));
}

#[test]
fn test_page_meta_accepts_string_cursors() {
    let meta: PageMeta =
        serde_json::from_str(r#"{"next_offset": "100", "total_objects": "951"}"#).unwrap();
    assert_eq!(meta.next_offset.as_deref(), Some("100"));
    assert_eq!(meta.total_objects, Some(951));
}

#[test]
fn test_page_meta_empty_cursor_means_done() {
    let meta: PageMeta = serde_json::from_str(r#"{"next_offset": ""}"#).unwrap();
    assert!(meta.next_offset.is_none());
    assert!(meta.next_cursor().is_none());
}

#[test]
fn test_page_meta_missing_fields_default() {
    let meta: PageMeta = serde_json::from_str("{}").unwrap();
    assert_eq!(meta, PageMeta::default());
}

#[test]
fn test_page_meta_rejects_non_scalar_cursor() {
    let result: std::result::Result<PageMeta, _> =
        serde_json::from_str(r#"{"next_offset": {"nested": true}}"#);
    assert!(result.is_err());
}

#[test]
fn test_list_page_defaults_when_fields_absent() {
    let page: ListPage<String> = serde_json::from_str(r#"{"stat": "OK"}"#).unwrap();
    assert!(page.items().is_empty());
    assert!(page.metadata().next_cursor().is_none());
}
