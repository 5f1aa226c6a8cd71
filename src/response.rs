//! Response envelope decoding
//!
//! Every Admin API body is wrapped in a stat envelope:
//!
//! ```json
//! { "stat": "OK",   "response": [...], "metadata": { "next_offset": "100", ... } }
//! { "stat": "FAIL", "code": 40002, "message": "...", "message_detail": "..." }
//! ```
//!
//! The transport hands bodies over uninterpreted; this module is the decode
//! step that turns them into typed values or errors. A decode failure is
//! surfaced exactly like a transport failure, which makes the pagination
//! driver abort the whole retrieval.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::pagination::ListPage;
use crate::transport::RawResponse;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    stat: String,
    #[serde(default)]
    code: Option<u64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    message_detail: Option<String>,
    #[serde(default)]
    response: Option<Value>,
}

/// Parse the body as JSON and reject `stat: FAIL` envelopes
///
/// Returns the envelope together with the full body value, since list
/// responses carry their `metadata` as a sibling of `response`.
fn parse_envelope(raw: &RawResponse) -> Result<(Envelope, Value)> {
    let value: Value = serde_json::from_slice(&raw.body).map_err(|e| {
        if raw.status >= 400 {
            Error::http_status(raw.status, String::from_utf8_lossy(&raw.body))
        } else {
            Error::JsonParse(e)
        }
    })?;

    let envelope: Envelope = serde_json::from_value(value.clone())?;
    if envelope.stat != "OK" {
        return Err(Error::api(
            envelope.code.unwrap_or(0),
            envelope.message.unwrap_or_else(|| "unknown error".to_string()),
            envelope.message_detail,
        ));
    }

    Ok((envelope, value))
}

/// Decode a list response into a page of records plus pagination metadata
pub(crate) fn decode_page<T: DeserializeOwned>(raw: &RawResponse) -> Result<ListPage<T>> {
    let (_, value) = parse_envelope(raw)?;
    Ok(serde_json::from_value(value)?)
}

/// Decode a single-object response
pub(crate) fn decode_object<T: DeserializeOwned>(raw: &RawResponse) -> Result<T> {
    let (envelope, _) = parse_envelope(raw)?;
    let response = envelope
        .response
        .ok_or_else(|| Error::decode("envelope has no response field"))?;
    Ok(serde_json::from_value(response)?)
}

/// Decode a response where only the OK/FAIL stat matters
pub(crate) fn decode_status(raw: &RawResponse) -> Result<()> {
    parse_envelope(raw).map(|_| ())
}
