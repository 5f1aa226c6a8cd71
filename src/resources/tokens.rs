//! Hardware and U2F tokens
//!
//! `/admin/v1/tokens` and `/admin/v1/u2ftokens`.

use serde::Deserialize;

use super::{page_params, ListQuery};
use crate::client::AdminClient;
use crate::error::Result;
use crate::pagination::{retrieve, ListPage};
use crate::params::RequestParams;

/// A hardware security token
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Token {
    #[serde(default)]
    pub token_id: String,
    /// Token type, e.g. `"yk"` or `"h6"`
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub totp_step: Option<u32>,
    /// Users the token is attached to
    #[serde(default)]
    pub users: Vec<super::users::User>,
}

/// A U2F security token
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct U2fToken {
    #[serde(default)]
    pub registration_id: String,
    /// Registration time, seconds since the epoch
    #[serde(default)]
    pub date_added: Option<u64>,
    #[serde(default)]
    pub user: Option<super::users::User>,
}

/// Query for [`AdminClient::get_tokens`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenQuery {
    /// Token type filter; the server requires `serial` alongside it
    pub kind: Option<String>,
    /// Serial number filter
    pub serial: Option<String>,
    /// Explicit page size; setting this disables auto-pagination
    pub limit: Option<u64>,
    /// Starting cursor
    pub offset: Option<u64>,
}

impl TokenQuery {
    /// Create an empty query (auto-paginate all tokens)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by token type and serial (the server requires both together)
    #[must_use]
    pub fn type_and_serial(mut self, kind: impl Into<String>, serial: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self.serial = Some(serial.into());
        self
    }

    /// Request exactly one page of this size
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start from this offset
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new();
        if let Some(kind) = &self.kind {
            params.set("type", kind);
        }
        if let Some(serial) = &self.serial {
            params.set("serial", serial);
        }
        page_params(&mut params, self.limit, self.offset);
        params
    }
}

impl AdminClient {
    /// Retrieve hardware tokens: GET `/admin/v1/tokens`
    pub async fn get_tokens(&self, query: &TokenQuery) -> Result<ListPage<Token>> {
        retrieve(query.to_params(), |p| {
            self.get_list::<Token>("/admin/v1/tokens", p)
        })
        .await
    }

    /// Retrieve one hardware token by id: GET `/admin/v1/tokens/{token_id}`
    pub async fn get_token(&self, token_id: &str) -> Result<Token> {
        self.get_object(
            &format!("/admin/v1/tokens/{token_id}"),
            RequestParams::new(),
        )
        .await
    }

    /// Retrieve U2F tokens: GET `/admin/v1/u2ftokens`
    pub async fn get_u2f_tokens(&self, query: &ListQuery) -> Result<ListPage<U2fToken>> {
        retrieve(query.to_params(), |p| {
            self.get_list::<U2fToken>("/admin/v1/u2ftokens", p)
        })
        .await
    }

    /// Retrieve U2F tokens by registration id:
    /// GET `/admin/v1/u2ftokens/{registration_id}`
    ///
    /// The server answers with a list even for a single registration id.
    pub async fn get_u2f_token(&self, registration_id: &str) -> Result<Vec<U2fToken>> {
        self.get_object(
            &format!("/admin/v1/u2ftokens/{registration_id}"),
            RequestParams::new(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_query_sets_type_and_serial_together() {
        let params = TokenQuery::new().type_and_serial("yk", "001234").to_params();
        assert_eq!(params.get("type"), Some("yk"));
        assert_eq!(params.get("serial"), Some("001234"));
    }

    #[test]
    fn test_token_type_maps_to_kind() {
        let token: Token =
            serde_json::from_str(r#"{"token_id": "DH1", "type": "yk", "serial": "001234"}"#)
                .unwrap();
        assert_eq!(token.kind, "yk");
        assert!(token.totp_step.is_none());
    }

    #[test]
    fn test_u2f_token_deserializes() {
        let token: U2fToken = serde_json::from_str(
            r#"{"registration_id": "D21RU6X1B1DF5P54B6PV", "date_added": 1444678994}"#,
        )
        .unwrap();
        assert_eq!(token.registration_id, "D21RU6X1B1DF5P54B6PV");
        assert_eq!(token.date_added, Some(1_444_678_994));
        assert!(token.user.is_none());
    }
}
