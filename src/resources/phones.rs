//! Phones
//!
//! `/admin/v1/phones` and single-phone operations.

use serde::Deserialize;

use super::page_params;
use crate::client::AdminClient;
use crate::error::Result;
use crate::pagination::{retrieve, ListPage};
use crate::params::RequestParams;

/// A user's phone
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Phone {
    #[serde(default)]
    pub phone_id: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub encrypted: String,
    #[serde(default)]
    pub fingerprint: String,
    #[serde(default)]
    pub last_seen: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub postdelay: String,
    #[serde(default)]
    pub predelay: String,
    #[serde(default)]
    pub screenlock: String,
    #[serde(default)]
    pub sms_passcodes_sent: bool,
    #[serde(default)]
    pub tampered: String,
    /// Phone type, e.g. `"mobile"` or `"landline"`
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Users the phone is attached to
    #[serde(default)]
    pub users: Vec<super::users::User>,
}

/// Query for [`AdminClient::get_phones`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneQuery {
    /// Exact number filter (E.164)
    pub number: Option<String>,
    /// Extension filter, combined with `number`
    pub extension: Option<String>,
    /// Explicit page size; setting this disables auto-pagination
    pub limit: Option<u64>,
    /// Starting cursor
    pub offset: Option<u64>,
}

impl PhoneQuery {
    /// Create an empty query (auto-paginate all phones)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by exact number
    #[must_use]
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Filter by extension
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
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
        if let Some(number) = &self.number {
            params.set("number", number);
        }
        if let Some(extension) = &self.extension {
            params.set("extension", extension);
        }
        page_params(&mut params, self.limit, self.offset);
        params
    }
}

impl AdminClient {
    /// Retrieve phones: GET `/admin/v1/phones`
    pub async fn get_phones(&self, query: &PhoneQuery) -> Result<ListPage<Phone>> {
        retrieve(query.to_params(), |p| {
            self.get_list::<Phone>("/admin/v1/phones", p)
        })
        .await
    }

    /// Retrieve one phone by id: GET `/admin/v1/phones/{phone_id}`
    pub async fn get_phone(&self, phone_id: &str) -> Result<Phone> {
        self.get_object(
            &format!("/admin/v1/phones/{phone_id}"),
            RequestParams::new(),
        )
        .await
    }

    /// Delete a phone: DELETE `/admin/v1/phones/{phone_id}`
    pub async fn delete_phone(&self, phone_id: &str) -> Result<()> {
        self.delete_status(&format!("/admin/v1/phones/{phone_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_phone_query_params() {
        let params = PhoneQuery::new()
            .number("+15555550100")
            .extension("123")
            .to_params();
        assert_eq!(params.get("number"), Some("+15555550100"));
        assert_eq!(params.get("extension"), Some("123"));
        assert!(params.get("limit").is_none());
    }

    #[test]
    fn test_phone_type_maps_to_kind() {
        let phone: Phone = serde_json::from_str(
            r#"{"phone_id": "DP1", "type": "mobile", "capabilities": ["push", "sms"]}"#,
        )
        .unwrap();
        assert_eq!(phone.kind, "mobile");
        assert_eq!(phone.capabilities, vec!["push", "sms"]);
    }
}
