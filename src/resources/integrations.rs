//! Integrations
//!
//! `/admin/v1/integrations`. SSO-type integrations are excluded by the
//! server itself.

use serde::Deserialize;
use serde_json::Value;

use super::ListQuery;
use crate::client::AdminClient;
use crate::error::Result;
use crate::pagination::{retrieve, ListPage};
use crate::params::RequestParams;

/// An application integration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Integration {
    #[serde(default)]
    pub integration_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub name: String,
    /// Integration type, e.g. `"websdk"` or `"adminapi"`
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub groups_allowed: Vec<String>,
    #[serde(default)]
    pub networks_for_api_access: Option<String>,
    #[serde(default)]
    pub policy_key: Option<String>,
    #[serde(default)]
    pub prompt_v4_enabled: String,
    #[serde(default)]
    pub username_normalization_policy: String,
    /// The server sends either an integer 1 or the boolean false here
    #[serde(default)]
    pub self_service_allowed: Option<Value>,
    #[serde(default)]
    pub frameless_auth_prompt_enabled: Option<u32>,
    // Admin API permission flags (0/1), only set for adminapi integrations.
    #[serde(default)]
    pub adminapi_admins: u32,
    #[serde(default)]
    pub adminapi_info: u32,
    #[serde(default)]
    pub adminapi_integrations: u32,
    #[serde(default)]
    pub adminapi_read_log: u32,
    #[serde(default)]
    pub adminapi_read_resource: u32,
    #[serde(default)]
    pub adminapi_settings: u32,
    #[serde(default)]
    pub adminapi_write_resource: u32,
}

impl AdminClient {
    /// Retrieve integrations: GET `/admin/v1/integrations`
    pub async fn get_integrations(&self, query: &ListQuery) -> Result<ListPage<Integration>> {
        retrieve(query.to_params(), |p| {
            self.get_list::<Integration>("/admin/v1/integrations", p)
        })
        .await
    }

    /// Retrieve one integration by key:
    /// GET `/admin/v1/integrations/{integration_key}`
    pub async fn get_integration(&self, integration_key: &str) -> Result<Integration> {
        self.get_object(
            &format!("/admin/v1/integrations/{integration_key}"),
            RequestParams::new(),
        )
        .await
    }
}
