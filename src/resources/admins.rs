//! Administrators
//!
//! `/admin/v1/admins`.

use serde::Deserialize;

use super::ListQuery;
use crate::client::AdminClient;
use crate::error::Result;
use crate::pagination::{retrieve, ListPage};
use crate::params::RequestParams;

/// An administrator account
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Administrator {
    #[serde(default)]
    pub admin_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Role, e.g. `"Owner"` or `"Help Desk"`
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    /// Creation time, seconds since the epoch
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub last_login: Option<u64>,
    #[serde(default)]
    pub password_change_required: bool,
    /// Administrative units this admin is restricted to
    #[serde(default)]
    pub admin_units: Vec<String>,
    #[serde(default)]
    pub restricted_by_admin_units: bool,
    /// Hardware token assigned to the admin, if any
    #[serde(default)]
    pub hardtoken: Option<super::tokens::Token>,
}

impl AdminClient {
    /// Retrieve administrators: GET `/admin/v1/admins`
    pub async fn get_administrators(&self, query: &ListQuery) -> Result<ListPage<Administrator>> {
        retrieve(query.to_params(), |p| {
            self.get_list::<Administrator>("/admin/v1/admins", p)
        })
        .await
    }

    /// Retrieve one administrator by id: GET `/admin/v1/admins/{admin_id}`
    pub async fn get_administrator(&self, admin_id: &str) -> Result<Administrator> {
        self.get_object(&format!("/admin/v1/admins/{admin_id}"), RequestParams::new())
            .await
    }
}
