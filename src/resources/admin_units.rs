//! Administrative units
//!
//! `/admin/v1/administrative_units`.

use serde::Deserialize;

use super::ListQuery;
use crate::client::AdminClient;
use crate::error::Result;
use crate::pagination::{retrieve, ListPage};
use crate::params::RequestParams;

/// An administrative unit scoping what restricted admins can manage
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdministrativeUnit {
    #[serde(default)]
    pub admin_unit_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Group ids in scope, when restricted by groups
    #[serde(default)]
    pub groups: Option<Vec<String>>,
    /// Integration keys in scope, when restricted by integrations
    #[serde(default)]
    pub integrations: Option<Vec<String>>,
    #[serde(default)]
    pub restrict_by_groups: bool,
    #[serde(default)]
    pub restrict_by_integrations: bool,
}

impl AdminClient {
    /// Retrieve administrative units: GET `/admin/v1/administrative_units`
    pub async fn get_administrative_units(
        &self,
        query: &ListQuery,
    ) -> Result<ListPage<AdministrativeUnit>> {
        retrieve(query.to_params(), |p| {
            self.get_list::<AdministrativeUnit>("/admin/v1/administrative_units", p)
        })
        .await
    }

    /// Retrieve one administrative unit by id:
    /// GET `/admin/v1/administrative_units/{admin_unit_id}`
    pub async fn get_administrative_unit(
        &self,
        admin_unit_id: &str,
    ) -> Result<AdministrativeUnit> {
        self.get_object(
            &format!("/admin/v1/administrative_units/{admin_unit_id}"),
            RequestParams::new(),
        )
        .await
    }
}
