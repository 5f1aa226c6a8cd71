//! Groups
//!
//! `/admin/v1/groups` for listing, `/admin/v2/groups/{group_id}` for
//! single-group lookups.

use serde::Deserialize;

use super::ListQuery;
use crate::client::AdminClient;
use crate::error::Result;
use crate::pagination::{retrieve, ListPage};

/// A group to which users may belong
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub mobile_otp_enabled: bool,
    #[serde(default)]
    pub push_enabled: bool,
    #[serde(default)]
    pub sms_enabled: bool,
    #[serde(default)]
    pub voice_enabled: bool,
}

impl AdminClient {
    /// Retrieve groups: GET `/admin/v1/groups`
    pub async fn get_groups(&self, query: &ListQuery) -> Result<ListPage<Group>> {
        retrieve(query.to_params(), |p| {
            self.get_list::<Group>("/admin/v1/groups", p)
        })
        .await
    }

    /// Retrieve one group by id: GET `/admin/v2/groups/{group_id}`
    pub async fn get_group(&self, group_id: &str) -> Result<Group> {
        self.get_object(
            &format!("/admin/v2/groups/{group_id}"),
            crate::params::RequestParams::new(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_deserializes() {
        let body = r#"{
            "group_id": "DGXXXXXXXXXXXXXXXXXX",
            "name": "helpdesk",
            "desc": "Helpdesk staff",
            "status": "Active",
            "push_enabled": true,
            "sms_enabled": false
        }"#;
        let group: Group = serde_json::from_str(body).unwrap();
        assert_eq!(group.name, "helpdesk");
        assert!(group.push_enabled);
        assert!(!group.voice_enabled);
    }
}
