//! Users
//!
//! `/admin/v1/users` and its per-user sub-collections (groups, phones,
//! tokens, U2F tokens, bypass codes).

use std::collections::BTreeMap;

use serde::Deserialize;

use super::groups::Group;
use super::phones::Phone;
use super::tokens::{Token, U2fToken};
use super::{page_params, ListQuery};
use crate::client::AdminClient;
use crate::error::Result;
use crate::pagination::{retrieve, ListPage};
use crate::params::RequestParams;

/// A single user
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub alias1: Option<String>,
    #[serde(default)]
    pub alias2: Option<String>,
    #[serde(default)]
    pub alias3: Option<String>,
    #[serde(default)]
    pub alias4: Option<String>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Creation time, seconds since the epoch
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub realname: Option<String>,
    #[serde(default)]
    pub is_enrolled: bool,
    #[serde(default)]
    pub last_directory_sync: Option<u64>,
    #[serde(default)]
    pub last_login: Option<u64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: String,
    /// Groups the user belongs to
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Phones attached to the user
    #[serde(default)]
    pub phones: Vec<Phone>,
    /// Hardware tokens attached to the user
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// Query for [`AdminClient::get_users`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Exact username filter
    pub username: Option<String>,
    /// Explicit page size; setting this disables auto-pagination
    pub limit: Option<u64>,
    /// Starting cursor
    pub offset: Option<u64>,
}

impl UserQuery {
    /// Create an empty query (auto-paginate all users)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by exact username
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
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
        if let Some(username) = &self.username {
            params.set("username", username);
        }
        page_params(&mut params, self.limit, self.offset);
        params
    }
}

/// Writable user fields for create/modify requests
///
/// Unset fields are omitted from the request, so a modify only touches the
/// fields the caller set. Wire keys are listed field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub username: Option<String>,
    pub alias1: Option<String>,
    pub alias2: Option<String>,
    pub alias3: Option<String>,
    pub alias4: Option<String>,
    pub realname: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    /// `"active"`, `"bypass"` or `"disabled"`
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl UserProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }

    #[must_use]
    pub fn alias1(mut self, value: impl Into<String>) -> Self {
        self.alias1 = Some(value.into());
        self
    }

    #[must_use]
    pub fn alias2(mut self, value: impl Into<String>) -> Self {
        self.alias2 = Some(value.into());
        self
    }

    #[must_use]
    pub fn alias3(mut self, value: impl Into<String>) -> Self {
        self.alias3 = Some(value.into());
        self
    }

    #[must_use]
    pub fn alias4(mut self, value: impl Into<String>) -> Self {
        self.alias4 = Some(value.into());
        self
    }

    #[must_use]
    pub fn realname(mut self, value: impl Into<String>) -> Self {
        self.realname = Some(value.into());
        self
    }

    #[must_use]
    pub fn firstname(mut self, value: impl Into<String>) -> Self {
        self.firstname = Some(value.into());
        self
    }

    #[must_use]
    pub fn lastname(mut self, value: impl Into<String>) -> Self {
        self.lastname = Some(value.into());
        self
    }

    #[must_use]
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    #[must_use]
    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    #[must_use]
    pub fn notes(mut self, value: impl Into<String>) -> Self {
        self.notes = Some(value.into());
        self
    }

    pub(crate) fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new();
        let fields: [(&str, &Option<String>); 11] = [
            ("username", &self.username),
            ("alias1", &self.alias1),
            ("alias2", &self.alias2),
            ("alias3", &self.alias3),
            ("alias4", &self.alias4),
            ("realname", &self.realname),
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("email", &self.email),
            ("status", &self.status),
            ("notes", &self.notes),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                params.set(key, value);
            }
        }
        params
    }
}

impl AdminClient {
    /// Retrieve users: GET `/admin/v1/users`
    pub async fn get_users(&self, query: &UserQuery) -> Result<ListPage<User>> {
        retrieve(query.to_params(), |p| {
            self.get_list::<User>("/admin/v1/users", p)
        })
        .await
    }

    /// Retrieve one user by id: GET `/admin/v1/users/{user_id}`
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        self.get_object(&format!("/admin/v1/users/{user_id}"), RequestParams::new())
            .await
    }

    /// Create a user: POST `/admin/v1/users`
    pub async fn create_user(&self, profile: &UserProfile) -> Result<User> {
        self.post_object("/admin/v1/users", profile.to_params())
            .await
    }

    /// Modify a user: POST `/admin/v1/users/{user_id}`
    pub async fn modify_user(&self, user_id: &str, profile: &UserProfile) -> Result<User> {
        self.post_object(&format!("/admin/v1/users/{user_id}"), profile.to_params())
            .await
    }

    /// Delete a user: DELETE `/admin/v1/users/{user_id}`
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.delete_status(&format!("/admin/v1/users/{user_id}"))
            .await
    }

    /// Retrieve a user's groups: GET `/admin/v1/users/{user_id}/groups`
    pub async fn get_user_groups(
        &self,
        user_id: &str,
        query: &ListQuery,
    ) -> Result<ListPage<Group>> {
        let path = format!("/admin/v1/users/{user_id}/groups");
        retrieve(query.to_params(), |p| self.get_list::<Group>(&path, p)).await
    }

    /// Associate a group with a user: POST `/admin/v1/users/{user_id}/groups`
    pub async fn associate_group_with_user(&self, user_id: &str, group_id: &str) -> Result<()> {
        let params = RequestParams::new().with("group_id", group_id);
        self.post_status(&format!("/admin/v1/users/{user_id}/groups"), params)
            .await
    }

    /// Disassociate a group from a user:
    /// DELETE `/admin/v1/users/{user_id}/groups/{group_id}`
    pub async fn disassociate_group_from_user(&self, user_id: &str, group_id: &str) -> Result<()> {
        self.delete_status(&format!("/admin/v1/users/{user_id}/groups/{group_id}"))
            .await
    }

    /// Retrieve a user's phones: GET `/admin/v1/users/{user_id}/phones`
    pub async fn get_user_phones(
        &self,
        user_id: &str,
        query: &ListQuery,
    ) -> Result<ListPage<Phone>> {
        let path = format!("/admin/v1/users/{user_id}/phones");
        retrieve(query.to_params(), |p| self.get_list::<Phone>(&path, p)).await
    }

    /// Retrieve a user's hardware tokens: GET `/admin/v1/users/{user_id}/tokens`
    pub async fn get_user_tokens(
        &self,
        user_id: &str,
        query: &ListQuery,
    ) -> Result<ListPage<Token>> {
        let path = format!("/admin/v1/users/{user_id}/tokens");
        retrieve(query.to_params(), |p| self.get_list::<Token>(&path, p)).await
    }

    /// Associate a hardware token with a user:
    /// POST `/admin/v1/users/{user_id}/tokens`
    pub async fn associate_token_with_user(&self, user_id: &str, token_id: &str) -> Result<String> {
        let params = RequestParams::new().with("token_id", token_id);
        self.post_object(&format!("/admin/v1/users/{user_id}/tokens"), params)
            .await
    }

    /// Retrieve a user's U2F tokens: GET `/admin/v1/users/{user_id}/u2ftokens`
    pub async fn get_user_u2f_tokens(
        &self,
        user_id: &str,
        query: &ListQuery,
    ) -> Result<ListPage<U2fToken>> {
        let path = format!("/admin/v1/users/{user_id}/u2ftokens");
        retrieve(query.to_params(), |p| self.get_list::<U2fToken>(&path, p)).await
    }

    /// Create bypass codes for a user:
    /// POST `/admin/v1/users/{user_id}/bypass_codes`
    ///
    /// `count` limits how many codes the server generates; `None` uses the
    /// server default.
    pub async fn create_user_bypass_codes(
        &self,
        user_id: &str,
        count: Option<u64>,
    ) -> Result<Vec<String>> {
        let mut params = RequestParams::new();
        if let Some(count) = count {
            params.set("count", count.to_string());
        }
        self.post_object(&format!("/admin/v1/users/{user_id}/bypass_codes"), params)
            .await
    }
}
