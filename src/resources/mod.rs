//! Resource models and endpoint bindings
//!
//! One module per Admin API resource. Each module holds the serde models,
//! explicit query/write parameter mapping (every optional field and its
//! wire key listed by hand, no reflection) and the `AdminClient` methods
//! binding verb + path + decode.
//!
//! All list endpoints go through the pagination driver: with no `limit` on
//! the query the whole collection is fetched and merged; setting `limit`
//! returns exactly one page.

mod account;
mod admin_units;
mod admins;
mod groups;
mod integrations;
mod phones;
mod tokens;
mod users;

pub use account::{AccountInfo, AccountSettings};
pub use admin_units::AdministrativeUnit;
pub use admins::Administrator;
pub use groups::Group;
pub use integrations::Integration;
pub use phones::{Phone, PhoneQuery};
pub use tokens::{Token, TokenQuery, U2fToken};
pub use users::{User, UserProfile, UserQuery};

use crate::params::RequestParams;

/// Paging controls shared by list endpoints without resource filters
///
/// Leaving both fields unset retrieves the whole collection; setting
/// `limit` switches to manual single-page mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Explicit page size; setting this disables auto-pagination
    pub limit: Option<u64>,
    /// Starting cursor
    pub offset: Option<u64>,
}

impl ListQuery {
    /// Create an empty query (auto-paginate the whole collection)
    pub fn new() -> Self {
        Self::default()
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

    pub(crate) fn to_params(self) -> RequestParams {
        let mut params = RequestParams::new();
        page_params(&mut params, self.limit, self.offset);
        params
    }
}

/// Apply optional paging fields to a parameter map
pub(crate) fn page_params(params: &mut RequestParams, limit: Option<u64>, offset: Option<u64>) {
    if let Some(limit) = limit {
        params.set("limit", limit.to_string());
    }
    if let Some(offset) = offset {
        params.set("offset", offset.to_string());
    }
}
