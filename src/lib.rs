//! # Perimeter Admin API client
//!
//! A Rust client for the Perimeter access-management Admin API: users,
//! groups, phones, hardware tokens, administrators, administrative units
//! and integrations, all exposed by the server as bounded, cursor-paginated
//! collections.
//!
//! The client assembles complete collections transparently. Every list
//! endpoint fetches page after page (following the server's `next_offset`
//! cursor) and merges them into one result, unless the caller asks for an
//! explicit page size, in which case exactly one page is returned.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use perimeter_admin::{AdminClient, ClientConfig, UserQuery, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new(
//!         "https://api-xxxxxxxx.perimeter.example.com",
//!         "DIXXXXXXXXXXXXXXXXXX",
//!         std::env::var("PERIMETER_SECRET_KEY").unwrap(),
//!     );
//!     let client = AdminClient::new(config)?;
//!
//!     // Fetches and merges every page.
//!     let users = client.get_users(&UserQuery::new()).await?;
//!     for user in users.items() {
//!         println!("{} ({})", user.username, user.user_id);
//!     }
//!
//!     // Manual mode: exactly one page of 25.
//!     let page = client.get_users(&UserQuery::new().limit(25)).await?;
//!     println!("next cursor: {:?}", page.metadata().next_offset);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       AdminClient                         │
//! │  get_users() get_groups() get_phones() ... per resource   │
//! └───────────────────────────────────────────────────────────┘
//!                │                         │
//! ┌──────────────┴───────────┐  ┌──────────┴──────────────────┐
//! │   Pagination driver      │  │   Signed transport          │
//! │   offset/limit params    │  │   basic-auth credentials    │
//! │   cursor advance         │  │   retry + backoff           │
//! │   page merge (old→new)   │  │   rate limiting             │
//! └──────────────────────────┘  └─────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Error types for the client
pub mod error;

/// Request parameter map
pub mod params;

/// Page results and the pagination driver
pub mod pagination;

/// Authenticated HTTP transport
pub mod transport;

/// Response envelope decoding
pub mod response;

/// The caller-facing client
pub mod client;

/// Resource models and endpoint bindings
pub mod resources;

pub use client::AdminClient;
pub use error::{Error, Result};
pub use pagination::{ListPage, PageMeta, PageResult};
pub use params::RequestParams;
pub use resources::*;
pub use transport::{ApiTransport, BackoffType, ClientConfig, RateLimit, RawResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
