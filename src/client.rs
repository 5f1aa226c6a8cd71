//! The caller-facing Admin API client
//!
//! `AdminClient` binds HTTP verb + path + decode step into the typed
//! helpers the resource modules build their endpoints from. For list
//! endpoints the helper is handed to the pagination driver as the fetch
//! function; everything below it (signing, encoding, retries) lives in the
//! transport.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::pagination::ListPage;
use crate::params::RequestParams;
use crate::response;
use crate::transport::{ApiTransport, ClientConfig, SignedClient};

/// Client for the Perimeter Admin API
///
/// Cheap to clone; clones share the underlying transport. Concurrent calls
/// are independent: each retrieval owns its own parameters and accumulator.
#[derive(Clone)]
pub struct AdminClient {
    transport: Arc<dyn ApiTransport>,
}

impl AdminClient {
    /// Create a client backed by the signed reqwest transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(SignedClient::new(config)?),
        })
    }

    /// Create a client over a caller-supplied transport
    ///
    /// The seam tests use to script responses without a network.
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// GET a list endpoint, decoding one page of records
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: RequestParams,
    ) -> Result<ListPage<T>> {
        let raw = self.transport.send(Method::GET, path, &params).await?;
        response::decode_page(&raw)
    }

    /// GET a single-object endpoint
    pub(crate) async fn get_object<T: DeserializeOwned>(
        &self,
        path: &str,
        params: RequestParams,
    ) -> Result<T> {
        let raw = self.transport.send(Method::GET, path, &params).await?;
        response::decode_object(&raw)
    }

    /// POST form parameters, decoding the returned object
    pub(crate) async fn post_object<T: DeserializeOwned>(
        &self,
        path: &str,
        params: RequestParams,
    ) -> Result<T> {
        let raw = self.transport.send(Method::POST, path, &params).await?;
        response::decode_object(&raw)
    }

    /// POST form parameters where only the OK/FAIL stat matters
    pub(crate) async fn post_status(&self, path: &str, params: RequestParams) -> Result<()> {
        let raw = self.transport.send(Method::POST, path, &params).await?;
        response::decode_status(&raw)
    }

    /// DELETE an object, checking the OK/FAIL stat
    pub(crate) async fn delete_status(&self, path: &str) -> Result<()> {
        let raw = self
            .transport
            .send(Method::DELETE, path, &RequestParams::new())
            .await?;
        response::decode_status(&raw)
    }
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient").finish_non_exhaustive()
    }
}
