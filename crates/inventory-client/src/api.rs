//! # Products API Client
//!
//! One request/response exchange per operation against the JSON resource at
//! `{base_url}/products`.
//!
//! ## REST Contract
//! ```text
//! ┌───────────┬────────┬────────────────┬─────────┬──────────────┬──────────────────────┐
//! │ Operation │ Method │ Path           │ Body    │ Success      │ Failure              │
//! ├───────────┼────────┼────────────────┼─────────┼──────────────┼──────────────────────┤
//! │ list      │ GET    │ /products      │ -       │ 200, [..]    │ non-2xx → Server     │
//! │ create    │ POST   │ /products      │ Product │ 200/201      │ non-2xx → Server     │
//! │ update    │ PUT    │ /products/{id} │ Product │ 200          │ 404 → NotFound       │
//! │ delete    │ DELETE │ /products/{id} │ -       │ 200/204      │ 404 → NotFound       │
//! └───────────┴────────┴────────────────┴─────────┴──────────────┴──────────────────────┘
//! ```
//!
//! There is no retry and no client-side timeout; callers decide whether to
//! try again.

use async_trait::async_trait;
use inventory_core::Product;
use mockall::automock;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Path segment of the products collection.
pub const PRODUCTS_PATH: &str = "products";

/// The four operations on the products resource.
#[automock]
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Retrieves every product.
    async fn list(&self) -> ClientResult<Vec<Product>>;

    /// Creates a product; the ID is generated by the caller.
    async fn create(&self, product: &Product) -> ClientResult<Product>;

    /// Replaces the product addressed by `product.id`.
    async fn update(&self, product: &Product) -> ClientResult<Product>;

    /// Deletes the product with the given ID.
    async fn delete(&self, id: &str) -> ClientResult<()>;
}

/// `reqwest` implementation of [`ProductApi`].
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    http: Client,
    base_url: Url,
}

impl HttpProductApi {
    /// Creates a client for the base URL in `config`.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_client(Client::new(), config.base_url()?))
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: Url) -> Self {
        HttpProductApi { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> ClientResult<Url> {
        self.products_url(None)
    }

    fn item_url(&self, id: &str) -> ClientResult<Url> {
        self.products_url(Some(id))
    }

    fn products_url(&self, id: Option<&str>) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ClientError::InvalidUrl(format!("cannot append path to {}", self.base_url))
            })?;
            segments.pop_if_empty().push(PRODUCTS_PATH);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Sends the request and turns any non-2xx status into a typed error.
    ///
    /// A 404 becomes `NotFound` only when `id` is given (single-product
    /// routes); on the collection it is a plain `Server` error.
    async fn execute(&self, request: RequestBuilder, id: Option<&str>) -> ClientResult<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%method, %url, error = %e, "Request failed without a response");
            ClientError::Network(e.to_string())
        })?;

        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "Response received");

        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(%method, %url, error = %e, "Failed to read error response body");
                String::new()
            }
        };
        warn!(%method, %url, status = status.as_u16(), "Request rejected by server");

        match id {
            Some(id) if status == StatusCode::NOT_FOUND => Err(ClientError::NotFound { id: id.to_string() }),
            _ => Err(ClientError::Server {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "Response body did not match the product shape");
        ClientError::from(e)
    })
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> ClientResult<Vec<Product>> {
        let url = self.collection_url()?;
        let response = self.execute(self.http.get(url), None).await?;
        decode(response).await
    }

    async fn create(&self, product: &Product) -> ClientResult<Product> {
        let url = self.collection_url()?;
        let response = self.execute(self.http.post(url).json(product), None).await?;
        decode(response).await
    }

    async fn update(&self, product: &Product) -> ClientResult<Product> {
        let url = self.item_url(&product.id)?;
        let response = self
            .execute(self.http.put(url).json(product), Some(&product.id))
            .await?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        let url = self.item_url(id)?;
        self.execute(self.http.delete(url), Some(id)).await?;
        Ok(())
    }
}
