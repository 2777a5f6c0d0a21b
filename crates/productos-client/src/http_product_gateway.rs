//! HTTP-based product gateway.
//!
//! Every operation is a single request/response round trip. Nothing is
//! cached and nothing is retried; failures are mapped onto
//! [`ProductosError`] and handed back to the caller.

use async_trait::async_trait;
use productos_config::ApiConfig;
use productos_core::{
    DeleteReceipt, Product, ProductDraft, ProductGateway, ProductId, ProductosError, ProductosResult,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

const RESOURCE_TYPE: &str = "Product";

/// HTTP product gateway.
///
/// Holds an immutable reqwest [`Client`] (and its connection pool) plus the
/// collection URL. Cloning is cheap and clones share the pool.
#[derive(Debug, Clone)]
pub struct HttpProductGateway {
    client: Client,
    collection_url: Url,
}

impl HttpProductGateway {
    /// Creates a new gateway from API configuration.
    pub fn new(config: &ApiConfig) -> ProductosResult<Self> {
        let content_type = HeaderValue::from_str(&config.content_type).map_err(|e| {
            ProductosError::Configuration(format!("Invalid content type '{}': {}", config.content_type, e))
        })?;
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            ProductosError::Configuration(format!("Invalid user agent '{}': {}", config.user_agent, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, content_type);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, user_agent);

        let mut builder = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout())
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout());

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ProductosError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Self::with_client(client, &config.base_url)
    }

    /// Creates a gateway around an existing client.
    ///
    /// The client's own default headers are used as-is.
    pub fn with_client(client: Client, base_url: &str) -> ProductosResult<Self> {
        Ok(Self {
            client,
            collection_url: collection_url(base_url)?,
        })
    }

    /// Returns the collection root every request is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.collection_url.as_str()
    }

    fn item_url(&self, id: &ProductId) -> Url {
        let mut url = self.collection_url.clone();
        // `collection_url` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }

    async fn send(
        &self,
        operation: &'static str,
        id: Option<&ProductId>,
        request: RequestBuilder,
    ) -> ProductosResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| ProductosError::transport(operation, id.map(ToString::to_string), e))?;

        read_body(operation, id, response).await
    }
}

/// Normalizes the base URL so that it names the collection root with a
/// trailing slash.
fn collection_url(base_url: &str) -> ProductosResult<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ProductosError::Configuration(format!("Invalid base URL '{}': {}", base_url, e)))?;

    if url.cannot_be_a_base() {
        return Err(ProductosError::Configuration(format!(
            "Base URL '{}' cannot hold a path",
            base_url
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list_products(&self) -> ProductosResult<Vec<Product>> {
        const OPERATION: &str = "list_products";
        debug!("HTTP ListProducts");

        let request = self.client.request(Method::GET, self.collection_url.clone());
        let body = self.send(OPERATION, None, request).await?;

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let products: Option<Vec<Product>> = decode(OPERATION, &body)?;
        Ok(products.unwrap_or_default())
    }

    async fn get_product(&self, id: &ProductId) -> ProductosResult<Product> {
        const OPERATION: &str = "get_product";
        debug!("HTTP GetProduct: {}", id);

        let request = self.client.request(Method::GET, self.item_url(id));
        let body = self.send(OPERATION, Some(id), request).await?;

        decode(OPERATION, &body)
    }

    async fn create_product(&self, draft: &ProductDraft) -> ProductosResult<Product> {
        const OPERATION: &str = "create_product";
        debug!("HTTP CreateProduct: {}", draft.name);

        let request = self
            .client
            .request(Method::POST, self.collection_url.clone())
            .body(serde_json::to_vec(draft)?);
        let body = self.send(OPERATION, None, request).await?;

        decode(OPERATION, &body)
    }

    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> ProductosResult<Product> {
        const OPERATION: &str = "update_product";
        debug!("HTTP UpdateProduct: {}", id);

        let request = self
            .client
            .request(Method::PUT, self.item_url(id))
            .body(serde_json::to_vec(draft)?);
        let body = self.send(OPERATION, Some(id), request).await?;

        decode(OPERATION, &body)
    }

    async fn delete_product(&self, id: &ProductId) -> ProductosResult<DeleteReceipt> {
        const OPERATION: &str = "delete_product";
        debug!("HTTP DeleteProduct: {}", id);

        let request = self.client.request(Method::DELETE, self.item_url(id));
        let body = self.send(OPERATION, Some(id), request).await?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        // The confirmation format is up to the backend; plain text is kept verbatim.
        Ok(Some(
            serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)),
        ))
    }
}

/// Creates a shareable HTTP product gateway.
pub fn create_http_product_gateway(config: &ApiConfig) -> ProductosResult<Arc<dyn ProductGateway>> {
    let gateway = HttpProductGateway::new(config)?;
    Ok(Arc::new(gateway))
}

async fn read_body(
    operation: &'static str,
    id: Option<&ProductId>,
    response: Response,
) -> ProductosResult<String> {
    let status = response.status();
    debug!(operation, status = status.as_u16(), "HTTP response received");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(map_http_error(operation, id, status, body));
    }

    response
        .text()
        .await
        .map_err(|e| ProductosError::transport(operation, id.map(ToString::to_string), e))
}

fn decode<T: DeserializeOwned>(operation: &'static str, body: &str) -> ProductosResult<T> {
    serde_json::from_str(body).map_err(|e| ProductosError::Decode {
        operation,
        message: e.to_string(),
    })
}

fn map_http_error(
    operation: &'static str,
    id: Option<&ProductId>,
    status: StatusCode,
    body: String,
) -> ProductosError {
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => ProductosError::NotFound {
            resource_type: RESOURCE_TYPE,
            id: id.to_string(),
            body,
        },
        _ => ProductosError::Http {
            operation,
            id: id.map(ToString::to_string),
            status: status.as_u16(),
            body,
        },
    }
}
