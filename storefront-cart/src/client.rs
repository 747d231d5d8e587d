//! Storefront HTTP client
//!
//! Fail-open wrappers around the catalog and batch image endpoints. The
//! `try_*` variants expose the error; the plain variants log it and return an
//! empty value.

use serde::Deserialize;
use shared::models::{BatchImagesRequest, ImageRef, Product};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct BatchReply {
    #[serde(default)]
    results: HashMap<String, Vec<ImageRef>>,
}

#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /json/product.json
    pub async fn try_load_products(&self) -> ClientResult<Vec<Product>> {
        let resp = self.http.get(self.url("/json/product.json")).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::InvalidResponse(format!("HTTP {status}")));
        }
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn load_products(&self) -> Vec<Product> {
        self.try_load_products().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error loading product catalog");
            Vec::new()
        })
    }

    /// POST /api/product-images/batch
    ///
    /// A reply without `results` (validation error body) yields an empty map.
    pub async fn try_fetch_images_batch(
        &self,
        product_ids: &[String],
    ) -> ClientResult<HashMap<String, Vec<ImageRef>>> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let body = BatchImagesRequest {
            product_ids: product_ids.to_vec(),
        };
        let resp = self
            .http
            .post(self.url("/api/product-images/batch"))
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .json(&body)
            .send()
            .await?;
        let bytes = resp.bytes().await?;
        let reply: BatchReply = serde_json::from_slice(&bytes)?;
        Ok(reply.results)
    }

    pub async fn fetch_images_batch(&self, product_ids: &[String]) -> HashMap<String, Vec<ImageRef>> {
        self.try_fetch_images_batch(product_ids)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Error fetching batch images");
                HashMap::new()
            })
    }
}
