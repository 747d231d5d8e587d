//! 商品图片查询网关
//!
//! 每个商品的图片存放在图片 CDN 上以商品 ID 命名的文件夹中。
//! 网关对调用方永不失败：未配置或请求出错都返回空列表并记录日志。

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use shared::models::ImageRef;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::core::config::CloudinaryConfig;
use crate::utils::ErrorCode;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("图片服务请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("图片服务返回 {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl GatewayError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ImageServiceFailed
    }
}

/// 单个文件夹的图片查询
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search_folder(&self, folder: &str) -> Result<Vec<ImageRef>, GatewayError>;
}

/// Cloudinary Search API 客户端 (REST，无 SDK)
#[derive(Debug, Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: CloudinaryConfig,
    max_results: u32,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    expression: String,
    sort_by: [HashMap<&'a str, &'a str>; 1],
    max_results: u32,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    resources: Vec<SearchResource>,
}

#[derive(Deserialize)]
struct SearchResource {
    secure_url: String,
    public_id: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

impl From<SearchResource> for ImageRef {
    fn from(r: SearchResource) -> Self {
        ImageRef {
            url: r.secure_url,
            public_id: r.public_id,
            width: r.width,
            height: r.height,
        }
    }
}

impl CloudinaryClient {
    pub fn new(
        config: CloudinaryConfig,
        timeout: Duration,
        max_results: u32,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            config,
            max_results,
        })
    }

    fn search_url(&self) -> String {
        format!(
            "{}/v1_1/{}/resources/search",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name
        )
    }
}

#[async_trait]
impl ImageSearch for CloudinaryClient {
    async fn search_folder(&self, folder: &str) -> Result<Vec<ImageRef>, GatewayError> {
        let body = SearchRequest {
            expression: format!("folder:{folder}"),
            sort_by: [HashMap::from([("created_at", "desc")])],
            max_results: self.max_results,
        };

        let resp = self
            .http
            .post(self.search_url())
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let result: SearchResponse = resp.json().await?;
        Ok(result.resources.into_iter().map(ImageRef::from).collect())
    }
}

/// 图片网关 - 启动时注入查询实现，未配置时所有查询返回空
#[derive(Clone, Default)]
pub struct ImageGateway {
    search: Option<Arc<dyn ImageSearch>>,
}

impl std::fmt::Debug for ImageGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageGateway")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl ImageGateway {
    pub fn new(search: Arc<dyn ImageSearch>) -> Self {
        Self {
            search: Some(search),
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.search.is_some()
    }

    /// 单个商品的图片；失败返回空列表
    pub async fn fetch_images(&self, product_id: &str) -> Vec<ImageRef> {
        let Some(search) = &self.search else {
            return Vec::new();
        };
        match search.search_folder(product_id).await {
            Ok(images) => images,
            Err(e) => {
                tracing::error!(code = %e.code(), product_id = %product_id, error = %e, "Error fetching images");
                Vec::new()
            }
        }
    }

    /// 批量查询，每个 ID 一个并发请求
    ///
    /// 每个请求的 ID 都出现在结果中；未配置或单个失败时对应空列表。
    /// 不限制并发数，调用方需控制批量大小。
    pub async fn fetch_images_batch(&self, product_ids: &[String]) -> HashMap<String, Vec<ImageRef>> {
        let lookups = product_ids.iter().map(|id| async move {
            let images = self.fetch_images(id).await;
            (id.clone(), images)
        });
        join_all(lookups).await.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSearch;

    #[async_trait]
    impl ImageSearch for FakeSearch {
        async fn search_folder(&self, folder: &str) -> Result<Vec<ImageRef>, GatewayError> {
            if folder == "broken" {
                return Err(GatewayError::Status {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                    body: "upstream".into(),
                });
            }
            Ok(vec![ImageRef {
                url: format!("https://cdn.example/{folder}/1.jpg"),
                public_id: format!("{folder}/1"),
                width: 800,
                height: 600,
            }])
        }
    }

    #[tokio::test]
    async fn test_unconfigured_returns_empty() {
        let gateway = ImageGateway::unconfigured();
        assert!(!gateway.is_configured());
        assert!(gateway.fetch_images("p1").await.is_empty());

        let ids = vec!["p1".to_string(), "p2".to_string()];
        let results = gateway.fetch_images_batch(&ids).await;
        assert_eq!(results.len(), 2);
        assert!(results.values().all(Vec::is_empty));
    }

    #[tokio::test]
    async fn test_failure_is_swallowed() {
        let gateway = ImageGateway::new(Arc::new(FakeSearch));
        assert!(gateway.fetch_images("broken").await.is_empty());
        assert_eq!(gateway.fetch_images("p1").await.len(), 1);

        let err = FakeSearch.search_folder("broken").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ImageServiceFailed);
    }

    #[tokio::test]
    async fn test_batch_partial_results() {
        let gateway = ImageGateway::new(Arc::new(FakeSearch));
        let ids = vec!["p1".to_string(), "broken".to_string(), "p3".to_string()];
        let results = gateway.fetch_images_batch(&ids).await;
        assert_eq!(results.len(), 3);
        assert_eq!(results["p1"][0].public_id, "p1/1");
        assert!(results["broken"].is_empty());
        assert_eq!(results["p3"][0].width, 800);
    }

    #[test]
    fn test_search_url() {
        let client = CloudinaryClient::new(
            CloudinaryConfig {
                cloud_name: "shop".into(),
                api_key: "k".into(),
                api_secret: "s".into(),
                api_base: "https://api.cloudinary.com/".into(),
            },
            Duration::from_secs(1),
            10,
        )
        .unwrap();
        assert_eq!(
            client.search_url(),
            "https://api.cloudinary.com/v1_1/shop/resources/search"
        );
    }

    #[test]
    fn test_search_request_body() {
        let body = SearchRequest {
            expression: "folder:p1".into(),
            sort_by: [HashMap::from([("created_at", "desc")])],
            max_results: 10,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "expression": "folder:p1",
                "sort_by": [{"created_at": "desc"}],
                "max_results": 10
            })
        );
    }
}
