//! 目录数据源
//!
//! 生产环境从 JSON 文件读取，每次调用都重新读取和解析 (无缓存)。
//! 读取或解析失败时记录错误并返回空目录，页面显示空状态而不是 5xx。

use async_trait::async_trait;
use serde_json::Value;
use shared::models::Product;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Catalog;
use crate::utils::ErrorCode;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("读取目录文件失败 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("目录 JSON 解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("目录顶层不是数组")]
    NotAnArray,
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::CatalogUnavailable
    }
}

/// 商品目录数据源
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// 加载目录快照；失败时返回空目录
    async fn load(&self) -> Catalog;

    /// 原始目录 JSON，用于 `GET /json/product.json`
    async fn raw_json(&self) -> Option<Vec<u8>>;
}

/// JSON 文件目录
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取并解析目录文件
    ///
    /// 顶层必须是数组；无法解析为商品的单个条目会被跳过并记录警告。
    pub async fn try_load(&self) -> Result<Catalog, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_catalog(&bytes)
    }
}

/// 解析目录 JSON
pub fn parse_catalog(bytes: &[u8]) -> Result<Catalog, CatalogError> {
    let Value::Array(entries) = serde_json::from_slice::<Value>(bytes)? else {
        return Err(CatalogError::NotAnArray);
    };

    let mut products = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Product>(entry) {
            Ok(product) => products.push(product),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed catalog entry");
            }
        }
    }
    Ok(Catalog::new(products))
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Catalog {
        match self.try_load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(
                    code = %e.code(),
                    path = %self.path.display(),
                    error = %e,
                    "Error loading products data"
                );
                Catalog::empty()
            }
        }
    }

    async fn raw_json(&self) -> Option<Vec<u8>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Catalog file not readable");
                None
            }
        }
    }
}

/// 内存目录 (测试用)
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Catalog {
        Catalog::new(self.products.clone())
    }

    async fn raw_json(&self) -> Option<Vec<u8>> {
        serde_json::to_vec(&self.products).ok()
    }
}
