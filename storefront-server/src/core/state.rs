use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::{CatalogSource, JsonFileCatalog};
use crate::core::{Config, Result};
use crate::routing::RouteResolver;
use crate::services::{CloudinaryClient, ImageGateway};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次。请求之间除了磁盘上的
/// 目录文件外没有共享可变状态。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | catalog | Arc<dyn CatalogSource> | 商品目录数据源 |
/// | images | ImageGateway | 图片查询网关 |
/// | resolver | Arc<RouteResolver> | 路由解析 |
/// | started_at | Instant | 启动时间 (健康检查) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn CatalogSource>,
    pub images: ImageGateway,
    pub resolver: Arc<RouteResolver>,
    pub started_at: Instant,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 测试中用于注入内存目录和假的图片查询
    pub fn new(config: Config, catalog: Arc<dyn CatalogSource>, images: ImageGateway) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            images,
            resolver: Arc::new(RouteResolver::default()),
            started_at: Instant::now(),
        }
    }

    /// 按配置初始化: JSON 文件目录 + Cloudinary 网关 (凭据齐全时)
    pub fn initialize(config: &Config) -> Result<Self> {
        let catalog = Arc::new(JsonFileCatalog::new(config.catalog_path.clone()));

        let images = match &config.cloudinary {
            Some(cloudinary) => {
                let client = CloudinaryClient::new(
                    cloudinary.clone(),
                    Duration::from_millis(config.request_timeout_ms),
                    config.image_max_results,
                )?;
                tracing::info!(cloud_name = %cloudinary.cloud_name, "Cloudinary configured successfully");
                ImageGateway::new(Arc::new(client))
            }
            None => {
                tracing::warn!(
                    "Cloudinary credentials not found, product images will be empty. \
                     Set cloud_name, cloudinary_api_key and cloudinary_api_secret to enable."
                );
                ImageGateway::unconfigured()
            }
        };

        tracing::info!(
            catalog = %config.catalog_path.display(),
            static_dir = %config.static_dir.display(),
            "Server state initialized"
        );

        Ok(Self::new(config.clone(), catalog, images))
    }

    pub fn static_dir(&self) -> &Path {
        &self.config.static_dir
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
