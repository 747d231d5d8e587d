use std::path::PathBuf;

/// 服务器配置 - 店面服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT (或 PORT) | 3000 | HTTP 服务端口 |
/// | STATIC_DIR | static | 静态文件根目录 |
/// | CATALOG_PATH | {STATIC_DIR}/json/product.json | 商品目录文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 滚动日志目录 |
/// | REQUEST_TIMEOUT_MS | 10000 | 图片 API 请求超时(毫秒) |
/// | IMAGE_MAX_RESULTS | 10 | 每个商品文件夹返回的图片数 |
///
/// 图片 CDN 凭据见 [`CloudinaryConfig`]。
///
/// # 示例
///
/// ```ignore
/// STATIC_DIR=/srv/shop/static HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 静态文件根目录 (页面、css、js、img)
    pub static_dir: PathBuf,
    /// 商品目录 JSON 文件
    pub catalog_path: PathBuf,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 滚动日志目录
    pub log_dir: Option<String>,
    /// 图片 API 请求超时 (毫秒)
    pub request_timeout_ms: u64,
    /// 每个商品文件夹最多返回的图片数
    pub image_max_results: u32,
    /// 图片 CDN 配置 (凭据缺失时为 None)
    pub cloudinary: Option<CloudinaryConfig>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let static_dir: PathBuf = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".into())
            .into();
        let catalog_path = std::env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| static_dir.join("json").join("product.json"));

        Self {
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            static_dir,
            catalog_path,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            image_max_results: std::env::var("IMAGE_MAX_RESULTS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10),
            cloudinary: CloudinaryConfig::from_env(),
        }
    }

    /// 以指定静态目录构建配置，目录文件取 `{static_dir}/json/product.json`
    ///
    /// 常用于测试场景
    pub fn with_static_dir(static_dir: impl Into<PathBuf>) -> Self {
        let static_dir = static_dir.into();
        Self {
            http_port: 0,
            catalog_path: static_dir.join("json").join("product.json"),
            static_dir,
            environment: "test".into(),
            log_level: "info".into(),
            log_dir: None,
            request_timeout_ms: 10000,
            image_max_results: 10,
            cloudinary: None,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// 图片 CDN (Cloudinary) 凭据
///
/// | 环境变量 | 说明 |
/// |----------|------|
/// | cloud_name | 云名称 |
/// | cloudinary_api_key | API key |
/// | cloudinary_api_secret | API secret |
/// | CLOUDINARY_API_BASE | API 地址，默认 https://api.cloudinary.com |
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base: String,
}

impl CloudinaryConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://api.cloudinary.com";

    /// 三项凭据任一缺失 (或为空) 时返回 None
    pub fn from_env() -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Some(Self {
            cloud_name: var("cloud_name")?,
            api_key: var("cloudinary_api_key")?,
            api_secret: var("cloudinary_api_secret")?,
            api_base: var("CLOUDINARY_API_BASE").unwrap_or_else(|| Self::DEFAULT_API_BASE.into()),
        })
    }
}

// 不输出 api_secret
impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}
