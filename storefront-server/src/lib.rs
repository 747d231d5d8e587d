//! Storefront Server - 宠物用品网店的 HTTP 服务
//!
//! # 架构概述
//!
//! - **商品目录** (`catalog`): 每次请求重新读取 JSON 目录文件
//! - **路由解析** (`routing`): 路径 → 首页 / 商品页 / 分类页 / 404
//! - **图片网关** (`services`): 按商品 ID 查询图片 CDN 文件夹
//! - **HTTP API** (`api`): 页面、目录、图片、健康检查
//!
//! # 模块结构
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── catalog/       # 目录数据源、查询、分类树
//! ├── routing/       # 保留路径、路由解析
//! ├── services/      # 图片网关
//! ├── api/           # HTTP 路由和处理器
//! ├── server/        # 中间件
//! └── utils/         # 日志、静态文件
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod routing;
pub mod server;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use catalog::{Catalog, CatalogSource, JsonFileCatalog, StaticCatalog};
pub use core::{Config, Server, ServerState};
pub use routing::{Resolution, RouteResolver};
pub use services::{ImageGateway, ImageSearch};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
