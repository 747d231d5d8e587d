//! API 路由模块
//!
//! # 结构
//!
//! - [`pages`] - 静态页面 (首页、关于、画廊等)
//! - [`products`] - 旧版商品页与商品视图模型
//! - [`catalog`] - 目录 JSON 与分类树
//! - [`images`] - 商品图片查询
//! - [`health`] - 健康检查
//! - [`storefront`] - 兜底: 静态文件 + 商品 / 分类解析 + 404

pub mod catalog;
pub mod health;
pub mod images;
pub mod pages;
pub mod products;
pub mod storefront;

use axum::{Router, middleware};
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

use crate::core::ServerState;
use crate::server::middleware::logging_middleware;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(pages::router())
        .merge(products::router())
        .merge(catalog::router())
        .merge(images::router())
        .merge(health::router())
        .fallback(storefront::fallback)
}

/// Build a fully configured application with all middleware and state
///
/// Used by the HTTP server and by in-process tests
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging - reads the request ID set below
        .layer(middleware::from_fn(logging_middleware))
        // ========== Request ID ==========
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Generate unique ID for each request (outermost)
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
