//! 商品图片路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/product-images/{id} | GET | 单个商品图片 |
//! | /api/product-images/batch | POST | 批量查询 `{productIds: [...]}` |
//!
//! 图片服务未配置或查询失败时返回空列表 (HTTP 200)。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/product-images", image_routes())
}

fn image_routes() -> Router<ServerState> {
    Router::new()
        .route("/batch", post(handler::batch))
        .route("/{id}", get(handler::by_product))
}
