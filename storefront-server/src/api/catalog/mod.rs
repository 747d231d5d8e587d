//! 商品目录路由
//!
//! | 路径 | 说明 |
//! |------|------|
//! | /json/product.json | 原始目录 JSON (禁止缓存) |
//! | /api/categories | 分类树 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/json/product.json", get(handler::raw_catalog))
        .route("/api/categories", get(handler::categories))
}
