//! 商品页路由
//!
//! | 路径 | 说明 |
//! |------|------|
//! | /product/{slug} | 旧版: 按标题 slug 查找，推荐 8 个 |
//! | /product?id= | 旧版: 按 ID 查找，推荐 8 个 |
//!
//! `/:slug` 由 [`crate::api::storefront`] 的兜底处理解析后复用 [`view`]。

mod handler;
pub mod view;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use view::{ProductCard, ProductPage};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/product", get(handler::by_id))
        .route("/product/{slug}", get(handler::by_slug))
}
