use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use shared::models::CategoryNode;

use crate::core::ServerState;
use crate::utils::files;

/// GET /json/product.json
///
/// 原样返回目录文件，客户端每次都能看到最新的目录
pub async fn raw_catalog(State(state): State<ServerState>) -> Response {
    let Some(bytes) = state.catalog.raw_json().await else {
        return files::not_found_text();
    };

    let mut resp = bytes.into_response();
    let headers = resp.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    files::apply_no_cache(headers);
    resp
}

/// GET /api/categories
pub async fn categories(State(state): State<ServerState>) -> Json<Vec<CategoryNode>> {
    let catalog = state.catalog.load().await;
    Json(catalog.category_tree())
}
