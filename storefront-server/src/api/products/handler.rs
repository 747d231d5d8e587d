use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::view::ProductPage;
use crate::core::ServerState;

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub id: Option<String>,
}

/// GET /product/{slug}
///
/// 未命中时返回 200 和 `product: null`
pub async fn by_slug(State(state): State<ServerState>, Path(slug): Path<String>) -> Response {
    let catalog = state.catalog.load().await;
    match state.resolver.resolve_legacy_slug(&slug, &catalog) {
        Some(hit) => ProductPage::found(&hit).into_response(),
        None => {
            tracing::debug!(slug = %slug, "Legacy product slug not found");
            ProductPage::missing().into_response()
        }
    }
}

/// GET /product?id=
pub async fn by_id(State(state): State<ServerState>, Query(query): Query<ProductQuery>) -> Response {
    let id = query.id.unwrap_or_default();
    let catalog = state.catalog.load().await;
    match state.resolver.resolve_legacy_id(&id, &catalog) {
        Some(hit) => ProductPage::found(&hit).into_response(),
        None => ProductPage::missing().into_response(),
    }
}
