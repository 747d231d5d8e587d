use std::path::Path;

use axum::{extract::State, http::StatusCode, response::Response};

use crate::core::ServerState;
use crate::routing::ReservedRoute;
use crate::utils::files;

const INDEX_PAGE: &str = "index.html";

/// 首页与静态资源一样带 no-cache 头
pub async fn index_page(static_dir: &Path) -> Response {
    let mut resp = files::html_page(static_dir, INDEX_PAGE, StatusCode::OK).await;
    if resp.status().is_success() {
        files::apply_no_cache(resp.headers_mut());
    }
    resp
}

async fn reserved_page(state: &ServerState, route: ReservedRoute) -> Response {
    match route.page() {
        Some(page) => files::html_page(state.static_dir(), page, StatusCode::OK).await,
        None => files::not_found_text(),
    }
}

pub async fn index(State(state): State<ServerState>) -> Response {
    index_page(state.static_dir()).await
}

pub async fn about(State(state): State<ServerState>) -> Response {
    reserved_page(&state, ReservedRoute::About).await
}

pub async fn gallery(State(state): State<ServerState>) -> Response {
    reserved_page(&state, ReservedRoute::Gallery).await
}

pub async fn legal(State(state): State<ServerState>) -> Response {
    reserved_page(&state, ReservedRoute::Legal).await
}

pub async fn shopping_cart(State(state): State<ServerState>) -> Response {
    reserved_page(&state, ReservedRoute::ShoppingCart).await
}

pub async fn custom_page(State(state): State<ServerState>) -> Response {
    reserved_page(&state, ReservedRoute::CustomPage).await
}

pub async fn all_products(State(state): State<ServerState>) -> Response {
    reserved_page(&state, ReservedRoute::AllProducts).await
}
