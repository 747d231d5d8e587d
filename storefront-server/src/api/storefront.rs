//! 兜底路由
//!
//! 所有未被显式路由匹配的请求：先查静态文件，再交给 [`RouteResolver`] 解析
//! 为 首页 / 商品页 / 分类页 / 404。
//!
//! [`RouteResolver`]: crate::routing::RouteResolver

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use super::pages::index_page;
use super::products::ProductPage;
use crate::core::ServerState;
use crate::routing::{ReservedRoute, Resolution, split_path};
use crate::utils::files;

pub const NOT_FOUND_PAGE: &str = "404.html";
const CATEGORY_PAGE: &str = "custom-page.html";

pub async fn fallback(State(state): State<ServerState>, req: Request) -> Response {
    let method = req.method();
    if method != Method::GET && method != Method::HEAD {
        return files::not_found_text();
    }

    if let Some(resp) = files::serve_static(state.static_dir(), method, req.uri()).await {
        return resp;
    }

    let path = req.uri().path();
    let catalog = state.catalog.load().await;

    match state.resolver.resolve(path, &catalog) {
        Resolution::Home => index_page(state.static_dir()).await,
        Resolution::Reserved(route) => reserved(&state, route, path).await,
        Resolution::Product(hit) => {
            tracing::debug!(product_id = %hit.product.id, recommended = hit.recommended.len(), "Product page");
            ProductPage::found(&hit).into_response()
        }
        Resolution::Category(hit) => {
            if hit.labels.len() > 1 {
                tracing::debug!(segments = ?hit.segments, labels = ?hit.labels, "Category slug shared by several labels");
            }
            files::html_page(state.static_dir(), CATEGORY_PAGE, StatusCode::OK).await
        }
        Resolution::NotFound => not_found_page(&state).await,
    }
}

/// 保留首段但没有显式路由命中的路径 (大小写不同的 `/About`、`/Custom-Page/x` 等)
///
/// `/css/` `/js/` `/img/` `/json/` 下缺失的资源返回纯文本 404，其余走 404 页面。
async fn reserved(state: &ServerState, route: ReservedRoute, path: &str) -> Response {
    // 首段与保留字只差 ASCII 大小写，字节长度相同
    let rest = path
        .trim_start_matches('/')
        .get(route.segment().len()..)
        .unwrap_or_default();
    if route.is_asset_prefix() && rest.starts_with('/') {
        return files::not_found_text();
    }
    let single_segment = split_path(path).len() == 1;
    if (single_segment || route == ReservedRoute::CustomPage)
        && let Some(page) = route.page()
    {
        return files::html_page(state.static_dir(), page, StatusCode::OK).await;
    }
    not_found_page(state).await
}

async fn not_found_page(state: &ServerState) -> Response {
    files::html_page(state.static_dir(), NOT_FOUND_PAGE, StatusCode::NOT_FOUND).await
}
