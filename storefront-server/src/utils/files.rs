//! 静态文件与页面响应
//!
//! 静态资源按 `css` → `img` → `js` → 根目录 的顺序查找，命中即返回，
//! 所有静态响应都带禁止缓存的响应头。

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// 禁止缓存
pub const NO_STORE: &str = "no-store, no-cache, must-revalidate, private";

/// 静态目录挂载顺序 (相对静态根目录，空串为根目录本身)
const ASSET_MOUNTS: [&str; 4] = ["css", "img", "js", ""];

pub fn apply_no_cache(headers: &mut HeaderMap) {
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
}

pub fn not_found_text() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// 读取静态目录下的 HTML 页面
///
/// 文件缺失时返回纯文本 404
pub async fn html_page(static_dir: &Path, name: &str, status: StatusCode) -> Response {
    let path = static_dir.join(name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (status, Html(bytes)).into_response(),
        Err(e) => {
            tracing::warn!(page = %path.display(), error = %e, "Page file unavailable");
            not_found_text()
        }
    }
}

/// 在静态目录中查找文件
///
/// 未命中返回 `None`，由调用方继续路由解析。
pub async fn serve_static(static_dir: &Path, method: &Method, uri: &Uri) -> Option<Response> {
    if method != Method::GET && method != Method::HEAD {
        return None;
    }

    for mount in ASSET_MOUNTS {
        let req = Request::builder()
            .method(method.clone())
            .uri(uri.clone())
            .body(Body::empty())
            .ok()?;

        let Ok(resp) = ServeDir::new(static_dir.join(mount))
            .append_index_html_on_directories(false)
            .oneshot(req)
            .await;

        if resp.status().is_success() {
            let mut resp = resp.map(Body::new);
            apply_no_cache(resp.headers_mut());
            return Some(resp);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("css/site.css"), "body{}").unwrap();
        fs::write(dir.path().join("img/logo.png"), [0x89, 0x50]).unwrap();
        fs::write(dir.path().join("about.html"), "<h1>O nama</h1>").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_mounted_and_prefixed_paths() {
        let dir = fixture();
        let get = Method::GET;

        // css 目录挂载在根路径，也能通过 /css/ 前缀访问
        let direct = serve_static(dir.path(), &get, &Uri::from_static("/site.css")).await;
        let prefixed = serve_static(dir.path(), &get, &Uri::from_static("/css/site.css")).await;
        assert_eq!(direct.unwrap().status(), StatusCode::OK);

        let resp = prefixed.unwrap();
        assert_eq!(resp.headers()[header::CACHE_CONTROL], NO_STORE);
        assert_eq!(resp.headers()[header::PRAGMA], "no-cache");
        assert_eq!(resp.headers()[header::EXPIRES], "0");
    }

    #[tokio::test]
    async fn test_miss_and_directories() {
        let dir = fixture();
        let get = Method::GET;
        assert!(serve_static(dir.path(), &get, &Uri::from_static("/nope.css")).await.is_none());
        assert!(serve_static(dir.path(), &get, &Uri::from_static("/")).await.is_none());
        assert!(serve_static(dir.path(), &get, &Uri::from_static("/css")).await.is_none());
        assert!(
            serve_static(dir.path(), &Method::POST, &Uri::from_static("/site.css"))
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_html_page() {
        let dir = fixture();
        let resp = html_page(dir.path(), "about.html", StatusCode::OK).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );

        let missing = html_page(dir.path(), "404.html", StatusCode::NOT_FOUND).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
