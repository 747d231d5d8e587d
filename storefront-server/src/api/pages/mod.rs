//! 静态页面路由
//!
//! | 路径 | 页面 |
//! |------|------|
//! | / | index.html |
//! | /about | about.html |
//! | /gallery | galery.html |
//! | /legal | legal.html |
//! | /shopping-cart | shopping-cart.html |
//! | /custom-page, /custom-page/* , /all-products | custom-page.html |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::index_page;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/about", get(handler::about))
        .route("/gallery", get(handler::gallery))
        .route("/legal", get(handler::legal))
        .route("/shopping-cart", get(handler::shopping_cart))
        .route("/custom-page", get(handler::custom_page))
        .route("/custom-page/{*rest}", get(handler::custom_page))
        .route("/all-products", get(handler::all_products))
}
