//! 路由解析模块
//!
//! - [`reserved`] - 保留路径段
//! - [`resolver`] - 路径 → 首页 / 商品 / 分类 / 404

pub mod reserved;
pub mod resolver;

pub use reserved::ReservedRoute;
pub use resolver::{
    CategoryMatch, LEGACY_RECOMMENDATIONS, PRODUCT_RECOMMENDATIONS, ProductMatch, Resolution,
    RouteResolver, split_path,
};
