//! 路由解析
//!
//! 按优先级把请求路径解析为 首页 / 保留路径 / 商品 / 分类 / 404：
//!
//! 1. 首段是保留字 → [`Resolution::Reserved`]
//! 2. 无路径段 → [`Resolution::Home`]
//! 3. 单段: 先按商品 slug 精确匹配 (区分大小写)，再按分类 slug 匹配 (忽略大小写)
//! 4. 两段 / 三段: 只匹配 分类/子分类(/类型)
//! 5. 四段及以上 → [`Resolution::NotFound`]
//!
//! 旧版 `/product/:slug` 和 `/product?id=` 走 [`RouteResolver::resolve_legacy_slug`]
//! 和 [`RouteResolver::resolve_legacy_id`]，不经过保留字检查和分类回退。

use serde::Serialize;
use shared::models::Product;

use super::ReservedRoute;
use crate::catalog::Catalog;

/// `/:slug` 商品页的推荐数量
pub const PRODUCT_RECOMMENDATIONS: usize = 20;
/// 旧版商品页的推荐数量
pub const LEGACY_RECOMMENDATIONS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Home,
    Reserved(ReservedRoute),
    Product(ProductMatch<'a>),
    Category(CategoryMatch<'a>),
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductMatch<'a> {
    pub product: &'a Product,
    pub recommended: Vec<&'a Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatch<'a> {
    /// 小写后的路径段
    pub segments: Vec<String>,
    /// 命中的分类显示名；多于一个表示 slug 冲突
    pub labels: Vec<&'a str>,
}

#[derive(Debug, Clone)]
pub struct RouteResolver {
    product_limit: usize,
    legacy_limit: usize,
}

impl Default for RouteResolver {
    fn default() -> Self {
        Self {
            product_limit: PRODUCT_RECOMMENDATIONS,
            legacy_limit: LEGACY_RECOMMENDATIONS,
        }
    }
}

impl RouteResolver {
    pub fn new(product_limit: usize, legacy_limit: usize) -> Self {
        Self {
            product_limit,
            legacy_limit,
        }
    }

    pub fn resolve<'a>(&self, path: &str, catalog: &'a Catalog) -> Resolution<'a> {
        let segments = split_path(path);

        let Some(first) = segments.first() else {
            return Resolution::Home;
        };
        if let Some(reserved) = ReservedRoute::from_segment(first) {
            return Resolution::Reserved(reserved);
        }

        if let [slug] = segments.as_slice()
            && let Some(product) = catalog.find_by_slug(slug)
        {
            return Resolution::Product(ProductMatch {
                product,
                recommended: catalog.recommendations_for(product, self.product_limit),
            });
        }

        self.resolve_category(&segments, catalog)
    }

    /// `/product/:slug`
    pub fn resolve_legacy_slug<'a>(&self, slug: &str, catalog: &'a Catalog) -> Option<ProductMatch<'a>> {
        let product = catalog.find_by_slug(slug)?;
        Some(self.legacy_match(product, catalog))
    }

    /// `/product?id=`
    pub fn resolve_legacy_id<'a>(&self, id: &str, catalog: &'a Catalog) -> Option<ProductMatch<'a>> {
        if id.is_empty() {
            return None;
        }
        let product = catalog.by_id(id)?;
        Some(self.legacy_match(product, catalog))
    }

    fn legacy_match<'a>(&self, product: &'a Product, catalog: &'a Catalog) -> ProductMatch<'a> {
        ProductMatch {
            product,
            recommended: catalog.recommendations_for(product, self.legacy_limit),
        }
    }

    fn resolve_category<'a>(&self, segments: &[&str], catalog: &'a Catalog) -> Resolution<'a> {
        if segments.len() > 3 {
            return Resolution::NotFound;
        }
        let labels = catalog.categories_on_path(segments);
        if labels.is_empty() {
            return Resolution::NotFound;
        }
        Resolution::Category(CategoryMatch {
            segments: segments.iter().map(|s| s.to_lowercase()).collect(),
            labels,
        })
    }
}

/// 按 `/` 切分，丢弃空段 (不额外处理结尾斜杠)
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
