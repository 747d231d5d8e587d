//! 保留路径段
//!
//! 首段命中保留字的路径交给专门的页面/静态处理器，永远不参与商品或分类解析。

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservedRoute {
    About,
    Gallery,
    Legal,
    CustomPage,
    ShoppingCart,
    Product,
    AllProducts,
    Css,
    Js,
    Img,
    Json,
    Api,
}

impl ReservedRoute {
    pub const ALL: [ReservedRoute; 12] = [
        Self::About,
        Self::Gallery,
        Self::Legal,
        Self::CustomPage,
        Self::ShoppingCart,
        Self::Product,
        Self::AllProducts,
        Self::Css,
        Self::Js,
        Self::Img,
        Self::Json,
        Self::Api,
    ];

    /// 忽略 ASCII 大小写: `/About` 与 `/about` 相同
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.segment().eq_ignore_ascii_case(segment))
    }

    pub fn segment(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Gallery => "gallery",
            Self::Legal => "legal",
            Self::CustomPage => "custom-page",
            Self::ShoppingCart => "shopping-cart",
            Self::Product => "product",
            Self::AllProducts => "all-products",
            Self::Css => "css",
            Self::Js => "js",
            Self::Img => "img",
            Self::Json => "json",
            Self::Api => "api",
        }
    }

    /// 对应的静态 HTML 页面 (相对静态目录)
    pub fn page(&self) -> Option<&'static str> {
        match self {
            Self::About => Some("about.html"),
            Self::Gallery => Some("galery.html"),
            Self::Legal => Some("legal.html"),
            Self::ShoppingCart => Some("shopping-cart.html"),
            Self::CustomPage | Self::AllProducts => Some("custom-page.html"),
            _ => None,
        }
    }

    /// 静态资源前缀: 未命中文件时返回纯文本 404
    pub fn is_asset_prefix(&self) -> bool {
        matches!(self, Self::Css | Self::Js | Self::Img | Self::Json)
    }
}
