//! 商品页视图模型
//!
//! 商品字段原样展开，附加 slug、展示图和格式化后的价格。

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::models::Product;
use shared::price::{fallback_image, format_price_string};

use crate::routing::ProductMatch;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub slug: String,
    pub display_image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_sale_price: Option<String>,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            slug: product.slug(),
            display_image: fallback_image(product),
            display_price: product.price.as_ref().and_then(format_price_string),
            display_sale_price: product.sale_price.as_ref().and_then(format_price_string),
        }
    }
}

/// `product` 为 `null` 表示未找到 (仍是 200，页面自行显示空状态)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage<'a> {
    pub product: Option<ProductCard<'a>>,
    pub recommended_products: Vec<ProductCard<'a>>,
}

impl<'a> ProductPage<'a> {
    pub fn found(hit: &ProductMatch<'a>) -> Self {
        Self {
            product: Some(ProductCard::new(hit.product)),
            recommended_products: hit.recommended.iter().copied().map(ProductCard::new).collect(),
        }
    }

    pub fn missing() -> Self {
        Self {
            product: None,
            recommended_products: Vec::new(),
        }
    }
}

impl IntoResponse for ProductPage<'_> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fields() {
        let product = Product::new("7", "Мачја Храна Premium")
            .with_hierarchy(Some("Hrana"), None, None)
            .with_price("2490", Some("/"));
        let card = ProductCard::new(&product);
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["id"], "7");
        assert_eq!(json["title"], "Мачја Храна Premium");
        assert_eq!(json["slug"], "maca-hrana-premium");
        assert_eq!(json["displayPrice"], "2,490");
        assert!(json.get("displaySalePrice").is_none());
        assert!(json["displayImage"].as_str().unwrap().starts_with("/img/"));
    }

    #[test]
    fn test_missing_page() {
        let json = serde_json::to_value(ProductPage::missing()).unwrap();
        assert_eq!(json, serde_json::json!({"product": null, "recommendedProducts": []}));
    }
}
