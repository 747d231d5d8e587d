//! Product Model

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Sentinel stored in `salePrice` / `percentage` when a product is not on sale.
pub const NOT_ON_SALE: &str = "/";

/// Catalog entry, as stored in `product.json`.
///
/// Fields the storefront does not interpret are kept in `extra` so the
/// product view returns everything the catalog carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog ids are written as strings or numbers; both load as a string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(rename = "salePrice", default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Price>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Minimal product, mostly for tests and fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            subcategory: None,
            product_type: None,
            brand: None,
            image: None,
            price: None,
            sale_price: None,
            percentage: None,
            extra: Map::new(),
        }
    }

    pub fn with_hierarchy(
        mut self,
        category: Option<&str>,
        subcategory: Option<&str>,
        product_type: Option<&str>,
    ) -> Self {
        self.category = category.map(str::to_string);
        self.subcategory = subcategory.map(str::to_string);
        self.product_type = product_type.map(str::to_string);
        self
    }

    pub fn with_price(mut self, price: &str, sale_price: Option<&str>) -> Self {
        self.price = Some(Price::from(price));
        self.sale_price = sale_price.map(Price::from);
        self
    }

    /// URL slug derived from the title.
    pub fn slug(&self) -> String {
        crate::slug::slugify(&self.title)
    }

    /// Whether a sale price is set and is not the sentinel.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.as_ref().is_some_and(Price::is_set)
    }
}

/// Display price, kept verbatim (`"1.290"`, `"2,500"`, `"/"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Price(String);

impl Price {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Neither empty nor the not-on-sale sentinel.
    pub fn is_set(&self) -> bool {
        !self.0.is_empty() && self.0 != NOT_ON_SALE
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StringOrNumber::deserialize(deserializer).map(|v| Self(v.into_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Num(serde_json::Number),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Num(n) => n.to_string(),
        }
    }
}

/// Accept `"42"` and `42` alike.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "id": 17,
            "title": "Royal Canin Mini Adult",
            "category": "Hrana za kućne ljubimce",
            "subcategory": "Hrana za pse",
            "type": "Granule",
            "price": "2.490",
            "salePrice": "/",
            "percentage": "/",
            "description": "Za male rase",
            "stock": 4
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "17");
        assert_eq!(product.product_type.as_deref(), Some("Granule"));
        assert_eq!(product.price.as_ref().unwrap().as_str(), "2.490");
        assert!(!product.is_on_sale());
        assert_eq!(product.extra.get("description").unwrap(), "Za male rase");
        assert_eq!(product.extra.get("stock").unwrap(), 4);
        assert_eq!(product.slug(), "royal-canin-mini-adult");
    }

    #[test]
    fn test_numeric_price_and_missing_fields() {
        let product: Product = serde_json::from_str(r#"{"id":"a1","price":1290}"#).unwrap();
        assert_eq!(product.title, "");
        assert!(product.category.is_none());
        assert_eq!(product.price.unwrap().as_str(), "1290");
    }

    #[test]
    fn test_serialize_keeps_wire_names() {
        let product = Product::new("p1", "Ogrlica")
            .with_hierarchy(Some("Oprema"), None, Some("Ogrlice"))
            .with_price("900", Some("750"));
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["salePrice"], "750");
        assert_eq!(value["type"], "Ogrlice");
        assert!(value.get("subcategory").is_none());
        assert!(product.is_on_sale());
    }
}
