//! Image Reference Model

use serde::{Deserialize, Serialize};

/// Hosted product image, as returned by the image endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub public_id: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// `GET /api/product-images/{id}` response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<ImageRef>,
}

/// `POST /api/product-images/batch` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchImagesRequest {
    #[serde(rename = "productIds")]
    pub product_ids: Vec<String>,
}

/// `POST /api/product-images/batch` response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchImagesResponse {
    pub results: std::collections::HashMap<String, Vec<ImageRef>>,
}
