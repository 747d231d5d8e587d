use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde_json::Value;
use shared::models::{BatchImagesResponse, ImagesResponse};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

const IDS_REQUIRED: &str = "Product IDs array is required";

/// GET /api/product-images/{id}
pub async fn by_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<ImagesResponse> {
    let images = state.images.fetch_images(&id).await;
    Json(ImagesResponse { images })
}

/// POST /api/product-images/batch
pub async fn batch(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<Json<BatchImagesResponse>> {
    let product_ids = parse_product_ids(&body)?;
    tracing::debug!(count = product_ids.len(), "Batch image lookup");

    let results = state.images.fetch_images_batch(&product_ids).await;
    Ok(Json(BatchImagesResponse { results }))
}

/// `productIds` 必须是非空数组；数字 ID 转为字符串
fn parse_product_ids(body: &[u8]) -> AppResult<Vec<String>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::validation(IDS_REQUIRED).with_detail("field", "productIds"))?;

    match value.get("productIds") {
        Some(Value::Array(ids)) if !ids.is_empty() => Ok(ids
            .iter()
            .map(|id| match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()),
        _ => Err(AppError::validation(IDS_REQUIRED).with_detail("field", "productIds")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_parse_product_ids() {
        let ids = parse_product_ids(br#"{"productIds": ["p1", 42]}"#).unwrap();
        assert_eq!(ids, vec!["p1", "42"]);
    }

    #[test]
    fn test_rejects_missing_empty_and_non_array() {
        for body in [
            &br#"{}"#[..],
            br#"{"productIds": []}"#,
            br#"{"productIds": "p1"}"#,
            br#"not json"#,
            b"",
        ] {
            let err = parse_product_ids(body).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
            assert_eq!(err.message, IDS_REQUIRED);
        }
    }
}
