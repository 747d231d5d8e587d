//! Shared types for the storefront
//!
//! Catalog and cart models, the slug codec, price helpers, and the unified
//! error/response types used by the server and the cart store.

pub mod error;
pub mod models;
pub mod price;
pub mod slug;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use models::{CartEntry, ImageRef, Price, Product};
pub use slug::slugify;
