//! Data models
//!
//! Shared between storefront-server and storefront-cart.

pub mod cart;
pub mod category;
pub mod image_ref;
pub mod product;

// Re-exports
pub use cart::*;
pub use category::*;
pub use image_ref::*;
pub use product::{NOT_ON_SALE, Price, Product};
