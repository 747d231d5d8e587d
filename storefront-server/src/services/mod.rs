//! 外部服务
//!
//! - [`image_gateway`] - 图片 CDN 查询网关

pub mod image_gateway;

pub use image_gateway::{CloudinaryClient, GatewayError, ImageGateway, ImageSearch};
