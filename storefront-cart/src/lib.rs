//! Storefront Cart - 购物车与收藏夹
//!
//! 浏览器本地存储的对应实现：
//!
//! - [`storage`] - 键值存储 ([`KeyValueStorage`]): 内存 / JSON 文件
//! - [`schema`] - 存储格式与旧版购物车迁移
//! - [`store`] - [`CartStore`] 购物车与收藏操作
//! - [`totals`] - 按目录快照计算合计
//! - [`client`] - 目录和批量图片接口的客户端

pub mod client;
pub mod error;
pub mod schema;
pub mod storage;
pub mod store;
pub mod totals;

pub use client::StorefrontClient;
pub use error::{ClientError, ClientResult, StoreError, StoreResult};
pub use storage::{JsonFileStorage, KeyValueStorage, MemoryStorage};
pub use store::{CART_KEY, CartStore, SAVED_KEY};
pub use totals::{CartLine, CartTotals, cart_lines, cart_totals};
