//! CartStore - 购物车与收藏夹
//!
//! 两个存储键：`cart` (商品 ID + 数量) 和 `savedItems` (商品 ID 列表)。
//! 每次操作都重新读取存储，写入整个值；读取失败按空集合处理，写入失败返回错误。

use shared::models::{CartEntry, Product};

use crate::error::StoreResult;
use crate::schema;
use crate::storage::KeyValueStorage;
use crate::totals::{self, CartTotals};

pub const CART_KEY: &str = "cart";
pub const SAVED_KEY: &str = "savedItems";

/// 收藏状态变化回调: (商品 ID, 是否已收藏)
pub type SavedObserver = Box<dyn Fn(&str, bool) + Send + Sync>;

pub struct CartStore<S> {
    storage: S,
    observers: Vec<SavedObserver>,
}

impl<S: std::fmt::Debug> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage", &self.storage)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<S: KeyValueStorage> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            observers: Vec::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// 注册收藏变化回调，仅在收藏集合实际变化后调用
    pub fn on_saved_change(&mut self, observer: impl Fn(&str, bool) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Storage read failed, treating as empty");
                None
            }
        }
    }

    fn notify(&self, product_id: &str, is_saved: bool) {
        for observer in &self.observers {
            observer(product_id, is_saved);
        }
    }

    // ========== Cart ==========

    /// 当前购物车
    ///
    /// 旧版 ID 列表格式在这里迁移并立即写回；写回失败只记录日志。
    pub fn get_cart(&mut self) -> Vec<CartEntry> {
        let Some(raw) = self.read(CART_KEY) else {
            return Vec::new();
        };
        let decoded = schema::decode_cart(&raw);
        if decoded.migrated {
            tracing::info!(entries = decoded.entries.len(), "Migrating legacy cart format");
            if let Err(e) = self.write_cart(&decoded.entries) {
                tracing::warn!(error = %e, "Failed to persist migrated cart");
            }
        }
        decoded.entries
    }

    fn write_cart(&mut self, entries: &[CartEntry]) -> StoreResult<()> {
        let encoded = schema::encode_cart(entries)?;
        self.storage.set_item(CART_KEY, &encoded)
    }

    /// 加入购物车，已存在则累加数量
    ///
    /// 数量为 0 时不做任何操作并返回 `false`
    pub fn add_to_cart(&mut self, product_id: &str, quantity: u32) -> StoreResult<bool> {
        if quantity == 0 {
            return Ok(false);
        }
        let mut cart = self.get_cart();
        match cart.iter_mut().find(|e| e.id == product_id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => cart.push(CartEntry::new(product_id, quantity)),
        }
        self.write_cart(&cart)?;
        Ok(true)
    }

    pub fn remove_from_cart(&mut self, product_id: &str) -> StoreResult<bool> {
        let mut cart = self.get_cart();
        let Some(index) = cart.iter().position(|e| e.id == product_id) else {
            return Ok(false);
        };
        cart.remove(index);
        self.write_cart(&cart)?;
        Ok(true)
    }

    /// 设置数量；≤0 等同于移除，不存在的商品返回 `false`
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> StoreResult<bool> {
        let mut cart = self.get_cart();
        let Some(entry) = cart.iter_mut().find(|e| e.id == product_id) else {
            return Ok(false);
        };
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }
        entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.write_cart(&cart)?;
        Ok(true)
    }

    pub fn cart_item_quantity(&mut self, product_id: &str) -> u32 {
        self.get_cart()
            .iter()
            .find(|e| e.id == product_id)
            .map_or(0, |e| e.quantity)
    }

    pub fn clear_cart(&mut self) -> StoreResult<()> {
        self.write_cart(&[])
    }

    /// 按目录快照计算合计；目录中已不存在的商品被忽略
    pub fn cart_totals(&mut self, products: &[Product]) -> CartTotals {
        totals::cart_totals(&self.get_cart(), products)
    }

    // ========== Saved items ==========

    pub fn get_saved(&self) -> Vec<String> {
        self.read(SAVED_KEY)
            .map(|raw| schema::decode_saved(&raw))
            .unwrap_or_default()
    }

    fn write_saved(&mut self, ids: &[String]) -> StoreResult<()> {
        let encoded = schema::encode_saved(ids)?;
        self.storage.set_item(SAVED_KEY, &encoded)
    }

    /// 已收藏时返回 `false`
    pub fn add_to_saved(&mut self, product_id: &str) -> StoreResult<bool> {
        let mut saved = self.get_saved();
        if saved.iter().any(|id| id == product_id) {
            return Ok(false);
        }
        saved.push(product_id.to_string());
        self.write_saved(&saved)?;
        self.notify(product_id, true);
        Ok(true)
    }

    pub fn remove_from_saved(&mut self, product_id: &str) -> StoreResult<bool> {
        let mut saved = self.get_saved();
        let Some(index) = saved.iter().position(|id| id == product_id) else {
            return Ok(false);
        };
        saved.remove(index);
        self.write_saved(&saved)?;
        self.notify(product_id, false);
        Ok(true)
    }

    pub fn is_saved(&self, product_id: &str) -> bool {
        self.get_saved().iter().any(|id| id == product_id)
    }

    /// 收藏 → 购物车 (数量 1)
    pub fn move_saved_to_cart(&mut self, product_id: &str) -> StoreResult<bool> {
        if !self.is_saved(product_id) {
            return Ok(false);
        }
        self.add_to_cart(product_id, 1)?;
        self.remove_from_saved(product_id)
    }

    /// 全部收藏加入购物车 (每个数量 1)，然后清空收藏
    ///
    /// 返回移动的商品数
    pub fn move_all_saved_to_cart(&mut self) -> StoreResult<usize> {
        let saved = self.get_saved();
        for id in &saved {
            self.add_to_cart(id, 1)?;
        }
        self.write_saved(&[])?;
        for id in &saved {
            self.notify(id, false);
        }
        Ok(saved.len())
    }

    pub fn clear_saved(&mut self) -> StoreResult<()> {
        let saved = self.get_saved();
        self.write_saved(&[])?;
        for id in &saved {
            self.notify(id, false);
        }
        Ok(())
    }

    /// 收藏中仍在目录里的商品 (收藏顺序)
    pub fn saved_products<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        self.get_saved()
            .iter()
            .filter_map(|id| products.iter().find(|p| &p.id == id))
            .collect()
    }
}
