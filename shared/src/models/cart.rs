//! Cart and wishlist entries

use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// One line of the persisted cart: `{"id": "...", "quantity": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(deserialize_with = "super::product::string_or_number")]
    pub id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}
