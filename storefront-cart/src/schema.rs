//! Stored value layout
//!
//! `cart` holds `[{"id": "...", "quantity": n}, ...]`. Older clients stored a
//! plain list of ids (`["p1", "p2"]`); [`decode_cart`] is the only place that
//! recognizes that form and rewrites it with quantity 1.
//!
//! `savedItems` holds a list of ids.

use serde::Deserialize;
use shared::models::CartEntry;

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCart {
    Entries(Vec<CartEntry>),
    Legacy(Vec<String>),
}

/// Decoded `cart` value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedCart {
    pub entries: Vec<CartEntry>,
    /// Value was in the id-list form and must be written back
    pub migrated: bool,
}

/// Decode a stored `cart` value
///
/// Anything that is not one of the two known layouts decodes to an empty cart.
pub fn decode_cart(raw: &str) -> DecodedCart {
    match serde_json::from_str::<StoredCart>(raw) {
        Ok(StoredCart::Entries(entries)) => DecodedCart {
            entries,
            migrated: false,
        },
        Ok(StoredCart::Legacy(ids)) => DecodedCart {
            entries: ids.into_iter().map(|id| CartEntry::new(id, 1)).collect(),
            migrated: true,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Stored cart is unreadable, treating as empty");
            DecodedCart::default()
        }
    }
}

/// Decode a stored `savedItems` value; unreadable → empty
pub fn decode_saved(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Stored saved items are unreadable, treating as empty");
        Vec::new()
    })
}

pub fn encode_cart(entries: &[CartEntry]) -> serde_json::Result<String> {
    serde_json::to_string(entries)
}

pub fn encode_saved(ids: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_layout() {
        let decoded = decode_cart(r#"[{"id":"p1","quantity":2},{"id":"p2","quantity":1}]"#);
        assert!(!decoded.migrated);
        assert_eq!(
            decoded.entries,
            vec![CartEntry::new("p1", 2), CartEntry::new("p2", 1)]
        );
    }

    #[test]
    fn test_legacy_id_list_is_migrated() {
        let decoded = decode_cart(r#"["p1","p2"]"#);
        assert!(decoded.migrated);
        assert_eq!(
            decoded.entries,
            vec![CartEntry::new("p1", 1), CartEntry::new("p2", 1)]
        );

        // 迁移后的格式再次解码不会重复包装
        let again = decode_cart(&encode_cart(&decoded.entries).unwrap());
        assert!(!again.migrated);
        assert_eq!(again.entries, decoded.entries);
    }

    #[test]
    fn test_empty_list_is_not_a_migration() {
        let decoded = decode_cart("[]");
        assert!(!decoded.migrated);
        assert!(decoded.entries.is_empty());
    }

    #[test]
    fn test_numeric_ids_and_missing_quantity() {
        let decoded = decode_cart(r#"[{"id":42},{"id":"p2","quantity":3}]"#);
        assert_eq!(
            decoded.entries,
            vec![CartEntry::new("42", 1), CartEntry::new("p2", 3)]
        );
    }

    #[test]
    fn test_unknown_layouts_are_empty() {
        for raw in [
            "not json",
            "{}",
            r#"{"id":"p1"}"#,
            "\"p1\"",
            "null",
            r#"["p1",{"id":"p2","quantity":1}]"#,
            r#"[1,2,3]"#,
        ] {
            assert_eq!(decode_cart(raw), DecodedCart::default(), "{raw}");
        }
    }

    #[test]
    fn test_saved_items() {
        assert_eq!(decode_saved(r#"["p1","p7"]"#), vec!["p1", "p7"]);
        assert!(decode_saved("{").is_empty());
        assert!(decode_saved(r#"{"p1":true}"#).is_empty());
        assert_eq!(encode_saved(&["p1".to_string()]).unwrap(), r#"["p1"]"#);
    }
}
