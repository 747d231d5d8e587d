//! Category tree derived from the catalog

use serde::{Deserialize, Serialize};

/// Top-level category with its subcategories, in first-seen catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub name: String,
    pub slug: String,
    /// `/category`
    pub path: String,
    pub subcategories: Vec<SubcategoryNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryNode {
    pub name: String,
    pub slug: String,
    /// `/category/subcategory`
    pub path: String,
    /// Sorted, de-duplicated.
    pub types: Vec<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeNode {
    pub name: String,
    pub slug: String,
    /// `/category/subcategory/type`
    pub path: String,
}
