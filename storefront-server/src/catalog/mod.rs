//! 商品目录访问
//!
//! # 模块结构
//!
//! - [`source`] - 目录数据源 ([`CatalogSource`]): JSON 文件 / 内存
//! - [`tree`] - 分类树 (头部下拉菜单)
//!
//! 目录每次请求重新加载，[`Catalog`] 是单次请求内不可变的快照。

pub mod source;
pub mod tree;

pub use source::{CatalogError, CatalogSource, JsonFileCatalog, StaticCatalog};

use shared::models::{CategoryNode, Product};
use shared::slug::slugify;

/// 目录快照 - 按文件顺序保存的商品列表
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 第一个 `slugify(title) == slug` 的商品，区分大小写
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        if slug.is_empty() {
            return None;
        }
        self.products.iter().find(|p| slugify(&p.title) == slug)
    }

    /// 同分类 (原始字符串相等) 的其他商品，保持目录顺序，最多 `limit` 个
    pub fn recommendations_for(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// 1~3 段路径是否对应某个商品的 分类/子分类/类型
    ///
    /// 两边都转小写后比较；至少一个商品满足即存在。
    pub fn has_category_path(&self, segments: &[&str]) -> bool {
        self.products_on_path(segments).next().is_some()
    }

    /// 路径命中的商品所属的分类显示名 (去重，目录顺序)
    ///
    /// 多于一个表示分类 slug 冲突；路由仍只解析一次。
    pub fn categories_on_path(&self, segments: &[&str]) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for category in self
            .products_on_path(segments)
            .filter_map(|p| p.category.as_deref())
        {
            if !labels.contains(&category) {
                labels.push(category);
            }
        }
        labels
    }

    /// slug 等于 `segment` 的所有分类显示名
    pub fn matching_categories(&self, segment: &str) -> Vec<&str> {
        self.categories_on_path(&[segment])
    }

    fn products_on_path<'a>(&'a self, segments: &[&str]) -> impl Iterator<Item = &'a Product> {
        let wanted: Vec<String> = if (1..=3).contains(&segments.len()) {
            segments.iter().map(|s| s.to_lowercase()).collect()
        } else {
            Vec::new()
        };
        self.products.iter().filter(move |p| {
            if wanted.is_empty() {
                return false;
            }
            let labels = [&p.category, &p.subcategory, &p.product_type];
            wanted
                .iter()
                .zip(labels)
                .all(|(segment, label)| label_slug(label.as_deref()) == *segment)
        })
    }

    /// 分类树
    pub fn category_tree(&self) -> Vec<CategoryNode> {
        tree::build(&self.products)
    }
}

/// 分类标签的比较形式: 缺失为空串
fn label_slug(label: Option<&str>) -> String {
    label.map(|l| slugify(l).to_lowercase()).unwrap_or_default()
}
