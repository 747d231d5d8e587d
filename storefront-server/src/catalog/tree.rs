//! 分类树构建
//!
//! 分类和子分类保持首次出现的目录顺序，类型排序去重。

use shared::models::{CategoryNode, Product, SubcategoryNode, TypeNode};
use shared::slug::slugify;
use std::collections::BTreeSet;

pub fn build(products: &[Product]) -> Vec<CategoryNode> {
    // (分类名, [(子分类名, 类型集合)])
    let mut categories: Vec<(&str, Vec<(&str, BTreeSet<&str>)>)> = Vec::new();

    for product in products {
        let Some(category) = product.category.as_deref() else {
            continue;
        };
        let idx = match categories.iter().position(|(name, _)| *name == category) {
            Some(idx) => idx,
            None => {
                categories.push((category, Vec::new()));
                categories.len() - 1
            }
        };

        let Some(subcategory) = product.subcategory.as_deref() else {
            continue;
        };
        let subs = &mut categories[idx].1;
        let sub_idx = match subs.iter().position(|(name, _)| *name == subcategory) {
            Some(sub_idx) => sub_idx,
            None => {
                subs.push((subcategory, BTreeSet::new()));
                subs.len() - 1
            }
        };

        if let Some(ty) = product.product_type.as_deref() {
            subs[sub_idx].1.insert(ty);
        }
    }

    categories
        .into_iter()
        .map(|(name, subs)| {
            let slug = slugify(name);
            let path = format!("/{slug}");
            let subcategories = subs
                .into_iter()
                .map(|(sub_name, types)| {
                    let sub_slug = slugify(sub_name);
                    let sub_path = format!("{path}/{sub_slug}");
                    let types = types
                        .into_iter()
                        .map(|ty| {
                            let ty_slug = slugify(ty);
                            TypeNode {
                                name: ty.to_string(),
                                path: format!("{sub_path}/{ty_slug}"),
                                slug: ty_slug,
                            }
                        })
                        .collect();
                    SubcategoryNode {
                        name: sub_name.to_string(),
                        slug: sub_slug,
                        path: sub_path,
                        types,
                    }
                })
                .collect();
            CategoryNode {
                name: name.to_string(),
                slug,
                path,
                subcategories,
            }
        })
        .collect()
}
