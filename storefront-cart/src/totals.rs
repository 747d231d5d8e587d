//! 购物车合计
//!
//! 只统计在目录快照中能找到的条目；过期的商品 ID 静默跳过，不从存储中清除。

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{CartEntry, Product};
use shared::price::{effective_amount, format_price_number};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// 数量之和
    pub item_count: u64,
    /// 不同商品数
    pub distinct_products: usize,
    pub total: Decimal,
}

impl CartTotals {
    /// `"12,345.00 RSD"`
    pub fn display_total(&self) -> String {
        format!("{} RSD", format_price_number(self.total))
    }
}

/// 渲染用的一行
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// 购物车条目与目录关联 (购物车顺序)
pub fn cart_lines<'a>(entries: &[CartEntry], products: &'a [Product]) -> Vec<CartLine<'a>> {
    let by_id: HashMap<&str, &Product> = products.iter().map(|p| (p.id.as_str(), p)).collect();
    entries
        .iter()
        .filter_map(|entry| {
            let product = *by_id.get(entry.id.as_str())?;
            let unit_price = effective_amount(product);
            Some(CartLine {
                product,
                quantity: entry.quantity,
                unit_price,
                line_total: unit_price * Decimal::from(entry.quantity),
            })
        })
        .collect()
}

pub fn cart_totals(entries: &[CartEntry], products: &[Product]) -> CartTotals {
    cart_lines(entries, products)
        .iter()
        .fold(CartTotals::default(), |mut acc, line| {
            acc.item_count += u64::from(line.quantity);
            acc.distinct_products += 1;
            acc.total += line.line_total;
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new("p1", "Granule").with_price("1.200", None),
            Product::new("p2", "Povodac").with_price("2490", Some("1990")),
            Product::new("p3", "Igračka").with_price("2490", Some("/")),
            Product::new("p4", "Bez cene"),
            Product::new("p5", "Loša cena").with_price("na upit", None),
        ]
    }

    #[test]
    fn test_totals_use_sale_price() {
        let entries = vec![CartEntry::new("p2", 2), CartEntry::new("p3", 1)];
        let totals = cart_totals(&entries, &products());
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.distinct_products, 2);
        assert_eq!(totals.total, dec("6470"));
        assert_eq!(totals.display_total(), "6,470.00 RSD");
    }

    #[test]
    fn test_stale_ids_are_ignored() {
        let entries = vec![CartEntry::new("gone", 5), CartEntry::new("p2", 1)];
        let totals = cart_totals(&entries, &products());
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.total, dec("1990"));
    }

    #[test]
    fn test_unparseable_prices_count_as_zero() {
        let entries = vec![
            CartEntry::new("p4", 1),
            CartEntry::new("p5", 2),
            CartEntry::new("p1", 1),
        ];
        let totals = cart_totals(&entries, &products());
        assert_eq!(totals.item_count, 4);
        assert_eq!(totals.total, dec("1200"));
    }

    #[test]
    fn test_lines_keep_cart_order() {
        let entries = vec![CartEntry::new("p3", 1), CartEntry::new("p1", 2)];
        let products = products();
        let lines = cart_lines(&entries, &products);
        assert_eq!(lines[0].product.id, "p3");
        assert_eq!(lines[1].line_total, dec("2400"));
    }

    #[test]
    fn test_dotted_thousands_total_as_displayed() {
        let products = vec![Product::new("p1", "Granule").with_price("1.290", None)];
        let totals = cart_totals(&[CartEntry::new("p1", 1)], &products);
        assert_eq!(totals.total, dec("1290"));
        assert_eq!(totals.display_total(), "1,290.00 RSD");
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(cart_totals(&[], &products()), CartTotals::default());
    }
}
