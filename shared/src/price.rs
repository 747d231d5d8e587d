//! Price parsing and display helpers
//!
//! Catalog prices are free-form display strings. Parsing here never fails
//! loudly: anything that does not yield a number counts as zero and is logged.

use crate::models::{Price, Product};
use rust_decimal::prelude::*;

/// Displayed amounts keep two decimal places.
const DECIMAL_PLACES: u32 = 2;

/// Images used when a product has no explicit `image`.
pub const FALLBACK_IMAGES: [&str; 16] = [
    "/img/granula.jpg",
    "/img/pas1.jpg",
    "/img/pas2.jpg",
    "/img/pas3.jpg",
    "/img/pansion.jpg",
    "/img/pansionSlika.jpg",
    "/img/zec.jpg",
    "/img/papagaj.png",
    "/img/pasPozadina.jpg",
    "/img/pozadinaMacka.jpg",
    "/img/galerija/lokal1.jpg",
    "/img/galerija/lokal2.jpg",
    "/img/galerija/lokal3.jpg",
    "/img/galerija/lokal4.jpg",
    "/img/galerija/lokal5.jpg",
    "/img/galerija/lokal6.jpg",
];

/// The price a customer pays: `salePrice` unless unset or `"/"`, else `price`.
pub fn effective_price(product: &Product) -> Option<&Price> {
    match &product.sale_price {
        Some(sale) if sale.is_set() => Some(sale),
        _ => product.price.as_ref(),
    }
}

/// Parse a display price by keeping only its ASCII digits.
///
/// Separators are dropped, so `"2,490"` and `"1.290"` both parse as whole
/// numbers. Returns `None` when no digit survives.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Decimal::from_str(&digits).ok()
}

/// [`parse_amount`] that counts unparseable input as zero.
pub fn amount_or_zero(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or_else(|| {
        tracing::warn!(price = %raw, "Unparseable price, counting as 0");
        Decimal::ZERO
    })
}

/// Unit amount of the effective price; missing or malformed prices are zero.
pub fn effective_amount(product: &Product) -> Decimal {
    match effective_price(product) {
        Some(price) => amount_or_zero(price.as_str()),
        None => {
            tracing::warn!(product_id = %product.id, "Product has no price, counting as 0");
            Decimal::ZERO
        }
    }
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimals with `,` thousands separators: `12345.5` → `"12,345.50"`.
pub fn format_price_number(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded);
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    format!("{sign}{}.{frac}", group_thousands(digits))
}

/// Whole-number display price: `"2490"` → `"2,490"`.
///
/// Every non-digit is dropped first. `None` for the sentinel or an empty
/// price; text without digits is returned unchanged.
pub fn format_price_string(price: &Price) -> Option<String> {
    if !price.is_set() {
        return None;
    }
    let digits: String = price.as_str().chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Some(price.to_string());
    }
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };
    Some(group_thousands(significant))
}

/// Product image, or a stable pick from [`FALLBACK_IMAGES`].
///
/// The pick hashes `"{id}-{title}"` over UTF-16 code units (`h = h * 31 + u`,
/// wrapping at 32 bits), so the same product always gets the same picture.
pub fn fallback_image(product: &Product) -> &str {
    if let Some(image) = product.image.as_deref().filter(|i| !i.is_empty()) {
        return image;
    }
    let key = format!("{}-{}", product.id, product.title);
    let hash = key
        .encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)));
    FALLBACK_IMAGES[hash as usize % FALLBACK_IMAGES.len()]
}
