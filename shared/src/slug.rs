//! Slug codec
//!
//! Turns Serbian display strings (Cyrillic, Latin with diacritics, or a mix)
//! into URL slugs. The step order is fixed: product and category URLs already
//! published by the storefront must keep resolving.

use unicode_normalization::UnicodeNormalization;

/// Serbian Cyrillic to Latin table.
fn transliterate(ch: char) -> Option<&'static str> {
    let lat = match ch {
        'а' | 'А' => "a",
        'б' | 'Б' => "b",
        'в' | 'В' => "v",
        'г' | 'Г' => "g",
        'д' | 'Д' => "d",
        'ђ' | 'Ђ' => "dj",
        'е' | 'Е' => "e",
        'ж' | 'Ж' => "z",
        'з' | 'З' => "z",
        'и' | 'И' => "i",
        'ј' | 'Ј' => "j",
        'к' | 'К' => "k",
        'л' | 'Л' => "l",
        'љ' | 'Љ' => "lj",
        'м' | 'М' => "m",
        'н' | 'Н' => "n",
        'њ' | 'Њ' => "nj",
        'о' | 'О' => "o",
        'п' | 'П' => "p",
        'р' | 'Р' => "r",
        'с' | 'С' => "s",
        'т' | 'Т' => "t",
        'ћ' | 'Ћ' => "c",
        'у' | 'У' => "u",
        'ф' | 'Ф' => "f",
        'х' | 'Х' => "h",
        'ц' | 'Ц' => "c",
        'ч' | 'Ч' => "c",
        'џ' | 'Џ' => "dz",
        'ш' | 'Ш' => "s",
        _ => return None,
    };
    Some(lat)
}

/// Characters eligible for transliteration.
///
/// Only the basic Cyrillic block А..я plus ђ љ њ ћ џ (both cases) is looked
/// up in the table. Ј and ј sit outside this range and are therefore never
/// transliterated; they are dropped later as non-ASCII.
fn in_transliteration_class(ch: char) -> bool {
    matches!(
        ch,
        '\u{0410}'..='\u{044F}'
            | 'ђ'
            | 'Ђ'
            | 'љ'
            | 'Љ'
            | 'њ'
            | 'Њ'
            | 'ћ'
            | 'Ћ'
            | 'џ'
            | 'Џ'
    )
}

fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}

/// Latin letters with a stroke or caron that need an explicit mapping.
fn latin_fallback(ch: char) -> Option<&'static str> {
    match ch {
        'đ' | 'Đ' => Some("dj"),
        'ž' | 'Ž' => Some("z"),
        'č' | 'Č' => Some("c"),
        'ć' | 'Ć' => Some("c"),
        'š' | 'Š' => Some("s"),
        _ => None,
    }
}

/// Whitespace as understood by browser regular expressions (`\s`).
///
/// Differs from [`char::is_whitespace`]: includes U+FEFF, excludes U+0085.
pub fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Convert a display string to a URL slug.
///
/// Steps, in order:
/// 1. Serbian Cyrillic transliteration
/// 2. NFD decomposition, combining marks U+0300..U+036F removed
/// 3. đ ž č ć š (any case) mapped explicitly
/// 4. everything outside ASCII alphanumerics, whitespace and `-` removed
/// 5. trimmed
/// 6. whitespace runs collapsed to a single `-`
/// 7. ASCII lowercased
///
/// ```
/// use shared::slug::slugify;
///
/// assert_eq!(slugify("Hrana za kućne ljubimce"), "hrana-za-kucne-ljubimce");
/// assert_eq!(slugify("Љубимци"), "ljubimci");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let mut latin = String::with_capacity(value.len());
    for ch in value.chars() {
        match transliterate(ch) {
            Some(lat) if in_transliteration_class(ch) => latin.push_str(lat),
            _ => latin.push(ch),
        }
    }

    let mut stripped = String::with_capacity(latin.len());
    for ch in latin.nfd().filter(|c| !is_combining_mark(*c)) {
        match latin_fallback(ch) {
            Some(rep) => stripped.push_str(rep),
            None => stripped.push(ch),
        }
    }

    let kept: String = stripped
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || is_js_whitespace(*c))
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut in_space = false;
    for ch in kept.trim_matches(is_js_whitespace).chars() {
        if is_js_whitespace(ch) {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.push(ch.to_ascii_lowercase());
            in_space = false;
        }
    }
    slug
}

/// [`slugify`] for optional labels; `None` yields an empty slug.
pub fn slugify_opt(value: Option<&str>) -> String {
    value.map(slugify).unwrap_or_default()
}

/// Whether `value` only contains lowercase ASCII letters, digits and hyphens.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_with_diacritics() {
        assert_eq!(slugify("Hrana za kućne ljubimce"), "hrana-za-kucne-ljubimce");
        assert_eq!(slugify("Igračke za kućne ljubimce"), "igracke-za-kucne-ljubimce");
        assert_eq!(slugify("Đak Žiža Šuma"), "djak-ziza-suma");
    }

    #[test]
    fn test_cyrillic() {
        assert_eq!(slugify("Љубимци"), "ljubimci");
        assert_eq!(slugify("Џак ЋЕВАП"), "dzak-cevap");
        assert_eq!(slugify("Храна за псе"), "hrana-za-pse");
    }

    #[test]
    fn test_cyrillic_je_is_dropped() {
        // ј (U+0458) is outside the transliteration range
        assert_eq!(slugify("Мачја храна"), "maca-hrana");
        assert_eq!(slugify("Јабука"), "abuka");
    }

    #[test]
    fn test_empty_and_none() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify_opt(None), "");
        assert_eq!(slugify_opt(Some("Pas")), "pas");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        assert_eq!(slugify("  Royal   Canin \t Adult  "), "royal-canin-adult");
        assert_eq!(slugify("a\u{00A0}b"), "a-b");
        assert_eq!(slugify("a\u{FEFF}b"), "a-b");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("Granule 15kg (piletina)"), "granule-15kg-piletina");
        assert_eq!(slugify("Pro Plan® 3+1"), "pro-plan-31");
    }

    #[test]
    fn test_literal_hyphens_are_kept() {
        assert_eq!(slugify("Anti-parazit"), "anti-parazit");
        assert_eq!(slugify("a - b"), "a---b");
    }

    #[test]
    fn test_accented_latin() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn test_deterministic_and_valid() {
        let inputs = ["Hrana za kućne ljubimce", "Љубимци", "Oprema za kućne ljubimce", "Ogrlica 2 u 1"];
        for input in inputs {
            let a = slugify(input);
            let b = slugify(input);
            assert_eq!(a, b);
            assert!(is_valid_slug(&a), "{a}");
            assert!(!a.starts_with('-') && !a.ends_with('-'));
            assert!(!a.contains("--"));
        }
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("pet-food"));
        assert!(is_valid_slug("a1"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Pet-food"));
        assert!(!is_valid_slug("pet food"));
    }
}
