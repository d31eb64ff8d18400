//! Catalog text normalization
//!
//! Course titles and descriptions arrive through an export chain that
//! double-encodes UTF-8 and substitutes typographic quotes. These pure
//! functions repair the common damage before text is stored or compared;
//! duplicate-course detection in particular must compare normalized text so
//! a harmless repeat is not misread as a conflicting overwrite.

/// Mojibake sequences produced by reading UTF-8 bytes as Windows-1252,
/// paired with the character originally intended
const MOJIBAKE_REPAIRS: &[(&str, &str)] = &[
    ("\u{c3}\u{a9}", "é"),
    ("\u{c3}\u{a8}", "è"),
    ("\u{c3}\u{a1}", "á"),
    ("\u{c3}\u{ad}", "í"),
    ("\u{c3}\u{b3}", "ó"),
    ("\u{c3}\u{ba}", "ú"),
    ("\u{c3}\u{b1}", "ñ"),
    ("\u{c3}\u{bc}", "ü"),
    ("\u{c3}\u{b6}", "ö"),
    ("\u{c3}\u{a4}", "ä"),
    ("\u{e2}\u{80}\u{99}", "\u{2019}"),
    ("\u{e2}\u{80}\u{98}", "\u{2018}"),
    ("\u{e2}\u{80}\u{9c}", "\u{201c}"),
    ("\u{e2}\u{80}\u{9d}", "\u{201d}"),
    ("\u{e2}\u{80}\u{93}", "\u{2013}"),
    ("\u{e2}\u{80}\u{94}", "\u{2014}"),
    ("\u{e2}\u{80}\u{a6}", "\u{2026}"),
];

/// Repair double-encoded UTF-8 text
///
/// Applies known mojibake repairs and strips replacement characters left by
/// an earlier lossy decode. Text without damage passes through unchanged.
pub fn fix_encoding(text: &str) -> String {
    let mut fixed = text.to_string();
    for (broken, repaired) in MOJIBAKE_REPAIRS {
        if fixed.contains(broken) {
            fixed = fixed.replace(broken, repaired);
        }
    }
    if fixed.contains('\u{fffd}') {
        fixed = fixed.replace('\u{fffd}', "");
    }
    fixed
}

/// Replace typographic quotes with their ASCII equivalents
pub fn replace_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201a}' => '\'',
            '\u{201c}' | '\u{201d}' | '\u{201e}' => '"',
            other => other,
        })
        .collect()
}

/// The full normalization applied to catalog text fields
pub fn normalize_text(text: &str) -> String {
    replace_quotes(&fix_encoding(text))
}
