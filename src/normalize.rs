//! Loose text normalization used before every keyword and shape comparison.

/// Hyphen-minus, the Unicode dash punctuation block and the minus sign.
fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2010}'..='\u{2015}' | '\u{2212}')
}

/// Remove all whitespace and dashes, then lowercase.
///
/// E.g., "E-Mail Adresse" -> "emailadresse"
pub fn normalize_loose(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !is_dash(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Remove whitespace only. Dashes and case are kept.
///
/// E.g., "4111 1111 1111 1111" -> "4111111111111111"
pub fn normalize_whitespace_only(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
