//! Declared hint vocabulary.
//!
//! Android autofill hints and their HTML `autocomplete` equivalents map onto
//! the same category. Tokens missing from this table have no category.

use super::SemanticCategory;

static HINT_CATEGORIES: &[(&str, SemanticCategory)] = &[
    // Android (View.AUTOFILL_HINT_* and androidx HintConstants)
    ("username", SemanticCategory::Username),
    ("newUsername", SemanticCategory::Username),
    ("emailAddress", SemanticCategory::Email),
    ("password", SemanticCategory::Password),
    ("newPassword", SemanticCategory::Password),
    // HTML autocomplete
    ("email", SemanticCategory::Email),
    ("current-password", SemanticCategory::Password),
    ("new-password", SemanticCategory::Password),
];

/// Look up the category of a hint token (ASCII case-insensitive, surrounding
/// whitespace ignored).
pub(super) fn classify_hint(token: &str) -> Option<SemanticCategory> {
    let token = token.trim();
    HINT_CATEGORIES
        .iter()
        .find(|(hint, _)| hint.eq_ignore_ascii_case(token))
        .map(|(_, category)| *category)
}
