//! Value-shape detectors.
//!
//! These predicates look at what a raw string *is shaped like*, independent of
//! the name of the field that holds it. They never fail: malformed input
//! simply does not match.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_loose, normalize_whitespace_only};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,6}$")
        .expect("email regex should compile")
});

const CARD_NUMBER_MIN_LEN: usize = 12;
const CARD_NUMBER_MAX_LEN: usize = 19;
const IBAN_MIN_LEN: usize = 10;
const IBAN_MAX_LEN: usize = 34;
const BIC_LENGTHS: [usize; 2] = [8, 11];

/// Known value shapes, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShape {
    Email,
    CreditCard,
    Iban,
    Bic,
}

/// Classify a raw value by its shape.
///
/// Detectors run in the order email, credit card, IBAN, BIC and the first
/// one that accepts the value wins.
pub fn detect_value_shape(value: &str) -> Option<ValueShape> {
    if is_email_shaped(value) {
        Some(ValueShape::Email)
    } else if is_credit_card_shaped(value) {
        Some(ValueShape::CreditCard)
    } else if is_iban_shaped(value) {
        Some(ValueShape::Iban)
    } else if is_bic_shaped(value) {
        Some(ValueShape::Bic)
    } else {
        None
    }
}

/// Check if a string looks like `localpart@domain.tld`.
pub fn is_email_shaped(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Check if a string looks like a card number (12 to 19 digits, valid Luhn checksum).
///
/// Whitespace grouping is ignored; dashes are not, so "4111-1111-..." fails.
pub fn is_credit_card_shaped(text: &str) -> bool {
    let number = normalize_whitespace_only(text);
    let len = number.chars().count();
    if !(CARD_NUMBER_MIN_LEN..=CARD_NUMBER_MAX_LEN).contains(&len) {
        return false;
    }

    passes_luhn_check(&number)
}

/// Check if a string looks like an IBAN: two letters, two check digits, then
/// alphanumerics, 10 to 34 characters in total.
pub fn is_iban_shaped(text: &str) -> bool {
    let iban: Vec<char> = normalize_loose(text).chars().collect();
    if !(IBAN_MIN_LEN..=IBAN_MAX_LEN).contains(&iban.len()) {
        return false;
    }

    iban[..2].iter().all(char::is_ascii_alphabetic)
        && iban[2..4].iter().all(char::is_ascii_digit)
        && iban[4..].iter().all(char::is_ascii_alphanumeric)
}

/// Check if a string looks like a BIC (SWIFT code): 8 or 11 alphanumerics.
pub fn is_bic_shaped(text: &str) -> bool {
    let bic = normalize_loose(text);
    BIC_LENGTHS.contains(&bic.chars().count()) && bic.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Luhn (mod 10) checksum over a digit-only string.
///
/// Digits are indexed from the left; the digit at index `i` is doubled when
/// `i % 2 == len % 2`, which is the usual "every second digit from the right"
/// rule. Any non-digit fails the check.
pub fn passes_luhn_check(digits: &str) -> bool {
    let parity = digits.chars().count() % 2;
    let mut sum = 0u32;

    for (i, c) in digits.chars().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == parity {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    sum % 10 == 0
}
