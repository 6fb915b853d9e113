//! Label heuristics: does a field name or on-screen caption describe a known
//! semantic category?
//!
//! Labels are normalized with [`normalize_loose`] and then looked up by exact
//! membership in the keyword table of the category. There is no substring
//! matching, so "username2" does not describe a username.

mod keywords;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_loose;
use keywords::{
    APP_KEYWORDS, BIC_KEYWORDS, CARD_NUMBER_KEYWORDS, CARD_SECURITY_CODE_KEYWORDS,
    EMAIL_KEYWORDS, IBAN_KEYWORDS, PASSWORD_KEYWORDS, URL_KEYWORDS, USERNAME_KEYWORDS,
};

/// Categories a label can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Username,
    Password,
    Email,
    CardNumber,
    CardSecurityCode,
    Iban,
    Bic,
    Url,
    App,
}

impl LabelKind {
    pub const ALL: [LabelKind; 9] = [
        LabelKind::Username,
        LabelKind::Password,
        LabelKind::Email,
        LabelKind::CardNumber,
        LabelKind::CardSecurityCode,
        LabelKind::Iban,
        LabelKind::Bic,
        LabelKind::Url,
        LabelKind::App,
    ];

    /// Normalized keywords for this category, across all supported languages.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            LabelKind::Username => USERNAME_KEYWORDS,
            LabelKind::Password => PASSWORD_KEYWORDS,
            LabelKind::Email => EMAIL_KEYWORDS,
            LabelKind::CardNumber => CARD_NUMBER_KEYWORDS,
            LabelKind::CardSecurityCode => CARD_SECURITY_CODE_KEYWORDS,
            LabelKind::Iban => IBAN_KEYWORDS,
            LabelKind::Bic => BIC_KEYWORDS,
            LabelKind::Url => URL_KEYWORDS,
            LabelKind::App => APP_KEYWORDS,
        }
    }

    /// Check if `label` is one of this category's keywords after normalization.
    pub fn matches(self, label: &str) -> bool {
        self.keywords().contains(&normalize_loose(label).as_str())
    }
}

/// Email labels count as usernames too, since many forms log in by email.
pub fn describes_username(label: &str) -> bool {
    LabelKind::Username.matches(label) || describes_email(label)
}

pub fn describes_password(label: &str) -> bool {
    LabelKind::Password.matches(label)
}

pub fn describes_email(label: &str) -> bool {
    LabelKind::Email.matches(label)
}

pub fn describes_card_number(label: &str) -> bool {
    LabelKind::CardNumber.matches(label)
}

pub fn describes_card_security_code(label: &str) -> bool {
    LabelKind::CardSecurityCode.matches(label)
}

pub fn describes_iban(label: &str) -> bool {
    LabelKind::Iban.matches(label)
}

pub fn describes_bic(label: &str) -> bool {
    LabelKind::Bic.matches(label)
}

pub fn describes_url(label: &str) -> bool {
    LabelKind::Url.matches(label)
}

pub fn describes_app(label: &str) -> bool {
    LabelKind::App.matches(label)
}
