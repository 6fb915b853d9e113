//! Keyword tables for label heuristics.
//!
//! Every entry is stored already normalized (lowercase, no whitespace, no
//! dashes) so a label only has to be normalized once before lookup.
//! Adding a language means adding entries here.

pub static USERNAME_KEYWORDS: &[&str] = &[
    // English
    "username", "user", "login", "account",
    // German
    "benutzername", "benutzer", "nutzername", "anmeldename", "konto", "kennung",
];

pub static PASSWORD_KEYWORDS: &[&str] = &[
    // English
    "pin", "password",
    // German
    "passwort", "kennwort", "geheimzahl",
];

pub static EMAIL_KEYWORDS: &[&str] = &[
    // English
    "email", "mail", "emailaddress", "mailaddress",
    // German
    "emailadresse", "mailadresse",
];

pub static CARD_NUMBER_KEYWORDS: &[&str] = &[
    // English
    "cardnumber", "creditcardnumber", "creditcard", "ccnumber",
    // German
    "kartennummer", "kreditkartennummer", "kreditkarte",
];

pub static CARD_SECURITY_CODE_KEYWORDS: &[&str] = &[
    // English
    "cvc", "cvv", "cvc2", "cvv2", "securitycode", "cardsecuritycode",
    // German
    "prüfnummer", "kartenprüfnummer", "sicherheitscode",
];

pub static IBAN_KEYWORDS: &[&str] = &["iban"];

pub static BIC_KEYWORDS: &[&str] = &[
    "bic", "swift", "swiftcode", "biccode", "swiftbic",
];

pub static URL_KEYWORDS: &[&str] = &[
    // English
    "url", "website", "link", "webaddress", "homepage",
    // German
    "webseite", "webadresse", "internetadresse",
];

pub static APP_KEYWORDS: &[&str] = &[
    // English
    "app", "application", "androidapp", "packagename",
    // German
    "anwendung", "applikation",
];
