//! UniFFI API module for Swift and Kotlin bindings.
//!
//! This module exposes the autofill decisions via UniFFI for the iOS
//! credential provider extension and the Android autofill service.
//! All functions use JSON strings for input/output to simplify cross-language marshalling.

use crate::error::AutofillError;

/// Get the version of the autofill-core library.
#[uniffi::export]
pub fn get_core_version() -> String {
    crate::get_core_version().to_string()
}

/// Filter credentials for autofill based on the current web domain or app.
///
/// # Arguments
/// * `input_json` - JSON string with format:
///   ```json
///   {
///     "credentials": [{"id": "...", "name": "...", "fields": [{"name": "...", "value": "...", "secret": false}]}],
///     "context": {"webDomain": "accounts.google.com", "applicationId": "com.android.chrome"}
///   }
///   ```
///
/// # Returns
/// JSON string with format:
///   ```json
///   {
///     "matched_ids": ["id1", "id2"]
///   }
///   ```
#[uniffi::export]
pub fn filter_credentials_json(input_json: String) -> Result<String, AutofillError> {
    crate::credential_matcher::filter_credentials_json(&input_json)
}

/// Resolve which field of a credential belongs in one requested input.
///
/// # Arguments
/// * `input_json` - JSON string with format:
///   ```json
///   {
///     "credential": {"id": "...", "name": "...", "fields": [...]},
///     "input": {"declaredHints": ["password"], "visibleLabel": "Password", "currentText": null}
///   }
///   ```
///
/// # Returns
/// JSON string with format:
///   ```json
///   {
///     "field": {"name": "password", "value": "...", "secret": true}
///   }
///   ```
#[uniffi::export]
pub fn resolve_field_json(input_json: String) -> Result<String, AutofillError> {
    crate::field_resolver::resolve_field_json(&input_json)
}

/// Plan a complete fill event.
///
/// # Arguments
/// * `input_json` - JSON string with format:
///   ```json
///   {
///     "credentials": [...],
///     "context": {"webDomain": null, "applicationId": "com.twitter.android"},
///     "inputs": [{"declaredHints": ["username"]}, {"visibleLabel": "Password"}]
///   }
///   ```
///
/// # Returns
/// JSON string with format:
///   ```json
///   {
///     "suggestions": [{"credential_id": "...", "credential_name": "...", "fills": [...]}],
///     "stats": {"credentials_matched": 1, "credentials_without_fills": 0, "fields_resolved": 2}
///   }
///   ```
#[uniffi::export]
pub fn plan_fill_json(input_json: String) -> Result<String, AutofillError> {
    crate::fill_planner::plan_fill_json(&input_json)
}

/// Check if a value looks like an email address.
#[uniffi::export]
pub fn is_email_shaped(value: String) -> bool {
    crate::shape::is_email_shaped(&value)
}

/// Check if a value looks like a credit card number (12-19 digits, valid Luhn checksum).
#[uniffi::export]
pub fn is_credit_card_shaped(value: String) -> bool {
    crate::shape::is_credit_card_shaped(&value)
}

/// Check if a value looks like an IBAN.
#[uniffi::export]
pub fn is_iban_shaped(value: String) -> bool {
    crate::shape::is_iban_shaped(&value)
}

/// Check if a value looks like a BIC / SWIFT code.
#[uniffi::export]
pub fn is_bic_shaped(value: String) -> bool {
    crate::shape::is_bic_shaped(&value)
}
