//! Autofill Core Library
//!
//! Cross-platform autofill logic for the vault, including:
//! - **credential_matcher**: Which stored credentials are relevant to a web domain or app
//! - **field_resolver**: Which field of a credential belongs in a requested input
//! - **fill_planner**: Both of the above for every input of a fill event
//!
//! Supporting modules provide text normalization, value-shape detection
//! (email, credit card, IBAN, BIC) and multi-language label heuristics.
//!
//! This library accepts data as JSON and returns results as JSON.
//! Each platform (browser, iOS, Android, .NET) obtains the fill request and
//! the decrypted credentials itself and calls this library for the decisions.
//!
//! # Example (conceptual)
//! ```ignore
//! let credentials = get_credentials();
//! let context = RequestContext::for_web_domain("accounts.google.com", "com.android.chrome");
//!
//! for credential in find_relevant_credentials(&credentials, &context) {
//!     let username = resolve_by_hints(credential, &["username"]);
//!     let password = resolve_by_label_and_text(credential, Some("Passwort"), None);
//! }
//! ```

pub mod credential_matcher;
pub mod error;
pub mod field_resolver;
pub mod fill_planner;
pub mod labels;
pub mod normalize;
pub mod shape;
pub mod types;

pub use credential_matcher::{
    filter_credentials, filter_credentials_json, find_relevant_credentials, match_reason,
    CredentialMatcherInput, CredentialMatcherOutput, MatchReason,
};
pub use error::{AutofillError, AutofillResult};
pub use field_resolver::{
    resolve_by_hints, resolve_by_label_and_text, resolve_category, resolve_field,
    resolve_field_json, resolve_requested_input, FieldResolverInput, FieldResolverOutput,
    SemanticCategory,
};
pub use fill_planner::{
    plan_fill, plan_fill_json, FieldFill, FillPlan, FillPlanInput, FillStats, FillSuggestion,
};
pub use labels::{
    describes_app, describes_bic, describes_card_number, describes_card_security_code,
    describes_email, describes_iban, describes_password, describes_url, describes_username,
    LabelKind,
};
pub use normalize::{normalize_loose, normalize_whitespace_only};
pub use shape::{
    detect_value_shape, is_bic_shaped, is_credit_card_shaped, is_email_shaped, is_iban_shaped,
    passes_luhn_check, ValueShape,
};
pub use types::{Credential, CredentialField, RequestContext, RequestedInput};

/// Version of the autofill core, so platforms can verify which build they bundle.
pub fn get_core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// WASM bindings
#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

// C FFI exports for .NET P/Invoke
#[cfg(feature = "ffi")]
pub mod ffi;

// UniFFI bindings for Swift/Kotlin
#[cfg(feature = "uniffi")]
pub mod uniffi_api;

// UniFFI scaffolding - generates the FFI glue code
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
