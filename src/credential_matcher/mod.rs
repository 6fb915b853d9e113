//! Credential filtering for autofill across all platforms.
//!
//! Narrows the vault down to the credentials relevant to a fill request.
//!
//! Algorithm Structure:
//! 1. Web requests (a web domain is known), a credential matches when
//!    a. a word of its name (4+ characters) occurs in the web domain, or
//!    b. one of its field values points at a domain the web domain ends with
//! 2. App requests (no web domain), a credential matches when one of its
//!    field values equals the application id, ignoring case
//!
//! The result keeps the order of the input and lists every credential once.

mod domain;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

pub use domain::{candidate_domain, MIN_NAME_WORD_LEN};
use domain::{field_points_at_domain, name_word_in_domain};

use crate::error::AutofillResult;
use crate::types::{Credential, RequestContext};

/// Why a credential was considered relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    NameWord,
    FieldDomain,
    ApplicationId,
}

/// Input for credential filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialMatcherInput {
    /// List of credentials to filter, in vault order
    pub credentials: Vec<Credential>,
    /// Web domain or application the request comes from
    #[serde(default)]
    pub context: RequestContext,
}

/// Output from credential filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialMatcherOutput {
    /// IDs of matched credentials, in input order
    pub matched_ids: Vec<String>,
}

/// Return the credentials relevant to the request context.
///
/// # Arguments
/// * `credentials` - All stored credentials, in vault order
/// * `context` - Web domain or application id of the fill request
///
/// # Returns
/// The matching credentials in input order, each id at most once
pub fn find_relevant_credentials<'a>(
    credentials: &'a [Credential],
    context: &RequestContext,
) -> Vec<&'a Credential> {
    let mut seen_ids: HashSet<&str> = HashSet::new();

    let relevant: Vec<&Credential> = credentials
        .iter()
        .filter(|cred| match match_reason(cred, context) {
            Some(reason) => {
                debug!(credential_id = %cred.id, ?reason, "credential matched");
                true
            }
            None => false,
        })
        .filter(|cred| seen_ids.insert(cred.id.as_str()))
        .collect();

    debug!(
        web_domain = context.web_domain.as_deref().unwrap_or(""),
        application_id = %context.application_id,
        candidates = credentials.len(),
        relevant = relevant.len(),
        "credential filtering finished"
    );
    relevant
}

/// Determine whether (and why) a single credential is relevant to the context.
pub fn match_reason(credential: &Credential, context: &RequestContext) -> Option<MatchReason> {
    match context.web_domain.as_deref() {
        Some(web_domain) => {
            if let Some(word) = name_word_in_domain(web_domain, &credential.name) {
                trace!(credential_id = %credential.id, word, "name word found in web domain");
                return Some(MatchReason::NameWord);
            }

            credential
                .fields
                .iter()
                .any(|field| field_points_at_domain(web_domain, &field.value))
                .then_some(MatchReason::FieldDomain)
        }
        None => {
            let application_id = context.application_id.to_lowercase();
            credential
                .fields
                .iter()
                .any(|field| field.value.to_lowercase() == application_id)
                .then_some(MatchReason::ApplicationId)
        }
    }
}

/// Filter credentials for an owned input (convenience entry point for bindings).
pub fn filter_credentials(input: CredentialMatcherInput) -> CredentialMatcherOutput {
    let matched_ids = find_relevant_credentials(&input.credentials, &input.context)
        .into_iter()
        .map(|cred| cred.id.clone())
        .collect();

    CredentialMatcherOutput { matched_ids }
}

/// Filter credentials from JSON input (convenience function for FFI).
pub fn filter_credentials_json(input_json: &str) -> AutofillResult<String> {
    let input: CredentialMatcherInput = serde_json::from_str(input_json)?;
    let output = filter_credentials(input);
    Ok(serde_json::to_string(&output)?)
}
