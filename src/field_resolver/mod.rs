//! Field resolution for a single requested input.
//!
//! Given one credential and what is known about an on-screen input, pick the
//! single field whose value belongs in that input.
//!
//! Resolution Strategy:
//! 1. Declared hints: the first hint that maps to a category decides, and the
//!    outcome for that category is final
//! 2. Label and text: email text or label, then username label, then password
//!    label, then an exact (normalized) field-name match on the label
//!
//! Every strategy scans the fields in stored order and returns the first one
//! that qualifies.

mod hints;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::labels::{describes_email, describes_password, describes_username};
use crate::normalize::normalize_loose;
use crate::shape::is_email_shaped;
use crate::types::{Credential, CredentialField, RequestedInput};

/// Semantic category a requested input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticCategory {
    Username,
    Email,
    Password,
}

impl SemanticCategory {
    /// Map a declared hint token to its category. Unknown tokens yield `None`.
    pub fn from_hint(token: &str) -> Option<Self> {
        hints::classify_hint(token)
    }
}

/// Input for resolving one requested input against one credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldResolverInput {
    pub credential: Credential,
    #[serde(default)]
    pub input: RequestedInput,
}

/// Output of field resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldResolverOutput {
    /// The field to fill, or `None` to leave the input empty
    pub field: Option<CredentialField>,
}

/// Resolve a field from the declared hints of an input.
///
/// Hints that do not map to a category are skipped. The first one that does
/// fixes the category, and no later hint is consulted even when that category
/// finds no field.
pub fn resolve_by_hints<'a, S: AsRef<str>>(
    credential: &'a Credential,
    declared_hints: &[S],
) -> Option<&'a CredentialField> {
    for hint in declared_hints {
        let hint = hint.as_ref();
        match SemanticCategory::from_hint(hint) {
            Some(category) => {
                debug!(credential_id = %credential.id, hint, ?category, "declared hint classified");
                return resolve_category(credential, category);
            }
            None => trace!(hint, "skipping unclassified hint"),
        }
    }

    None
}

/// Resolve a field from the visible label and the text already typed.
///
/// Missing label or text are treated as empty strings.
pub fn resolve_by_label_and_text<'a>(
    credential: &'a Credential,
    visible_label: Option<&str>,
    current_text: Option<&str>,
) -> Option<&'a CredentialField> {
    let label = visible_label.unwrap_or("");
    let text = current_text.unwrap_or("");

    let category = if is_email_shaped(text) || describes_email(label) {
        Some(SemanticCategory::Email)
    } else if describes_username(label) {
        Some(SemanticCategory::Username)
    } else if describes_password(label) {
        Some(SemanticCategory::Password)
    } else {
        None
    };

    if let Some(category) = category {
        debug!(credential_id = %credential.id, ?category, "label and text classified");
        return resolve_category(credential, category);
    }

    // Fallback: a field literally named like the label
    let wanted = normalize_loose(label);
    if wanted.is_empty() {
        return None;
    }

    let field = credential
        .fields
        .iter()
        .find(|field| normalize_loose(&field.name) == wanted);
    debug!(
        credential_id = %credential.id,
        found = field.is_some(),
        "label resolved by field name"
    );
    field
}

/// Resolve a requested input, trying its declared hints first and falling
/// back to its label and current text.
pub fn resolve_requested_input<'a>(
    credential: &'a Credential,
    input: &RequestedInput,
) -> Option<&'a CredentialField> {
    resolve_by_hints(credential, input.declared_hints.as_slice()).or_else(|| {
        resolve_by_label_and_text(
            credential,
            input.visible_label.as_deref(),
            input.current_text.as_deref(),
        )
    })
}

/// Pick the field for an already-known category.
pub fn resolve_category(credential: &Credential, category: SemanticCategory) -> Option<&CredentialField> {
    let fields = &credential.fields;
    let field = match category {
        // A value that looks like an email wins over a field merely named "email".
        SemanticCategory::Email => fields
            .iter()
            .find(|field| is_email_shaped(&field.value))
            .or_else(|| fields.iter().find(|field| describes_email(&field.name))),
        SemanticCategory::Username => fields.iter().find(|field| describes_username(&field.name)),
        SemanticCategory::Password => fields.iter().find(|field| describes_password(&field.name)),
    };

    match field {
        Some(field) => trace!(credential_id = %credential.id, ?category, field = %field.name, "field resolved"),
        None => trace!(credential_id = %credential.id, ?category, "no field for category"),
    }
    field
}

/// Resolve a field for an owned input (convenience entry point for bindings).
pub fn resolve_field(input: FieldResolverInput) -> FieldResolverOutput {
    FieldResolverOutput {
        field: resolve_requested_input(&input.credential, &input.input).cloned(),
    }
}

/// Resolve a field from JSON input (convenience function for FFI).
pub fn resolve_field_json(input_json: &str) -> crate::error::AutofillResult<String> {
    let input: FieldResolverInput = serde_json::from_str(input_json)?;
    let output = resolve_field(input);
    Ok(serde_json::to_string(&output)?)
}
