//! Read-only snapshots exchanged between the platform and the autofill core.
//!
//! All structures are constructed by the platform once per fill request and
//! are only ever borrowed by the matching engine.

use serde::{Deserialize, Serialize};

/// Placeholder shown instead of a secret value.
const MASKED_VALUE: &str = "••••••••";

/// One named value inside a credential (e.g. "username" -> "alice").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialField {
    pub name: String,
    pub value: String,
    /// Secret values are masked for display. Matching ignores this flag.
    #[serde(default)]
    pub secret: bool,
}

impl CredentialField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, secret: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            secret,
        }
    }

    /// Value suitable for showing in a fill suggestion.
    pub fn display_value(&self) -> &str {
        if self.secret {
            MASKED_VALUE
        } else {
            &self.value
        }
    }
}

/// A stored credential (login, card, ...) with its fields in stored order.
///
/// Field order is significant: every resolver strategy returns the first
/// qualifying field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<CredentialField>,
}

/// Where the fill request comes from.
///
/// When `web_domain` is set, domain matching applies; otherwise the
/// application identifier is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub web_domain: Option<String>,
    #[serde(default)]
    pub application_id: String,
}

impl RequestContext {
    pub fn for_web_domain(web_domain: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            web_domain: Some(web_domain.into()),
            application_id: application_id.into(),
        }
    }

    pub fn for_application(application_id: impl Into<String>) -> Self {
        Self {
            web_domain: None,
            application_id: application_id.into(),
        }
    }
}

/// One fillable input on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedInput {
    /// Platform or HTML autocomplete hint tokens, in declaration order.
    #[serde(default)]
    pub declared_hints: Vec<String>,
    /// Best-effort human-readable caption.
    #[serde(default)]
    pub visible_label: Option<String>,
    /// Whatever the user already typed.
    #[serde(default)]
    pub current_text: Option<String>,
}

impl RequestedInput {
    pub fn with_hints<I, S>(hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declared_hints: hints.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            visible_label: Some(label.into()),
            ..Self::default()
        }
    }
}
