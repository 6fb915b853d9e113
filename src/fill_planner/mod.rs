//! Fill planning for a complete fill event.
//!
//! Runs the credential matcher for the request context and then resolves
//! every requested input against every relevant credential. The platform
//! turns the resulting plan into its native fill response (datasets on
//! Android, credential identities on iOS, inline menu entries in the browser)
//! and applies its own authentication gating.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::credential_matcher::find_relevant_credentials;
use crate::error::AutofillResult;
use crate::field_resolver::resolve_requested_input;
use crate::types::{Credential, RequestContext, RequestedInput};

/// Input for fill planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillPlanInput {
    /// All stored credentials, in vault order
    pub credentials: Vec<Credential>,
    /// Web domain or application the request comes from
    #[serde(default)]
    pub context: RequestContext,
    /// The fillable inputs on screen, in screen order
    #[serde(default)]
    pub inputs: Vec<RequestedInput>,
}

/// One value to put into one requested input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFill {
    /// Index into the requested inputs
    pub input_index: usize,
    pub field_name: String,
    pub value: String,
    /// Value to show in the suggestion list; secret values are masked
    pub display_value: String,
    pub secret: bool,
}

/// Everything one credential can fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillSuggestion {
    pub credential_id: String,
    pub credential_name: String,
    /// Fills in input order
    pub fills: Vec<FieldFill>,
}

/// Statistics about a fill plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillStats {
    /// Number of credentials relevant to the request context
    pub credentials_matched: u32,
    /// Number of relevant credentials that could not fill any input
    pub credentials_without_fills: u32,
    /// Total number of input values across all suggestions
    pub fields_resolved: u32,
}

/// Output of fill planning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillPlan {
    /// One suggestion per relevant credential that fills at least one input,
    /// in credential matcher order
    pub suggestions: Vec<FillSuggestion>,
    pub stats: FillStats,
}

/// Plan which credential values go into which inputs.
pub fn plan_fill(
    credentials: &[Credential],
    context: &RequestContext,
    inputs: &[RequestedInput],
) -> FillPlan {
    let mut plan = FillPlan::default();

    for credential in find_relevant_credentials(credentials, context) {
        plan.stats.credentials_matched += 1;

        let fills: Vec<FieldFill> = inputs
            .iter()
            .enumerate()
            .filter_map(|(input_index, input)| {
                resolve_requested_input(credential, input).map(|field| FieldFill {
                    input_index,
                    field_name: field.name.clone(),
                    value: field.value.clone(),
                    display_value: field.display_value().to_string(),
                    secret: field.secret,
                })
            })
            .collect();

        if fills.is_empty() {
            plan.stats.credentials_without_fills += 1;
            continue;
        }

        plan.stats.fields_resolved += fills.len() as u32;
        plan.suggestions.push(FillSuggestion {
            credential_id: credential.id.clone(),
            credential_name: credential.name.clone(),
            fills,
        });
    }

    debug!(
        inputs = inputs.len(),
        suggestions = plan.suggestions.len(),
        fields_resolved = plan.stats.fields_resolved,
        "fill plan built"
    );
    plan
}

/// Plan a fill from JSON input (convenience function for FFI).
pub fn plan_fill_json(input_json: &str) -> AutofillResult<String> {
    let input: FillPlanInput = serde_json::from_str(input_json)?;
    let output = plan_fill(&input.credentials, &input.context, &input.inputs);
    Ok(serde_json::to_string(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CredentialField;

    fn create_test_credential(id: &str, name: &str, fields: &[(&str, &str, bool)]) -> Credential {
        Credential {
            id: id.to_string(),
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|(name, value, secret)| CredentialField::new(*name, *value, *secret))
                .collect(),
        }
    }

    fn login_form() -> Vec<RequestedInput> {
        vec![
            RequestedInput::with_hints(["emailAddress"]),
            RequestedInput::with_label("Password"),
            RequestedInput::with_label("Remember me"),
        ]
    }

    #[test]
    fn test_plan_fill_for_web_login() {
        let credentials = vec![
            create_test_credential(
                "g1",
                "Google",
                &[
                    ("username", "alice", false),
                    ("password", "p1", true),
                    ("email", "x@gmail.com", false),
                ],
            ),
            create_test_credential("gh", "GitHub", &[("url", "https://github.com", false)]),
        ];
        let context = RequestContext::for_web_domain("accounts.google.com", "com.android.chrome");

        let plan = plan_fill(&credentials, &context, &login_form());

        assert_eq!(plan.suggestions.len(), 1);
        let suggestion = &plan.suggestions[0];
        assert_eq!(suggestion.credential_id, "g1");
        assert_eq!(
            suggestion.fills,
            vec![
                FieldFill {
                    input_index: 0,
                    field_name: "email".to_string(),
                    value: "x@gmail.com".to_string(),
                    display_value: "x@gmail.com".to_string(),
                    secret: false,
                },
                FieldFill {
                    input_index: 1,
                    field_name: "password".to_string(),
                    value: "p1".to_string(),
                    display_value: "••••••••".to_string(),
                    secret: true,
                },
            ]
        );
        assert_eq!(
            plan.stats,
            FillStats {
                credentials_matched: 1,
                credentials_without_fills: 0,
                fields_resolved: 2,
            }
        );
    }

    #[test]
    fn test_plan_fill_skips_credentials_without_fills() {
        let credentials = vec![
            create_test_credential("a", "Twitter", &[("app", "com.twitter.android", false)]),
            create_test_credential(
                "b",
                "Twitter Work",
                &[("app", "com.twitter.android", false), ("password", "w0rk", true)],
            ),
        ];
        let context = RequestContext::for_application("com.twitter.android");

        let plan = plan_fill(&credentials, &context, &login_form());

        assert_eq!(plan.suggestions.len(), 1);
        assert_eq!(plan.suggestions[0].credential_id, "b");
        assert_eq!(plan.suggestions[0].fills[0].input_index, 1);
        assert_eq!(plan.stats.credentials_matched, 2);
        assert_eq!(plan.stats.credentials_without_fills, 1);
    }

    #[test]
    fn test_plan_fill_without_relevant_credentials() {
        let credentials = vec![create_test_credential("a", "Bank", &[("password", "p", true)])];
        let context = RequestContext::for_web_domain("example.com", "");

        assert_eq!(plan_fill(&credentials, &context, &login_form()), FillPlan::default());
    }

    #[test]
    fn test_plan_fill_json() {
        let input_json = r#"{
            "credentials": [
                {"id": "1", "name": "Reddit", "fields": [
                    {"name": "username", "value": "spez"},
                    {"name": "password", "value": "hunter2", "secret": true}
                ]}
            ],
            "context": {"webDomain": "old.reddit.com"},
            "inputs": [
                {"declaredHints": ["username"]},
                {"declaredHints": ["current-password"]}
            ]
        }"#;

        let plan: FillPlan = serde_json::from_str(&plan_fill_json(input_json).unwrap()).unwrap();
        assert_eq!(plan.suggestions.len(), 1);
        assert_eq!(plan.suggestions[0].fills.len(), 2);
        assert_eq!(plan.suggestions[0].fills[1].value, "hunter2");
        assert_eq!(plan.suggestions[0].fills[0].display_value, "spez");
        assert_ne!(plan.suggestions[0].fills[1].display_value, "hunter2");

        assert!(plan_fill_json("not json").is_err());
    }
}
