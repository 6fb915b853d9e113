//! WASM bindings for browser extension.

use wasm_bindgen::prelude::*;

use crate::credential_matcher::{filter_credentials, CredentialMatcherInput, CredentialMatcherOutput};
use crate::field_resolver::{resolve_field, FieldResolverInput, FieldResolverOutput};
use crate::fill_planner::{plan_fill, FillPlan, FillPlanInput};

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Credential Matcher WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// Filter credentials for autofill.
///
/// Takes a JsValue (CredentialMatcherInput) and returns a JsValue (CredentialMatcherOutput).
#[wasm_bindgen(js_name = filterCredentials)]
pub fn filter_credentials_js(input: JsValue) -> Result<JsValue, JsValue> {
    let input: CredentialMatcherInput = serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;

    let output: CredentialMatcherOutput = filter_credentials(input);

    serde_wasm_bindgen::to_value(&output)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}

/// Filter credentials using JSON strings (alternative API).
#[wasm_bindgen(js_name = filterCredentialsJson)]
pub fn filter_credentials_json_js(input_json: &str) -> Result<String, JsValue> {
    crate::credential_matcher::filter_credentials_json(input_json)
        .map_err(|e| JsValue::from_str(&format!("Filter failed: {}", e)))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Resolver WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// Resolve the field of a credential that belongs in a requested input.
///
/// Takes a JsValue (FieldResolverInput) and returns a JsValue (FieldResolverOutput).
#[wasm_bindgen(js_name = resolveField)]
pub fn resolve_field_js(input: JsValue) -> Result<JsValue, JsValue> {
    let input: FieldResolverInput = serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;

    let output: FieldResolverOutput = resolve_field(input);

    serde_wasm_bindgen::to_value(&output)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}

/// Resolve a field using JSON strings (alternative API).
#[wasm_bindgen(js_name = resolveFieldJson)]
pub fn resolve_field_json_js(input_json: &str) -> Result<String, JsValue> {
    crate::field_resolver::resolve_field_json(input_json)
        .map_err(|e| JsValue::from_str(&format!("Resolve failed: {}", e)))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Fill Planner WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// Plan a complete fill: relevant credentials and the value for every input.
///
/// Takes a JsValue (FillPlanInput) and returns a JsValue (FillPlan).
#[wasm_bindgen(js_name = planFill)]
pub fn plan_fill_js(input: JsValue) -> Result<JsValue, JsValue> {
    let input: FillPlanInput = serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;

    let output: FillPlan = plan_fill(&input.credentials, &input.context, &input.inputs);

    serde_wasm_bindgen::to_value(&output)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}

/// Plan a fill using JSON strings (alternative API).
#[wasm_bindgen(js_name = planFillJson)]
pub fn plan_fill_json_js(input_json: &str) -> Result<String, JsValue> {
    crate::fill_planner::plan_fill_json(input_json)
        .map_err(|e| JsValue::from_str(&format!("Fill planning failed: {}", e)))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Shape Detector WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// Classify a raw value as "email", "credit_card", "iban" or "bic".
///
/// Returns undefined when the value has no known shape.
#[wasm_bindgen(js_name = detectValueShape)]
pub fn detect_value_shape_js(value: &str) -> Option<String> {
    crate::shape::detect_value_shape(value).and_then(|shape| {
        serde_json::to_value(shape)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
    })
}

/// Check if a string is a plausible credit card number (length and Luhn checksum).
#[wasm_bindgen(js_name = isCreditCardShaped)]
pub fn is_credit_card_shaped_js(value: &str) -> bool {
    crate::shape::is_credit_card_shaped(value)
}
