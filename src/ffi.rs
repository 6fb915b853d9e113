//! C FFI exports for .NET P/Invoke.
//!
//! These functions provide a C-compatible interface for calling Rust functions from C#.
//! All functions use JSON strings for input/output to simplify marshalling.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::error::AutofillResult;

/// Filter credentials for autofill.
///
/// # Safety
///
/// - `input_json` must be a valid null-terminated C string
/// - The returned pointer must be freed by calling `free_string`
///
/// # Returns
///
/// A null-terminated C string containing the JSON result (CredentialMatcherOutput).
/// Returns null on error.
#[no_mangle]
pub unsafe extern "C" fn filter_credentials_ffi(input_json: *const c_char) -> *mut c_char {
    call_json(input_json, "Filter", crate::credential_matcher::filter_credentials_json)
}

/// Resolve the field of a credential that belongs in one requested input.
///
/// # Safety
///
/// - `input_json` must be a valid null-terminated C string
/// - The returned pointer must be freed by calling `free_string`
///
/// # Returns
///
/// A null-terminated C string containing the JSON result (FieldResolverOutput).
/// Returns null on error.
#[no_mangle]
pub unsafe extern "C" fn resolve_field_ffi(input_json: *const c_char) -> *mut c_char {
    call_json(input_json, "Resolve", crate::field_resolver::resolve_field_json)
}

/// Plan a complete fill event.
///
/// # Safety
///
/// - `input_json` must be a valid null-terminated C string
/// - The returned pointer must be freed by calling `free_string`
///
/// # Returns
///
/// A null-terminated C string containing the JSON result (FillPlan).
/// Returns null on error.
#[no_mangle]
pub unsafe extern "C" fn plan_fill_ffi(input_json: *const c_char) -> *mut c_char {
    call_json(input_json, "Fill planning", crate::fill_planner::plan_fill_json)
}

/// Get the version of the autofill core.
///
/// # Safety
///
/// - The returned pointer must be freed by calling `free_string`
#[no_mangle]
pub extern "C" fn get_core_version_ffi() -> *mut c_char {
    string_to_c_char(crate::get_core_version().to_string())
}

/// Free a string that was allocated by Rust.
///
/// # Safety
///
/// - `s` must be a pointer that was returned by one of the FFI functions
/// - This function must only be called once per pointer
/// - After calling this function, the pointer is invalid
#[no_mangle]
pub unsafe extern "C" fn free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Run a JSON-in/JSON-out operation on a C string.
///
/// # Safety
///
/// - `input_json` must be null or a valid null-terminated C string
unsafe fn call_json(
    input_json: *const c_char,
    operation: &str,
    run: fn(&str) -> AutofillResult<String>,
) -> *mut c_char {
    if input_json.is_null() {
        return ptr::null_mut();
    }

    let c_str = match CStr::from_ptr(input_json).to_str() {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    match run(c_str) {
        Ok(json) => string_to_c_char(json),
        Err(e) => create_error_response(&format!("{} failed: {}", operation, e)),
    }
}

/// Convert a Rust string to a C string pointer.
fn string_to_c_char(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Create an error response JSON string.
fn create_error_response(message: &str) -> *mut c_char {
    let error_json = serde_json::json!({ "success": false, "error": message }).to_string();
    string_to_c_char(error_json)
}
