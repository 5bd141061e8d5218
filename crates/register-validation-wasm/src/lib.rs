//! Register-Validation WASM
//!
//! WebAssembly bindings for the registration form validator. The browser
//! form calls `validateField` on change and blur and `validateForm` on submit;
//! both run the same rule engine as native callers.
//!
//! ```javascript
//! const rules = registrationRules();
//! const error = validateField('confirmPassword', value, rules.confirmPassword, formData);
//! const errors = validateForm(formData, rules);
//! if (Object.keys(errors).length === 0) { submit(formData); }
//! ```
//!
//! Configuration mistakes (unknown rules, dangling `matches` targets) are
//! thrown as exceptions; validation failures are returned as data.

use register_validation::{email, phone, FormData, FormErrors, FormRules, Rule, Validator};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // plain objects rather than `Map`s, so `Object.keys(errors)` works
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse {}: {}", what, e)))
}

/// Validate one field against its rule list
///
/// Returns the first failing rule's message, or `undefined` when valid.
///
/// # Example (JavaScript)
/// ```javascript
/// validateField('name', 'A', ['required', { minLength: 2 }], formData);
/// // "Must be at least 2 characters"
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(
    field_name: &str,
    value: &str,
    rules: JsValue,
    form: JsValue,
) -> Result<Option<String>, JsValue> {
    let rules: Vec<Rule> = from_js(rules, "rules")?;
    let form: FormData = from_js(form, "form data")?;
    field_error(field_name, value, &rules, &form).map_err(|e| JsValue::from_str(&e))
}

/// Validate every field in `rules`
///
/// Returns an object mapping each failing field to its message; empty when
/// the form may be submitted.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let form: FormData = from_js(form, "form data")?;
    let rules: FormRules = from_js(rules, "rules")?;
    let errors = form_errors(&form, &rules).map_err(|e| JsValue::from_str(&e))?;
    to_js(&errors)
}

/// Fields to re-validate when `field_name` changes (confirmation fields)
#[wasm_bindgen(js_name = dependentFields)]
pub fn dependent_fields(field_name: &str, rules: JsValue) -> Result<Vec<String>, JsValue> {
    let rules: FormRules = from_js(rules, "rules")?;
    Ok(dependents(field_name, &rules))
}

/// Throw if a rule set is misconfigured
#[wasm_bindgen(js_name = checkRules)]
pub fn check_rules(rules: JsValue) -> Result<(), JsValue> {
    let rules: FormRules = from_js(rules, "rules")?;
    Validator::new()
        .check(&rules)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The registration form's rule set in its declarative shape
#[wasm_bindgen(js_name = registrationRules)]
pub fn registration_rules() -> Result<JsValue, JsValue> {
    to_js(&FormRules::registration())
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(value: &str) -> bool {
    email::is_valid_email(value)
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(value: &str) -> bool {
    phone::is_valid_phone(value)
}

fn field_error(
    field_name: &str,
    value: &str,
    rules: &[Rule],
    form: &FormData,
) -> Result<Option<String>, String> {
    Validator::new()
        .validate_field(field_name, value, rules, form)
        .map_err(|e| e.to_string())
}

fn form_errors(form: &FormData, rules: &FormRules) -> Result<FormErrors, String> {
    Validator::new()
        .validate_form(form, rules)
        .map_err(|e| e.to_string())
}

fn dependents(field_name: &str, rules: &FormRules) -> Vec<String> {
    rules
        .dependents(field_name)
        .into_iter()
        .map(String::from)
        .collect()
}
