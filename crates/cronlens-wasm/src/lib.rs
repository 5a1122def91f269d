//! WASM bindings for cronlens-core.
//!
//! Exposes validation, error reporting, ambiguity detection, and next-run
//! calculation to the embedding web UI via `wasm-bindgen`. Compound
//! results cross the boundary as JSON strings; the booleans go through
//! directly.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p cronlens-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir ui/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/cronlens_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Fast validity gate for debounced editor input and persistence guards.
#[wasm_bindgen(js_name = "isValidCronFormat")]
pub fn is_valid_cron_format(expression: &str) -> bool {
    cronlens_core::is_valid_cron_format(expression)
}

/// True when day-of-month and day-of-week are both pinned, i.e. the
/// schedule triggers OR semantics in standard cron engines.
#[wasm_bindgen(js_name = "detectAmbiguousSchedule")]
pub fn detect_ambiguous_schedule(expression: &str) -> bool {
    cronlens_core::detect_ambiguous_schedule(expression)
}

/// Structured validation errors as a JSON array of `{key, values}`
/// descriptors; the UI maps each `key` through its message catalog.
#[wasm_bindgen(js_name = "getValidationErrors")]
pub fn get_validation_errors(expression: &str) -> Result<String, JsValue> {
    let errors = cronlens_core::get_validation_errors(expression);
    serde_json::to_string(&errors)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Next-run calculation as a JSON
/// `{runs, error, hasAmbiguousSchedule}` object. `locale` is a BCP-47
/// tag used to format the run timestamps.
#[wasm_bindgen(js_name = "calculateNextRuns")]
pub fn calculate_next_runs(expression: &str, locale: &str) -> Result<String, JsValue> {
    let result = cronlens_core::calculate_next_runs(expression, locale);
    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
