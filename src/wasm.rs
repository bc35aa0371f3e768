//! WASM bindings for ceaser
//!
//! JavaScript-accessible wrappers around time and easing parsing.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::{parse_easing, parse_time, EasingSpec};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse a CSS `<time>` literal; returns milliseconds, `NaN` when invalid.
#[wasm_bindgen]
pub fn css_time_to_ms(time: Option<String>) -> f64 {
    parse_time(time.as_deref())
}

/// Result of classifying an easing expression (exposed to WASM).
#[derive(Serialize, Deserialize)]
pub struct EasingParseResult {
    /// Whether the expression matched a recognized grammar
    pub ok: bool,
    /// The parsed spec, absent when `ok` is false
    pub spec: Option<EasingSpec>,
}

/// Classify an easing expression; returns `{ ok, spec }`.
#[wasm_bindgen]
pub fn easing_parse(text: &str) -> Result<JsValue, JsValue> {
    let spec = EasingSpec::parse(text);
    let result = EasingParseResult {
        ok: spec.is_some(),
        spec,
    };
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Evaluate an easing expression at a progress value.
/// Returns `NaN` when the expression is not recognized.
#[wasm_bindgen]
pub fn easing_eval(text: &str, t: f64) -> f64 {
    match parse_easing(text) {
        Some(easing) => easing.evaluate(t),
        None => f64::NAN,
    }
}

/// Sample an easing expression at `n + 1` evenly spaced points.
#[wasm_bindgen]
pub fn easing_sample(text: &str, n: usize) -> Option<Vec<f64>> {
    parse_easing(text).map(|easing| easing.sample(n))
}
