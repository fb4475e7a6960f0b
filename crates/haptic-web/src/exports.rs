//! JavaScript-facing names for the bridge operations.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = vibrate)]
pub fn js_vibrate(ms: u32) {
    crate::vibrate(ms);
}

#[wasm_bindgen(js_name = vibratePattern)]
pub fn js_vibrate_pattern(pattern: &[u32]) {
    crate::vibrate_pattern(pattern);
}

#[wasm_bindgen(js_name = hasVibrate)]
pub fn js_has_vibrate() -> bool {
    crate::has_vibrate()
}
