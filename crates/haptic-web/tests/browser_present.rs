//! Runs in a browser with `navigator.vibrate` replaced by a recorder.
//! Kept in its own test binary: the host is detected once per module.

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const CALLS: &str = "__hapticVibrateCalls";

fn install_recorder() {
    let global = js_sys::global();
    Reflect::set(&global, &JsValue::from_str(CALLS), &Array::new()).unwrap();

    let recorder = Function::new_with_args(
        "arg",
        "globalThis.__hapticVibrateCalls.push(arg); return true;",
    );
    let navigator = web_sys::window().unwrap().navigator();
    Reflect::set(&navigator, &JsValue::from_str("vibrate"), &recorder).unwrap();
}

fn recorded_calls() -> Vec<JsValue> {
    let calls = Reflect::get(&js_sys::global(), &JsValue::from_str(CALLS)).unwrap();
    Array::from(&calls).iter().collect()
}

fn as_pattern(value: &JsValue) -> Vec<u32> {
    Array::from(value)
        .iter()
        .map(|ms| ms.as_f64().unwrap() as u32)
        .collect()
}

#[wasm_bindgen_test]
fn recorder_is_detected() {
    install_recorder();

    assert!(haptic_web::detect().is_some());
    assert!(haptic_web::has_vibrate());
    assert!(haptic_web::exports::js_has_vibrate());
}

#[wasm_bindgen_test]
fn single_duration_forwarded_once() {
    install_recorder();

    haptic_web::vibrate(200);

    let calls = recorded_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].as_f64(), Some(200.0));
}

#[wasm_bindgen_test]
fn pattern_forwarded_once_unchanged() {
    install_recorder();

    haptic_web::vibrate_pattern(&[100, 50, 100]);

    let calls = recorded_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(as_pattern(&calls[0]), vec![100, 50, 100]);
}

#[wasm_bindgen_test]
fn js_exports_forward() {
    install_recorder();

    haptic_web::exports::js_vibrate(25);
    haptic_web::exports::js_vibrate_pattern(&[10, 50, 10]);

    let calls = recorded_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].as_f64(), Some(25.0));
    assert_eq!(as_pattern(&calls[1]), vec![10, 50, 10]);
}

#[wasm_bindgen_test]
fn presets_reach_navigator() {
    install_recorder();

    haptic_web::heavy();
    haptic_web::error();

    let calls = recorded_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].as_f64(), Some(50.0));
    assert_eq!(as_pattern(&calls[1]), vec![50, 100, 50, 100, 50]);
}
