use haptic_core::VibrateCapability;
use wasm_bindgen::JsValue;

/// `navigator.vibrate` of the current window.
///
/// Only obtainable through [`detect`], so holding one means the page had the
/// capability when it was checked.
#[derive(Clone, Copy, Debug)]
pub struct NavigatorVibrator {
    _detected: (),
}

impl NavigatorVibrator {
    fn navigator() -> Option<web_sys::Navigator> {
        web_sys::window().map(|window| window.navigator())
    }
}

impl VibrateCapability for NavigatorVibrator {
    fn vibrate(&self, duration_ms: u32) {
        if let Some(navigator) = Self::navigator() {
            // false only means the browser declined (e.g. no user activation yet)
            let _ = navigator.vibrate_with_duration(duration_ms);
        }
    }

    fn vibrate_pattern(&self, pattern: &[u32]) {
        if let Some(navigator) = Self::navigator() {
            let segments: js_sys::Array = pattern.iter().map(|&ms| JsValue::from(ms)).collect();
            let _ = navigator.vibrate_with_pattern(&segments);
        }
    }
}

/// Present iff there is a window and `typeof navigator.vibrate === "function"`.
#[cfg(target_arch = "wasm32")]
pub fn detect() -> Option<NavigatorVibrator> {
    let navigator = web_sys::window()?.navigator();
    let vibrate = js_sys::Reflect::get(&navigator, &JsValue::from_str("vibrate")).ok()?;
    vibrate
        .is_function()
        .then_some(NavigatorVibrator { _detected: () })
}

/// Outside the browser there is no `navigator`, so the capability is absent.
#[cfg(not(target_arch = "wasm32"))]
pub fn detect() -> Option<NavigatorVibrator> {
    None
}
