//! Browser host for `haptic-core`, backed by `navigator.vibrate`.
//!
//! Rust callers use the free functions below; JavaScript callers get the
//! same three operations through the exports in [`exports`].

use std::sync::OnceLock;

use haptic_core::{VibrateCapability, VibrationBridge};

pub mod exports;
mod navigator;

pub use navigator::{NavigatorVibrator, detect};

static HOST: OnceLock<Option<NavigatorVibrator>> = OnceLock::new();

/// Bridge over the page's vibration capability, detected on first use.
pub fn bridge() -> VibrationBridge<'static> {
    let host = HOST.get_or_init(|| {
        let host = detect();
        log::debug!("navigator.vibrate available: {}", host.is_some());
        host
    });
    VibrationBridge::new(host.as_ref().map(|v| v as &dyn VibrateCapability))
}

pub fn vibrate(duration_ms: u32) {
    bridge().vibrate(duration_ms);
}

pub fn vibrate_pattern(pattern: &[u32]) {
    bridge().vibrate_pattern(pattern);
}

pub fn has_vibrate() -> bool {
    bridge().has_vibrate()
}

/// Check if vibration API is supported.
#[must_use]
pub fn is_supported() -> bool {
    has_vibrate()
}

/// Light tap feedback (10ms)
pub fn tap() {
    bridge().tap();
}

/// Medium feedback (25ms)
pub fn medium() {
    bridge().medium();
}

/// Heavy feedback (50ms)
pub fn heavy() {
    bridge().heavy();
}

/// Success pattern (short-pause-short)
pub fn success() {
    bridge().success();
}

/// Error pattern (long-pause-long-pause-long)
pub fn error() {
    bridge().error();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_shareable<T: Send + Sync + 'static>() {}

    #[test]
    fn test_host_handle_holds_no_js_state() {
        // Cached in a static, so it must not own any JsValue
        assert_shareable::<NavigatorVibrator>();
        assert_eq!(std::mem::size_of::<NavigatorVibrator>(), 0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_target_is_absent() {
        assert!(detect().is_none());
        assert!(!has_vibrate());
        assert!(!is_supported());
        assert!(!exports::js_has_vibrate());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_calls_are_silent_noops() {
        let calls = std::panic::catch_unwind(|| {
            vibrate(200);
            vibrate_pattern(&[100, 50, 100]);
            tap();
            success();
            exports::js_vibrate(200);
            exports::js_vibrate_pattern(&[100, 50, 100]);
        });
        assert!(calls.is_ok());
    }
}
