use crate::capability::VibrateCapability;
use crate::feedback::{Feedback, Vibration};

/// Guard-then-forward access to a host's vibration capability.
///
/// An absent capability is not an error: every call on an absent bridge is a
/// silent no-op.
#[derive(Clone, Copy)]
pub struct VibrationBridge<'a> {
    capability: Option<&'a dyn VibrateCapability>,
}

impl<'a> VibrationBridge<'a> {
    pub fn new(capability: Option<&'a dyn VibrateCapability>) -> Self {
        Self { capability }
    }

    pub fn present(capability: &'a dyn VibrateCapability) -> Self {
        Self::new(Some(capability))
    }

    pub fn absent() -> Self {
        Self::new(None)
    }

    pub fn vibrate(&self, duration_ms: u32) {
        match self.capability {
            Some(capability) => {
                log::trace!("vibrate {}ms", duration_ms);
                capability.vibrate(duration_ms);
            }
            None => log::debug!("vibrate {}ms skipped: no vibration capability", duration_ms),
        }
    }

    pub fn vibrate_pattern(&self, pattern: &[u32]) {
        match self.capability {
            Some(capability) => {
                log::trace!("vibrate pattern {:?}", pattern);
                capability.vibrate_pattern(pattern);
            }
            None => log::debug!("vibrate pattern {:?} skipped: no vibration capability", pattern),
        }
    }

    pub fn has_vibrate(&self) -> bool {
        self.capability.is_some()
    }

    pub fn play(&self, feedback: Feedback) {
        match feedback.vibration() {
            Vibration::Single(duration_ms) => self.vibrate(duration_ms),
            Vibration::Pattern(pattern) => self.vibrate_pattern(pattern),
        }
    }

    pub fn tap(&self) {
        self.play(Feedback::Tap);
    }

    pub fn medium(&self) {
        self.play(Feedback::Medium);
    }

    pub fn heavy(&self) {
        self.play(Feedback::Heavy);
    }

    pub fn success(&self) {
        self.play(Feedback::Success);
    }

    pub fn error(&self) {
        self.play(Feedback::Error);
    }
}

impl Default for VibrationBridge<'_> {
    fn default() -> Self {
        Self::absent()
    }
}

impl core::fmt::Debug for VibrationBridge<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VibrationBridge")
            .field("has_vibrate", &self.has_vibrate())
            .finish()
    }
}
