// Platform-agnostic vibration capability
//
// Implemented by each host. Failures inside the host are the host's business;
// neither call reports anything back.
pub trait VibrateCapability: Send {
    fn vibrate(&self, duration_ms: u32);
    fn vibrate_pattern(&self, pattern: &[u32]);
}
