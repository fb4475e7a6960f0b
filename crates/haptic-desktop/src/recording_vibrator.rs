use std::sync::{Arc, Mutex};

use haptic_core::VibrateCapability;
use haptic_core::history::{VibrationHistory, VibrationRecord};

/// Mock host capability: nothing vibrates, every request is logged and kept
/// in a shared history for the panel to show.
#[derive(Clone, Default)]
pub struct RecordingVibrator {
    history: Arc<Mutex<VibrationHistory>>,
}

impl RecordingVibrator {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, record: VibrationRecord) {
        log::info!("vibrate: {} ({}ms total)", record, record.total_ms());
        // A poisoned lock only loses the record, the request itself is done
        if let Ok(mut history) = self.history.lock() {
            history.push(record);
        }
    }

    /// Most recent records, newest first
    pub fn recent(&self, count: usize) -> Vec<VibrationRecord> {
        self.history
            .lock()
            .ok()
            .map(|history| history.recent(count).cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.history.lock().map(|history| history.len()).unwrap_or(0)
    }

    /// Pausing only stops recording; requests are still accepted
    pub fn set_recording(&self, recording: bool) {
        if let Ok(mut history) = self.history.lock() {
            history.set_enabled(recording);
        }
    }

    pub fn is_recording(&self) -> bool {
        self.history
            .lock()
            .map(|history| history.is_enabled())
            .unwrap_or(false)
    }

    pub fn clear(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
    }
}

impl VibrateCapability for RecordingVibrator {
    fn vibrate(&self, duration_ms: u32) {
        self.record(VibrationRecord::single(duration_ms));
    }

    fn vibrate_pattern(&self, pattern: &[u32]) {
        self.record(VibrationRecord::pattern(pattern));
    }
}
