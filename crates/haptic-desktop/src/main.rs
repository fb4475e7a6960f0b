use config::PanelConfig;
use recording_vibrator::RecordingVibrator;

mod config;
mod log_capture;
mod panel;
mod recording_vibrator;

fn main() -> anyhow::Result<()> {
    let config = PanelConfig::from_args(std::env::args().skip(1))?;
    log_capture::init(config.log_level);

    let vibrator = RecordingVibrator::new();
    log::info!(
        "haptic-desktop started, vibration capability {}",
        if config.start_present { "present" } else { "absent" }
    );

    panel::run(vibrator, config.start_present)
}
