#![cfg_attr(not(test), no_std)]

pub mod bridge;
pub mod capability;
pub mod consts;
pub mod feedback;
pub mod history;

pub use bridge::VibrationBridge;
pub use capability::VibrateCapability;
pub use feedback::{Feedback, Vibration};
