//! Named feedback presets used by UI code.

use crate::consts;

/// A request shape: one continuous buzz, or an on/off pattern starting with "on".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vibration {
    Single(u32),
    Pattern(&'static [u32]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Light tap (10ms)
    Tap,
    /// Medium feedback (25ms)
    Medium,
    /// Heavy feedback (50ms)
    Heavy,
    /// Short-pause-short
    Success,
    /// Long-pause-long-pause-long
    Error,
}

impl Feedback {
    pub const ALL: [Feedback; 5] = [
        Feedback::Tap,
        Feedback::Medium,
        Feedback::Heavy,
        Feedback::Success,
        Feedback::Error,
    ];

    pub fn vibration(&self) -> Vibration {
        match self {
            Feedback::Tap => Vibration::Single(consts::TAP_MS),
            Feedback::Medium => Vibration::Single(consts::MEDIUM_MS),
            Feedback::Heavy => Vibration::Single(consts::HEAVY_MS),
            Feedback::Success => Vibration::Pattern(&consts::SUCCESS_PATTERN),
            Feedback::Error => Vibration::Pattern(&consts::ERROR_PATTERN),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Feedback::Tap => "tap",
            Feedback::Medium => "medium",
            Feedback::Heavy => "heavy",
            Feedback::Success => "success",
            Feedback::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_presets() {
        assert_eq!(Feedback::Tap.vibration(), Vibration::Single(10));
        assert_eq!(Feedback::Medium.vibration(), Vibration::Single(25));
        assert_eq!(Feedback::Heavy.vibration(), Vibration::Single(50));
    }

    #[test]
    fn test_pattern_presets() {
        assert_eq!(Feedback::Success.vibration(), Vibration::Pattern(&[10, 50, 10]));
        assert_eq!(
            Feedback::Error.vibration(),
            Vibration::Pattern(&[50, 100, 50, 100, 50])
        );
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in Feedback::ALL.iter().enumerate() {
            for b in &Feedback::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
