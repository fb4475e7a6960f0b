// Feedback preset timings, in milliseconds
pub const TAP_MS: u32 = 10;
pub const MEDIUM_MS: u32 = 25;
pub const HEAVY_MS: u32 = 50;

/// short-pause-short
pub const SUCCESS_PATTERN: [u32; 3] = [10, 50, 10];
/// long-pause-long-pause-long
pub const ERROR_PATTERN: [u32; 5] = [50, 100, 50, 100, 50];

/// Maximum number of records kept by a `VibrationHistory`
pub const HISTORY_CAPACITY: usize = 32;

/// Maximum number of pattern segments kept per record
pub const MAX_RECORDED_PATTERN_LEN: usize = 16;
