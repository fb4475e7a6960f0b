//! Vibration History - Ring buffer of recorded vibration requests
//!
//! Hosts that do not drive real hardware (the desktop mock host, tests) keep
//! what they were asked to do here so it can be shown or asserted on.
//! No allocation; patterns longer than `MAX_RECORDED_PATTERN_LEN` are cut.

use core::fmt;

use heapless::Deque;

use crate::consts::{HISTORY_CAPACITY, MAX_RECORDED_PATTERN_LEN};

/// A single recorded request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VibrationRecord {
    Single(u32),
    Pattern {
        segments: heapless::Vec<u32, MAX_RECORDED_PATTERN_LEN>,
        /// Set when the requested pattern had more segments than were kept
        truncated: bool,
    },
}

impl VibrationRecord {
    pub fn single(duration_ms: u32) -> Self {
        VibrationRecord::Single(duration_ms)
    }

    /// Record a pattern, keeping at most `MAX_RECORDED_PATTERN_LEN` segments
    pub fn pattern(pattern: &[u32]) -> Self {
        let mut segments = heapless::Vec::new();
        for &ms in pattern.iter().take(MAX_RECORDED_PATTERN_LEN) {
            if segments.push(ms).is_err() {
                break;
            }
        }
        VibrationRecord::Pattern {
            segments,
            truncated: pattern.len() > MAX_RECORDED_PATTERN_LEN,
        }
    }

    /// Total time the request occupies, pauses included
    pub fn total_ms(&self) -> u64 {
        match self {
            VibrationRecord::Single(ms) => u64::from(*ms),
            VibrationRecord::Pattern { segments, .. } => {
                segments.iter().map(|&ms| u64::from(ms)).sum()
            }
        }
    }
}

impl fmt::Display for VibrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VibrationRecord::Single(ms) => write!(f, "{}ms", ms),
            VibrationRecord::Pattern { segments, truncated } => {
                write!(f, "pattern [")?;
                for (i, ms) in segments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", ms)?;
                }
                if *truncated {
                    write!(f, ", ...")?;
                }
                write!(f, "]")
            }
        }
    }
}

pub struct VibrationHistory {
    records: Deque<VibrationRecord, HISTORY_CAPACITY>,
    enabled: bool,
}

impl VibrationHistory {
    pub const fn new() -> Self {
        Self {
            records: Deque::new(),
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Push a record, removing oldest if full
    pub fn push(&mut self, record: VibrationRecord) {
        if !self.enabled {
            return;
        }

        if self.records.is_full() {
            self.records.pop_front();
        }
        // Room was made above
        let _ = self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The most recent `count` records, newest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &VibrationRecord> {
        self.records.iter().rev().take(count)
    }
}

impl Default for VibrationHistory {
    fn default() -> Self {
        Self::new()
    }
}
