//! Sampling Counts and Intervals
//!
//! Averaging a short window suppresses conversion noise, and the pause
//! between samples lets the heater and ADC settle. One calibration or read
//! blocks for roughly `count × interval`:
//!
//! ```text
//! 5 samples × 50 ms = 250 ms
//! ```

/// Samples averaged during clean-air calibration.
pub const CALIBRATION_SAMPLE_COUNT: u8 = 5;

/// Pause after each calibration sample (ms).
pub const CALIBRATION_SAMPLE_INTERVAL_MS: u32 = 50;

/// Samples averaged for each gas reading.
pub const READ_SAMPLE_COUNT: u8 = 5;

/// Pause after each reading sample (ms).
pub const READ_SAMPLE_INTERVAL_MS: u32 = 50;

/// Upper bound on samples per window.
///
/// Sizes the fixed sample buffer, so it also bounds stack usage.
pub const MAX_SAMPLES: usize = 32;

/// Extra attempts allowed for a sample whose conversion faulted.
pub const DEFAULT_FAULT_RETRIES: u8 = 2;
