//! Driver configuration
//!
//! Defaults reproduce the reference MQ2 breakout: 1 kΩ load resistor,
//! 12-bit converter at 11 dB, five samples 50 ms apart for both calibration
//! and reads. Boards with other hardware adjust through the `with_*`
//! builders, or ship the configuration as data with the `serde` feature.
//!
//! ```rust
//! use mq2_core::{SamplingConfig, SensorConfig};
//!
//! let config = SensorConfig::default()
//!     .with_load_resistance(10.0)
//!     .with_calibration(SamplingConfig::new(20, 100));
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::{
    constants::{
        ADC_MAX_12BIT, CALIBRATION_SAMPLE_COUNT, CALIBRATION_SAMPLE_INTERVAL_MS,
        CLEAN_AIR_FACTOR, DEFAULT_FAULT_RETRIES, LOAD_RESISTANCE_KOHM, MAX_SAMPLES,
        READ_SAMPLE_COUNT, READ_SAMPLE_INTERVAL_MS,
    },
    errors::{SensorError, SensorResult},
    traits::Attenuation,
};

/// How one averaged window is sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Samples averaged per window
    pub sample_count: u8,
    /// Pause after each sample (ms)
    pub interval_ms: u32,
    /// Extra attempts for a sample whose conversion faulted
    pub fault_retries: u8,
}

impl SamplingConfig {
    /// Window of `sample_count` samples spaced `interval_ms` apart
    pub const fn new(sample_count: u8, interval_ms: u32) -> Self {
        Self {
            sample_count,
            interval_ms,
            fault_retries: DEFAULT_FAULT_RETRIES,
        }
    }

    /// Calibration window defaults
    pub const fn calibration() -> Self {
        Self::new(CALIBRATION_SAMPLE_COUNT, CALIBRATION_SAMPLE_INTERVAL_MS)
    }

    /// Reading window defaults
    pub const fn reading() -> Self {
        Self::new(READ_SAMPLE_COUNT, READ_SAMPLE_INTERVAL_MS)
    }

    /// Override the retry budget
    pub const fn with_fault_retries(mut self, retries: u8) -> Self {
        self.fault_retries = retries;
        self
    }

    /// Blocking time of a fault-free window (ms), saturating at `u32::MAX`
    pub const fn window_ms(&self) -> u32 {
        (self.sample_count as u32).saturating_mul(self.interval_ms)
    }

    /// Check the window fits the sample buffer
    pub fn validate(&self) -> SensorResult<()> {
        if self.sample_count == 0 {
            return Err(SensorError::InvalidConfig {
                reason: "sample count must be at least 1",
            });
        }
        if self.sample_count as usize > MAX_SAMPLES {
            return Err(SensorError::InvalidConfig {
                reason: "sample count exceeds MAX_SAMPLES",
            });
        }
        Ok(())
    }
}

/// Full driver configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Load resistor on the board (kΩ)
    pub load_resistance_kohm: f32,
    /// Converter full-scale code
    pub adc_max: u16,
    /// Rs(clean air) / R0 from the datasheet
    pub clean_air_factor: f32,
    /// Channel attenuation applied at initialization
    pub attenuation: Attenuation,
    /// Window used for calibration
    pub calibration: SamplingConfig,
    /// Window used for each gas reading
    pub reading: SamplingConfig,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            load_resistance_kohm: LOAD_RESISTANCE_KOHM,
            adc_max: ADC_MAX_12BIT,
            clean_air_factor: CLEAN_AIR_FACTOR,
            attenuation: Attenuation::Db11,
            calibration: SamplingConfig::calibration(),
            reading: SamplingConfig::reading(),
        }
    }
}

impl SensorConfig {
    /// Set the load resistor value (kΩ)
    pub fn with_load_resistance(mut self, kohm: f32) -> Self {
        self.load_resistance_kohm = kohm;
        self
    }

    /// Set the clean-air factor
    pub fn with_clean_air_factor(mut self, factor: f32) -> Self {
        self.clean_air_factor = factor;
        self
    }

    /// Set the converter full-scale code.
    ///
    /// Must match the width the [`AdcReader`](crate::traits::AdcReader)
    /// configures, e.g. 1023 for a 10-bit converter.
    pub fn with_adc_max(mut self, adc_max: u16) -> Self {
        self.adc_max = adc_max;
        self
    }

    /// Set the channel attenuation
    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = attenuation;
        self
    }

    /// Replace the calibration window
    pub fn with_calibration(mut self, window: SamplingConfig) -> Self {
        self.calibration = window;
        self
    }

    /// Replace the reading window
    pub fn with_reading(mut self, window: SamplingConfig) -> Self {
        self.reading = window;
        self
    }

    /// Set the retry budget of both windows
    pub fn with_fault_retries(mut self, retries: u8) -> Self {
        self.calibration.fault_retries = retries;
        self.reading.fault_retries = retries;
        self
    }

    /// Reject parameters that would make the resistance math degenerate
    pub fn validate(&self) -> SensorResult<()> {
        if !self.load_resistance_kohm.is_finite() || self.load_resistance_kohm <= 0.0 {
            return Err(SensorError::InvalidConfig {
                reason: "load resistance must be positive",
            });
        }
        if !self.clean_air_factor.is_finite() || self.clean_air_factor <= 0.0 {
            return Err(SensorError::InvalidConfig {
                reason: "clean air factor must be positive",
            });
        }
        if self.adc_max == 0 {
            return Err(SensorError::InvalidConfig {
                reason: "ADC full scale must be non-zero",
            });
        }
        self.calibration.validate()?;
        self.reading.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_board() {
        let config = SensorConfig::default();
        assert_eq!(config.load_resistance_kohm, 1.0);
        assert_eq!(config.adc_max, 4095);
        assert_eq!(config.clean_air_factor, 9.83);
        assert_eq!(config.calibration.sample_count, 5);
        assert_eq!(config.calibration.window_ms(), 250);
        assert_eq!(config.reading.window_ms(), 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_circuit() {
        assert!(SensorConfig::default().with_load_resistance(0.0).validate().is_err());
        assert!(SensorConfig::default().with_clean_air_factor(f32::NAN).validate().is_err());
        assert!(SensorConfig::default().with_adc_max(0).validate().is_err());
    }

    #[test]
    fn rejects_bad_windows() {
        let empty = SensorConfig::default().with_reading(SamplingConfig::new(0, 50));
        assert!(matches!(empty.validate(), Err(SensorError::InvalidConfig { .. })));

        let oversized = SensorConfig::default()
            .with_calibration(SamplingConfig::new(MAX_SAMPLES as u8 + 1, 50));
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn retry_override_applies_to_both_windows() {
        let config = SensorConfig::default().with_fault_retries(0);
        assert_eq!(config.calibration.fault_retries, 0);
        assert_eq!(config.reading.fault_retries, 0);
    }

    #[test]
    fn long_window_saturates() {
        let window = SamplingConfig::new(MAX_SAMPLES as u8, u32::MAX / 2);
        assert_eq!(window.window_ms(), u32::MAX);
        assert!(window.validate().is_ok());
    }
}
