//! Error Types for Sensor Faults and Invalid Input
//!
//! ## Design
//!
//! Errors are returned from every sampling call, so they stay small:
//!
//! 1. **Copy Semantics**: no heap data, only integers and `&'static str`.
//! 2. **Out-of-band faults**: a failed ADC conversion is an error, never a
//!    raw code of 0 that would be averaged in with good samples.
//! 3. **No non-finite results**: degenerate numeric input (zero code, zero
//!    ratio, broken baseline) is reported instead of producing NaN or
//!    infinity.
//!
//! ## Error Categories
//!
//! ### Setup
//! - `UnresolvedPin`: GPIO not in the board's ADC pin map
//! - `InvalidConfig`: sampling or circuit parameters rejected
//! - `AdcConfig`: the ADC driver refused the channel configuration
//!
//! ### Sampling
//! - `AdcFault`: the ADC reported a conversion failure
//! - `ZeroReading`: raw code 0 (sensor disconnected or shorted output)
//! - `RawOutOfRange`: code above the converter's full scale
//!
//! ### Estimation
//! - `NotCalibrated`: no baseline resistance yet
//! - `InvalidBaseline`: calibration produced an unusable R0
//! - `InvalidRatio`: Rs/R0 is zero, negative or not finite
//! - `InvalidGasType`: unknown gas tag
//!
//! ```rust
//! use mq2_core::{GasType, Mq2, SensorError};
//! use mq2_core::mock::{MockAdc, MockDelay};
//!
//! let mut sensor = Mq2::new(36, MockAdc::constant(0), MockDelay::new())?;
//! match sensor.initialize() {
//!     Ok(_r0) => {}
//!     Err(SensorError::ZeroReading) => {
//!         // Sensor not connected - check wiring
//!     }
//!     Err(_) => {}
//! }
//! # Ok::<(), SensorError>(())
//! ```

use thiserror_no_std::Error;

use crate::pins::ChannelGroup;

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Sensor errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// GPIO is not routed to any ADC channel on this board
    #[error("GPIO {gpio} has no ADC channel")]
    UnresolvedPin {
        /// Requested GPIO number
        gpio: u8,
    },

    /// Gas tag outside the known gas types
    #[error("Invalid gas type tag {tag}")]
    InvalidGasType {
        /// Tag that failed to decode
        tag: u8,
    },

    /// Raw ADC code of zero, the divider output is grounded
    #[error("ADC returned 0, sensor disconnected or faulty")]
    ZeroReading,

    /// Raw ADC code above full scale
    #[error("Raw code {raw} exceeds full scale {max}")]
    RawOutOfRange {
        /// Code reported by the ADC
        raw: u16,
        /// Full-scale code
        max: u16,
    },

    /// ADC driver reported a conversion failure
    #[error("ADC read failed on {group:?} channel {channel}")]
    AdcFault {
        /// Converter unit
        group: ChannelGroup,
        /// Channel within the unit
        channel: u8,
    },

    /// ADC driver refused the channel configuration
    #[error("ADC configuration failed on {group:?} channel {channel}")]
    AdcConfig {
        /// Converter unit
        group: ChannelGroup,
        /// Channel within the unit
        channel: u8,
    },

    /// Resistance ratio is zero, negative or not finite
    #[error("Resistance ratio outside the curve domain")]
    InvalidRatio,

    /// Calibration produced a zero, negative or non-finite R0
    #[error("Calibration produced an unusable baseline resistance")]
    InvalidBaseline,

    /// Numeric input makes no sense (NaN, infinity, out of domain)
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// A gas reading was requested before calibration
    #[error("Sensor not calibrated")]
    NotCalibrated,

    /// Configuration rejected
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: &'static str,
    },

    /// Shared handle lock was poisoned by a panicking thread
    #[cfg(feature = "std")]
    #[error("Sensor lock poisoned")]
    LockPoisoned,
}

impl SensorError {
    /// True for faults raised while acquiring a single sample.
    ///
    /// These are the errors the sampling layer retries.
    pub fn is_sample_fault(&self) -> bool {
        matches!(self, Self::AdcFault { .. } | Self::ZeroReading)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnresolvedPin { gpio } =>
                defmt::write!(fmt, "GPIO {} has no ADC channel", gpio),
            Self::InvalidGasType { tag } =>
                defmt::write!(fmt, "Invalid gas type {}", tag),
            Self::ZeroReading =>
                defmt::write!(fmt, "ADC returned 0"),
            Self::RawOutOfRange { raw, max } =>
                defmt::write!(fmt, "Raw {} exceeds {}", raw, max),
            Self::AdcFault { group, channel } =>
                defmt::write!(fmt, "ADC read failed on {} ch {}", group, channel),
            Self::AdcConfig { group, channel } =>
                defmt::write!(fmt, "ADC config failed on {} ch {}", group, channel),
            Self::InvalidRatio =>
                defmt::write!(fmt, "Invalid resistance ratio"),
            Self::InvalidBaseline =>
                defmt::write!(fmt, "Invalid baseline resistance"),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::NotCalibrated =>
                defmt::write!(fmt, "Not calibrated"),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
            #[cfg(feature = "std")]
            Self::LockPoisoned =>
                defmt::write!(fmt, "Lock poisoned"),
        }
    }
}
