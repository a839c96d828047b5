//! Calibration and gas-concentration driver for MQ2 sensors
//!
//! Turns raw 12-bit ADC codes from an MQ2-class resistive gas sensor into
//! concentration estimates for LPG, CO and smoke using the datasheet
//! log-log characteristic curves.
//!
//! Key constraints:
//! - Runs without `std` (ESP32-class targets)
//! - No heap allocation
//! - Synchronous, blocking sampling; one driver per physical sensor
//!
//! ```no_run
//! use mq2_core::{GasType, Mq2};
//! use mq2_core::mock::{MockAdc, MockDelay};
//!
//! let mut sensor = Mq2::new(36, MockAdc::constant(1200), MockDelay::new())?;
//! sensor.initialize()?;
//!
//! let lpg = sensor.get_percentage(GasType::Lpg)?;
//! # Ok::<(), mq2_core::SensorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod config;
pub mod constants;
pub mod curves;
pub mod errors;
pub mod mock;
pub mod pins;
pub mod resistance;
pub mod sampling;
pub mod sensor;
#[cfg(feature = "std")]
pub mod shared;
pub mod traits;

// Public API
pub use config::{SamplingConfig, SensorConfig};
pub use curves::{GasCurve, GasType};
pub use errors::{SensorError, SensorResult};
pub use pins::{ChannelGroup, PinChannelMapping, PinMap};
pub use resistance::resistance_from_raw;
pub use sensor::{GasReadings, Mq2, INVALID_READING};
#[cfg(feature = "std")]
pub use shared::SharedMq2;
pub use traits::{AdcReader, Attenuation};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
