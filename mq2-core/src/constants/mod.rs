//! Constants for the MQ2 driver
//!
//! All numeric values used by the driver live here with their source.
//!
//! ## Organization
//!
//! - **Sensor**: divider circuit, converter resolution, datasheet factors
//! - **Timing**: sample counts and inter-sample intervals

/// Circuit and datasheet constants for the MQ2 and its ADC front end.
pub mod sensor;

/// Sample counts and intervals for calibration and normal reads.
pub mod timing;

pub use sensor::{
    ADC_MAX_12BIT, CLEAN_AIR_FACTOR, LOAD_RESISTANCE_KOHM,
};

pub use timing::{
    CALIBRATION_SAMPLE_INTERVAL_MS, CALIBRATION_SAMPLE_COUNT,
    READ_SAMPLE_INTERVAL_MS, READ_SAMPLE_COUNT, MAX_SAMPLES,
    DEFAULT_FAULT_RETRIES,
};
