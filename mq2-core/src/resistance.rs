//! Sensor resistance from raw ADC codes
//!
//! Inverts the divider formed by the sensing element and the load resistor.
//! A code of 0 would divide by zero, so it is reported as a fault instead.

use crate::errors::{SensorError, SensorResult};

/// Sensor resistance for a raw code, in the unit of `load_resistance`.
///
/// `Rs = RL × (adc_max - raw) / raw`
pub fn resistance_from_raw(raw: u16, load_resistance: f32, adc_max: u16) -> SensorResult<f32> {
    if raw == 0 {
        return Err(SensorError::ZeroReading);
    }
    if raw > adc_max {
        return Err(SensorError::RawOutOfRange { raw, max: adc_max });
    }

    let raw = raw as f32;
    Ok(load_resistance * (adc_max as f32 - raw) / raw)
}
