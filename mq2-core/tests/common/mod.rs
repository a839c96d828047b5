//! Shared fixtures for integration tests
//!
//! Closed-form expectations are computed in f64 straight from the model so
//! they do not share code paths with the driver.

#![allow(dead_code)]

use mq2_core::{
    mock::{MockAdc, MockDelay, MockSample},
    GasCurve, Mq2,
};

/// Load resistor of the reference board (kΩ)
pub const RL: f64 = 1.0;

/// 12-bit full scale
pub const ADC_MAX: f64 = 4095.0;

/// Datasheet clean-air factor
pub const CLEAN_AIR: f64 = 9.83;

/// Sensor resistance for a raw code
pub fn resistance(code: u16) -> f64 {
    let raw = code as f64;
    RL * (ADC_MAX - raw) / raw
}

/// Curve estimate for a ratio
pub fn percentage(ratio: f64, curve: &GasCurve) -> f64 {
    let exponent = (ratio.ln() - curve.y0 as f64) / curve.slope as f64 + curve.x0 as f64;
    10f64.powf(exponent)
}

/// Ratio at which a curve reads `target`
pub fn ratio_for(target: f64, curve: &GasCurve) -> f64 {
    (curve.y0 as f64 + curve.slope as f64 * (target.log10() - curve.x0 as f64)).exp()
}

/// Relative difference between an f32 result and an f64 expectation
pub fn relative_error(actual: f32, expected: f64) -> f64 {
    ((actual as f64 - expected) / expected).abs()
}

/// Driver on GPIO 36 whose ADC always returns `code`
pub fn constant_sensor(code: u16) -> Mq2<MockAdc, MockDelay> {
    Mq2::new(36, MockAdc::constant(code), MockDelay::new())
        .expect("GPIO 36 is on the DevKit map")
}

/// Driver calibrated at `clean_code`, then reading `gas_code` forever
pub fn calibrated_sensor(clean_code: u16, gas_code: u16) -> Mq2<MockAdc, MockDelay> {
    let adc = MockAdc::sequence(&[MockSample::Code(clean_code); 5])
        .with_fallback(MockSample::Code(gas_code));
    let mut sensor = Mq2::new(36, adc, MockDelay::new()).expect("GPIO 36 is on the DevKit map");
    sensor.initialize().expect("clean-air calibration");
    sensor
}
