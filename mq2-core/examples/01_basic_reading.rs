//! Basic MQ2 Polling Loop
//!
//! Calibrates in clean air, then prints LPG, CO and smoke estimates every
//! 500 ms, the way a board's main loop would over a serial console.
//!
//! ## Hardware Setup (real board)
//! - ESP32 DevKit V1
//! - MQ2 breakout, AO on GPIO 36 (ADC1 channel 0), 1 kΩ load resistor
//! - Heater warmed up for a few minutes before calibration
//!
//! This host version replaces the ADC with a script: clean air for
//! calibration, then a slowly rising gas concentration. Printed values are
//! the curve estimates scaled by 100, as the board firmware prints them.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_reading
//! ```

use std::{thread, time::Duration};

use embedded_hal::delay::DelayNs;
use mq2_core::{
    mock::{MockAdc, MockSample},
    GasType, Mq2, SensorError,
};

/// Console scaling of the firmware demo
const DISPLAY_SCALE: f32 = 100.0;

/// Blocking delay on the host
struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

fn main() -> Result<(), SensorError> {
    println!("Testing the MQ2 sensor");

    // Clean air first, then a leak drifting in
    let mut adc = MockAdc::sequence(&[MockSample::Code(800); 5]);
    for step in 0..40u16 {
        adc.push(MockSample::Code(800 + step * 40));
    }
    let adc = adc.with_fallback(MockSample::Code(2400));

    let mut sensor = Mq2::new(36, adc, StdDelay)?;
    let r0 = sensor.initialize()?;
    println!("Calibrated: R0 = {:.3} kOhm", r0);

    let mut delay = StdDelay;
    for _ in 0..8 {
        let lpg = sensor.get_percentage(GasType::Lpg)? * DISPLAY_SCALE;
        let co = sensor.get_percentage(GasType::Co)? * DISPLAY_SCALE;
        let smoke = sensor.get_percentage(GasType::Smoke)? * DISPLAY_SCALE;
        println!("LPG: {:>10.4}\tCO: {:>10.4}\tSMOKE: {:>10.4}", lpg, co, smoke);
        delay.delay_ms(500);
    }

    Ok(())
}
