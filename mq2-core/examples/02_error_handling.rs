//! Error Handling and Recovery
//!
//! Walks through the faults the driver reports and how a main loop can
//! react to each one.
//!
//! ## Error Categories
//!
//! 1. **Setup** - unrouted GPIO, rejected configuration
//! 2. **Sampling** - ADC faults, zero codes (disconnected sensor)
//! 3. **Estimation** - not calibrated, degenerate ratio, unknown gas tag
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_error_handling
//! ```

use mq2_core::{
    mock::{MockAdc, MockDelay, MockSample},
    GasType, Mq2, SensorConfig, SensorError, INVALID_READING,
};

fn main() {
    println!("=== Setup errors ===");
    match Mq2::new(5, MockAdc::constant(1200), MockDelay::new()) {
        Ok(_) => println!("  unexpected: GPIO 5 resolved"),
        Err(e) => println!("  ✗ {}", e),
    }

    let config = SensorConfig::default().with_load_resistance(-1.0);
    let board = &mq2_core::pins::ESP32_DEVKIT_V1;
    match Mq2::with_config(36, board, config, MockAdc::constant(1), MockDelay::new()) {
        Ok(_) => println!("  unexpected: negative load accepted"),
        Err(e) => println!("  ✗ {}", e),
    }

    println!("\n=== Sampling errors ===");
    // Wire fell off: every conversion reads 0
    let mut sensor = Mq2::new(36, MockAdc::constant(0), MockDelay::new())
        .expect("GPIO 36 is routed");
    match sensor.initialize() {
        Err(SensorError::ZeroReading) => println!("  ✗ sensor disconnected, check wiring"),
        other => println!("  unexpected: {:?}", other),
    }

    // ADC2 busy with the radio: faults are retried, then reported
    let flaky = MockAdc::sequence(&[MockSample::Fault, MockSample::Fault])
        .with_fallback(MockSample::Code(1200));
    let mut sensor = Mq2::new(25, flaky, MockDelay::new()).expect("GPIO 25 is routed");
    match sensor.initialize() {
        Ok(r0) => println!("  ✓ recovered from transient faults, R0 = {:.3} kOhm", r0),
        Err(e) => println!("  ✗ {}", e),
    }

    let dead = MockAdc::constant_sample(MockSample::Fault);
    let mut sensor = Mq2::new(25, dead, MockDelay::new()).expect("GPIO 25 is routed");
    if let Err(e) = sensor.initialize() {
        println!("  ✗ {} (retries exhausted)", e);
    }

    println!("\n=== Estimation errors ===");
    let mut sensor = Mq2::new(36, MockAdc::constant(1200), MockDelay::new())
        .expect("GPIO 36 is routed");
    if let Err(e) = sensor.get_percentage(GasType::Lpg) {
        println!("  ✗ {} - call initialize() first", e);
    }

    if sensor.initialize().is_ok() {
        println!("  ✓ calibrated");
    }
    let value = sensor.percentage_or_sentinel(7);
    if value == INVALID_READING {
        println!("  ✗ gas tag 7 unknown, got sentinel {}", value);
    }

    // Output shorted to the rail: Rs = 0, the curve has no answer
    let shorted = MockAdc::sequence(&[MockSample::Code(1200); 5])
        .with_fallback(MockSample::Code(4095));
    let mut sensor = Mq2::new(36, shorted, MockDelay::new()).expect("GPIO 36 is routed");
    sensor.initialize().expect("clean-air calibration");
    match sensor.read_all() {
        Ok(readings) => println!("  unexpected: {:?}", readings),
        Err(e) => println!("  ✗ {}", e),
    }
}
