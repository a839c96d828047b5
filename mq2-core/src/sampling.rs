//! Averaged Resistance Sampling
//!
//! ## Why average?
//!
//! A single conversion of the MQ2 divider is noisy: heater ripple and ADC
//! quantization easily move it by a few codes. Averaging a short window of
//! samples, spaced so the heater and converter settle, gives a stable
//! resistance for both calibration and reads.
//!
//! ## Timing
//!
//! ```text
//! sample ─ wait ─ sample ─ wait ─ ... ─ sample ─ wait
//! └──────────── sample_count × interval_ms ────────────┘
//! ```
//!
//! ## Faults
//!
//! A sample whose conversion faulted, or that read a code of 0, is retried
//! up to `fault_retries` times. Every attempt waits the full interval. Once
//! the budget is spent the last error is returned; faulty samples are never
//! averaged in.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::{
    config::{SamplingConfig, SensorConfig},
    constants::MAX_SAMPLES,
    errors::{SensorError, SensorResult},
    pins::PinChannelMapping,
    resistance::resistance_from_raw,
    traits::AdcReader,
};

/// Resistances collected in one averaged window
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    samples: Vec<f32, MAX_SAMPLES>,
    retries: u8,
}

impl SampleWindow {
    /// Empty window
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            retries: 0,
        }
    }

    /// Add one sample resistance
    pub fn push(&mut self, resistance: f32) -> SensorResult<()> {
        self.samples.push(resistance).map_err(|_| SensorError::InvalidConfig {
            reason: "sample count exceeds MAX_SAMPLES",
        })
    }

    /// Arithmetic mean, `None` for an empty window
    pub fn mean(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f32 = self.samples.iter().sum();
        Some(sum / self.samples.len() as f32)
    }

    /// Smallest sample
    pub fn min(&self) -> Option<f32> {
        self.samples.iter().copied().reduce(f32::min)
    }

    /// Largest sample
    pub fn max(&self) -> Option<f32> {
        self.samples.iter().copied().reduce(f32::max)
    }

    /// Max minus min, a quick noise indicator
    pub fn spread(&self) -> Option<f32> {
        Some(self.max()? - self.min()?)
    }

    /// Collected samples in acquisition order
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if nothing was collected
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Retries spent across the window
    pub fn retries(&self) -> u8 {
        self.retries
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect one window of sensor resistances
pub fn sample_window<A, D>(
    adc: &mut A,
    delay: &mut D,
    mapping: &PinChannelMapping,
    config: &SensorConfig,
    window: &SamplingConfig,
) -> SensorResult<SampleWindow>
where
    A: AdcReader,
    D: DelayNs,
{
    window.validate()?;

    let mut collected = SampleWindow::new();
    for _ in 0..window.sample_count {
        let (resistance, retries) = acquire(adc, delay, mapping, config, window)?;
        collected.push(resistance)?;
        collected.retries = collected.retries.saturating_add(retries);
    }
    Ok(collected)
}

/// Mean resistance of one window
pub fn sample_resistance<A, D>(
    adc: &mut A,
    delay: &mut D,
    mapping: &PinChannelMapping,
    config: &SensorConfig,
    window: &SamplingConfig,
) -> SensorResult<f32>
where
    A: AdcReader,
    D: DelayNs,
{
    sample_window(adc, delay, mapping, config, window)?
        .mean()
        .ok_or(SensorError::InvalidConfig {
            reason: "sample count must be at least 1",
        })
}

/// One sample with retries; returns the resistance and retries spent
fn acquire<A, D>(
    adc: &mut A,
    delay: &mut D,
    mapping: &PinChannelMapping,
    config: &SensorConfig,
    window: &SamplingConfig,
) -> SensorResult<(f32, u8)>
where
    A: AdcReader,
    D: DelayNs,
{
    let mut attempt: u8 = 0;
    loop {
        let result = read_code(adc, mapping).and_then(|raw| {
            resistance_from_raw(raw, config.load_resistance_kohm, config.adc_max)
        });
        delay.delay_ms(window.interval_ms);

        match result {
            Ok(resistance) => return Ok((resistance, attempt)),
            Err(err) if err.is_sample_fault() && attempt < window.fault_retries => {
                attempt += 1;
                log_warn!(
                    "Sample fault on GPIO {}, retry {} of {}",
                    mapping.gpio, attempt, window.fault_retries
                );
            }
            Err(err) => return Err(err),
        }
    }
}

/// Block until the ADC finishes a conversion
fn read_code<A: AdcReader>(adc: &mut A, mapping: &PinChannelMapping) -> SensorResult<u16> {
    nb::block!(adc.read_raw(mapping.group, mapping.channel)).map_err(|_| SensorError::AdcFault {
        group: mapping.group,
        channel: mapping.channel,
    })
}
