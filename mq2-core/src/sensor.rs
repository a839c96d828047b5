//! MQ2 Gas Sensor Estimator
//!
//! ## Lifecycle
//!
//! ```text
//! Mq2::new(gpio) ──→ initialize() ──→ get_percentage(gas) ...
//!      │                  │
//!      │                  ├─ configure ADC channel (12-bit, 11 dB)
//!      │                  └─ calibrate: R0 = mean(Rs) / 9.83
//!      └─ resolve GPIO → ADC channel (fails for unrouted pins)
//! ```
//!
//! Each gas reading takes a fresh averaged window, forms Rs/R0 and inverts
//! the datasheet curve for that gas. Calibration assumes the sensor sits in
//! clean air and its heater has warmed up.
//!
//! ## Blocking
//!
//! Calibration and every reading block for `sample_count × interval_ms`
//! (250 ms with defaults). The driver has no internal locking; share it
//! across threads through [`crate::SharedMq2`].

use embedded_hal::delay::DelayNs;

use crate::{
    config::SensorConfig,
    curves::GasType,
    errors::{SensorError, SensorResult},
    pins::{PinChannelMapping, PinMap, ESP32_DEVKIT_V1},
    sampling::{self, SampleWindow},
    traits::AdcReader,
};

/// Flat value reported by [`Mq2::percentage_or_sentinel`] on any error.
///
/// Genuine estimates are never negative.
pub const INVALID_READING: f32 = -1.0;

/// Estimates for every gas from one averaged window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasReadings {
    /// Liquefied petroleum gas
    pub lpg: f32,
    /// Carbon monoxide
    pub co: f32,
    /// Smoke
    pub smoke: f32,
}

impl GasReadings {
    /// Estimate for one gas
    pub fn get(&self, gas: GasType) -> f32 {
        match gas {
            GasType::Lpg => self.lpg,
            GasType::Co => self.co,
            GasType::Smoke => self.smoke,
        }
    }
}

/// MQ2 driver bound to one ADC pin
pub struct Mq2<A, D> {
    adc: A,
    delay: D,
    mapping_index: usize,
    mapping: PinChannelMapping,
    config: SensorConfig,
    /// R0 in kΩ, `None` until calibrated
    baseline: Option<f32>,
}

impl<A, D> Mq2<A, D>
where
    A: AdcReader,
    D: DelayNs,
{
    /// Driver on an ESP32 DevKit V1 pin with default configuration
    pub fn new(gpio: u8, adc: A, delay: D) -> SensorResult<Self> {
        Self::with_config(gpio, &ESP32_DEVKIT_V1, SensorConfig::default(), adc, delay)
    }

    /// Driver on a custom board and configuration
    pub fn with_config(
        gpio: u8,
        pins: &PinMap,
        config: SensorConfig,
        adc: A,
        delay: D,
    ) -> SensorResult<Self> {
        config.validate()?;
        let mapping_index = pins.resolve(gpio)?;
        let mapping = *pins.get(mapping_index).ok_or(SensorError::UnresolvedPin { gpio })?;

        Ok(Self {
            adc,
            delay,
            mapping_index,
            mapping,
            config,
            baseline: None,
        })
    }

    /// Configure the ADC channel, calibrate and store R0.
    ///
    /// Call once, with the sensor in clean air, before reading gases.
    pub fn initialize(&mut self) -> SensorResult<f32> {
        let PinChannelMapping { group, channel, .. } = self.mapping;
        self.adc
            .configure(group, channel, self.config.attenuation)
            .map_err(|_| SensorError::AdcConfig { group, channel })?;
        log_debug!("Configured ADC channel {} for GPIO {}", channel, self.mapping.gpio);

        self.recalibrate()
    }

    /// Clean-air baseline R0 from a fresh window, without storing it
    pub fn calibrate(&mut self) -> SensorResult<f32> {
        let window = self.config.calibration;
        let mean = sampling::sample_resistance(
            &mut self.adc,
            &mut self.delay,
            &self.mapping,
            &self.config,
            &window,
        )?;

        let r0 = mean / self.config.clean_air_factor;
        if !r0.is_finite() || r0 <= 0.0 {
            log_warn!("Calibration on GPIO {} gave unusable R0", self.mapping.gpio);
            return Err(SensorError::InvalidBaseline);
        }
        Ok(r0)
    }

    /// Calibrate again and replace the stored R0.
    ///
    /// The previous baseline is kept if calibration fails.
    pub fn recalibrate(&mut self) -> SensorResult<f32> {
        let r0 = self.calibrate()?;
        self.baseline = Some(r0);
        log_info!("MQ2 on GPIO {} calibrated, R0 = {} kOhm", self.mapping.gpio, r0);
        Ok(r0)
    }

    /// Mean sensor resistance Rs over one reading window (kΩ)
    pub fn read_averaged(&mut self) -> SensorResult<f32> {
        let window = self.config.reading;
        sampling::sample_resistance(
            &mut self.adc,
            &mut self.delay,
            &self.mapping,
            &self.config,
            &window,
        )
    }

    /// Full reading window with per-sample resistances
    pub fn read_window(&mut self) -> SensorResult<SampleWindow> {
        let window = self.config.reading;
        sampling::sample_window(
            &mut self.adc,
            &mut self.delay,
            &self.mapping,
            &self.config,
            &window,
        )
    }

    /// Current Rs/R0 from a fresh window
    pub fn read_ratio(&mut self) -> SensorResult<f32> {
        let r0 = self.baseline.ok_or(SensorError::NotCalibrated)?;
        let rs = self.read_averaged()?;
        Ok(rs / r0)
    }

    /// Concentration estimate for one gas
    pub fn get_percentage(&mut self, gas: GasType) -> SensorResult<f32> {
        let ratio = self.read_ratio()?;
        estimate(gas, ratio)
    }

    /// Concentration estimate for a numeric gas tag.
    ///
    /// Unknown tags fail before any sampling.
    pub fn get_percentage_by_tag(&mut self, tag: u8) -> SensorResult<f32> {
        let gas = GasType::try_from(tag)?;
        self.get_percentage(gas)
    }

    /// Like [`Mq2::get_percentage_by_tag`], flattened to a float.
    ///
    /// Any error, including an unknown tag, yields [`INVALID_READING`].
    pub fn percentage_or_sentinel(&mut self, tag: u8) -> f32 {
        self.get_percentage_by_tag(tag).unwrap_or(INVALID_READING)
    }

    /// Estimates for every gas from a single window
    pub fn read_all(&mut self) -> SensorResult<GasReadings> {
        let ratio = self.read_ratio()?;
        Ok(GasReadings {
            lpg: estimate(GasType::Lpg, ratio)?,
            co: estimate(GasType::Co, ratio)?,
            smoke: estimate(GasType::Smoke, ratio)?,
        })
    }
}

fn estimate(gas: GasType, ratio: f32) -> SensorResult<f32> {
    gas.curve().percentage(ratio).map_err(|err| {
        log_warn!("Ratio {} outside curve domain for {}", ratio, gas.name());
        err
    })
}

impl<A, D> Mq2<A, D> {
    /// Stored R0 in kΩ
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    /// True once R0 is known
    pub fn is_calibrated(&self) -> bool {
        self.baseline.is_some()
    }

    /// Use a known R0 instead of calibrating, e.g. one recorded earlier.
    pub fn set_baseline(&mut self, r0: f32) -> SensorResult<()> {
        if !r0.is_finite() || r0 <= 0.0 {
            return Err(SensorError::InvalidBaseline);
        }
        self.baseline = Some(r0);
        Ok(())
    }

    /// Index of the pin in the board map
    pub fn mapping_index(&self) -> usize {
        self.mapping_index
    }

    /// ADC channel the sensor is read from
    pub fn mapping(&self) -> &PinChannelMapping {
        &self.mapping
    }

    /// Active configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Give back the ADC and delay
    pub fn release(self) -> (A, D) {
        (self.adc, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::CLEAN_AIR_FACTOR,
        mock::{MockAdc, MockDelay, MockSample},
        pins::ChannelGroup,
        resistance::resistance_from_raw,
        traits::Attenuation,
    };

    fn sensor(code: u16) -> Mq2<MockAdc, MockDelay> {
        Mq2::new(36, MockAdc::constant(code), MockDelay::new()).unwrap()
    }

    #[test]
    fn unrouted_pin_fails_construction() {
        let result = Mq2::new(5, MockAdc::constant(1000), MockDelay::new());
        assert!(matches!(result, Err(SensorError::UnresolvedPin { gpio: 5 })));
    }

    #[test]
    fn invalid_config_fails_construction() {
        let config = SensorConfig::default().with_clean_air_factor(0.0);
        let result =
            Mq2::with_config(36, &ESP32_DEVKIT_V1, config, MockAdc::constant(1), MockDelay::new());
        assert!(matches!(result, Err(SensorError::InvalidConfig { .. })));
    }

    #[test]
    fn initialize_configures_resolved_channel() {
        let mut mq2 = Mq2::new(25, MockAdc::constant(1500), MockDelay::new()).unwrap();
        assert_eq!(mq2.mapping_index(), 6);

        mq2.initialize().unwrap();

        let (adc, delay) = mq2.release();
        assert_eq!(adc.configured().len(), 1);
        assert_eq!(adc.configured()[0].group, ChannelGroup::Adc2);
        assert_eq!(adc.configured()[0].channel, 8);
        assert_eq!(adc.configured()[0].attenuation, Attenuation::Db11);
        assert_eq!(delay.total_ms(), 250);
    }

    #[test]
    fn calibration_divides_by_clean_air_factor() {
        let mut mq2 = sensor(1200);
        let r0 = mq2.initialize().unwrap();

        let expected = resistance_from_raw(1200, 1.0, 4095).unwrap() / CLEAN_AIR_FACTOR;
        assert!((r0 - expected).abs() < 1e-5);
        assert_eq!(mq2.baseline(), Some(r0));
    }

    #[test]
    fn reading_before_calibration() {
        let mut mq2 = sensor(1200);
        assert_eq!(mq2.get_percentage(GasType::Lpg), Err(SensorError::NotCalibrated));
        assert_eq!(mq2.read_all(), Err(SensorError::NotCalibrated));
    }

    #[test]
    fn clean_air_ratio_is_the_factor() {
        let mut mq2 = sensor(1200);
        mq2.initialize().unwrap();
        let ratio = mq2.read_ratio().unwrap();
        assert!((ratio - CLEAN_AIR_FACTOR).abs() < 1e-4);
    }

    #[test]
    fn unknown_tag_gives_sentinel() {
        let mut mq2 = sensor(1200);
        mq2.initialize().unwrap();
        assert_eq!(mq2.percentage_or_sentinel(3), -1.0);
        assert_eq!(mq2.get_percentage_by_tag(7), Err(SensorError::InvalidGasType { tag: 7 }));
        assert!(mq2.percentage_or_sentinel(0) >= 0.0);
    }

    #[test]
    fn full_scale_calibration_is_rejected() {
        let mut mq2 = sensor(4095);
        assert_eq!(mq2.initialize(), Err(SensorError::InvalidBaseline));
        assert!(!mq2.is_calibrated());
    }

    #[test]
    fn failed_recalibration_keeps_baseline() {
        let adc = MockAdc::sequence(&[MockSample::Code(1200); 5]).with_fallback(MockSample::Fault);
        let mut mq2 = Mq2::new(36, adc, MockDelay::new()).unwrap();
        let r0 = mq2.initialize().unwrap();

        assert!(mq2.recalibrate().is_err());
        assert_eq!(mq2.baseline(), Some(r0));
    }

    #[test]
    fn configure_failure_is_reported() {
        let adc = MockAdc::constant(1200).failing_configure();
        let mut mq2 = Mq2::new(36, adc, MockDelay::new()).unwrap();
        assert_eq!(
            mq2.initialize(),
            Err(SensorError::AdcConfig { group: ChannelGroup::Adc1, channel: 0 })
        );
    }

    #[test]
    fn manual_baseline() {
        let mut mq2 = sensor(1200);
        assert_eq!(mq2.set_baseline(0.0), Err(SensorError::InvalidBaseline));
        mq2.set_baseline(0.3).unwrap();
        assert!(mq2.is_calibrated());
        assert!(mq2.get_percentage(GasType::Smoke).is_ok());
    }

    #[test]
    fn read_all_matches_single_gas_reads() {
        let mut mq2 = sensor(1200);
        mq2.initialize().unwrap();

        let all = mq2.read_all().unwrap();
        for gas in GasType::ALL {
            let single = mq2.get_percentage(gas).unwrap();
            assert!((all.get(gas) - single).abs() <= single * 1e-5);
        }
    }

    #[test]
    fn short_circuit_reading_is_an_invalid_ratio() {
        let adc = MockAdc::sequence(&[MockSample::Code(1200); 5])
            .with_fallback(MockSample::Code(4095));
        let mut mq2 = Mq2::new(36, adc, MockDelay::new()).unwrap();
        mq2.initialize().unwrap();

        assert_eq!(mq2.get_percentage(GasType::Co), Err(SensorError::InvalidRatio));
        assert_eq!(mq2.percentage_or_sentinel(1), INVALID_READING);
        assert_eq!(mq2.read_all(), Err(SensorError::InvalidRatio));
    }

    #[test]
    fn mapping_follows_the_pin() {
        let mq2 = Mq2::new(39, MockAdc::constant(1), MockDelay::new()).unwrap();
        assert_eq!(mq2.mapping().gpio, 39);
        assert_eq!(mq2.mapping().group, ChannelGroup::Adc1);
        assert_eq!(mq2.mapping().channel, 3);
    }

    #[test]
    fn ten_bit_full_scale() {
        let config = SensorConfig::default().with_adc_max(1023).with_fault_retries(0);
        let build = |code| {
            Mq2::with_config(36, &ESP32_DEVKIT_V1, config, MockAdc::constant(code), MockDelay::new())
                .unwrap()
        };

        let r0 = build(512).initialize().unwrap();
        let expected = resistance_from_raw(512, 1.0, 1023).unwrap() / CLEAN_AIR_FACTOR;
        assert!((r0 - expected).abs() < 1e-5);

        assert_eq!(build(1023).initialize(), Err(SensorError::InvalidBaseline));
        assert_eq!(
            build(1024).initialize(),
            Err(SensorError::RawOutOfRange { raw: 1024, max: 1023 })
        );
    }
}
