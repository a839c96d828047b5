//! Scripted hardware for host tests and demos
//!
//! [`MockAdc`] replays a script of conversion outcomes and falls back to a
//! fixed outcome once the script runs out. [`MockDelay`] records how long the
//! driver asked to wait instead of sleeping.
//!
//! ```rust
//! use mq2_core::mock::{MockAdc, MockDelay, MockSample};
//!
//! // Two faults, then a steady clean-air code
//! let adc = MockAdc::sequence(&[MockSample::Fault, MockSample::Fault])
//!     .with_fallback(MockSample::Code(1200));
//! let delay = MockDelay::new();
//! ```

use embedded_hal::delay::DelayNs;
use heapless::{Deque, Vec};

use crate::{pins::ChannelGroup, traits::{AdcReader, Attenuation}};

/// Maximum scripted outcomes
pub const MAX_SCRIPT: usize = 64;

/// One scripted conversion outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSample {
    /// Conversion finished with this code
    Code(u16),
    /// Converter reported a fault
    Fault,
    /// Conversion still running (`WouldBlock`)
    Busy,
}

/// Error reported by [`MockAdc`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAdcError;

/// A configure call seen by [`MockAdc`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigureCall {
    /// Converter unit
    pub group: ChannelGroup,
    /// Channel index
    pub channel: u8,
    /// Requested attenuation
    pub attenuation: Attenuation,
}

/// ADC that replays scripted outcomes
#[derive(Debug, Clone)]
pub struct MockAdc {
    script: Deque<MockSample, MAX_SCRIPT>,
    fallback: MockSample,
    reads: usize,
    configured: Vec<ConfigureCall, 4>,
    fail_configure: bool,
}

impl MockAdc {
    /// Always returns `code`
    pub fn constant(code: u16) -> Self {
        Self::constant_sample(MockSample::Code(code))
    }

    /// Always returns `sample`
    pub fn constant_sample(sample: MockSample) -> Self {
        Self {
            script: Deque::new(),
            fallback: sample,
            reads: 0,
            configured: Vec::new(),
            fail_configure: false,
        }
    }

    /// Replays `samples` in order, then faults.
    ///
    /// Entries past [`MAX_SCRIPT`] are dropped.
    pub fn sequence(samples: &[MockSample]) -> Self {
        let mut adc = Self::constant_sample(MockSample::Fault);
        for sample in samples {
            if adc.script.push_back(*sample).is_err() {
                break;
            }
        }
        adc
    }

    /// Outcome once the script is exhausted
    pub fn with_fallback(mut self, sample: MockSample) -> Self {
        self.fallback = sample;
        self
    }

    /// Make `configure` fail
    pub fn failing_configure(mut self) -> Self {
        self.fail_configure = true;
        self
    }

    /// Append outcomes to the script
    pub fn push(&mut self, sample: MockSample) -> bool {
        self.script.push_back(sample).is_ok()
    }

    /// Finished conversions and faults served so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Configure calls in order
    pub fn configured(&self) -> &[ConfigureCall] {
        &self.configured
    }
}

impl AdcReader for MockAdc {
    type Error = MockAdcError;

    fn configure(
        &mut self,
        group: ChannelGroup,
        channel: u8,
        attenuation: Attenuation,
    ) -> Result<(), Self::Error> {
        if self.fail_configure {
            return Err(MockAdcError);
        }
        // Only the first few calls are kept
        let _ = self.configured.push(ConfigureCall { group, channel, attenuation });
        Ok(())
    }

    fn read_raw(&mut self, _group: ChannelGroup, _channel: u8) -> nb::Result<u16, Self::Error> {
        let sample = self.script.pop_front().unwrap_or(self.fallback);
        match sample {
            MockSample::Code(code) => {
                self.reads += 1;
                Ok(code)
            }
            MockSample::Fault => {
                self.reads += 1;
                Err(nb::Error::Other(MockAdcError))
            }
            MockSample::Busy => Err(nb::Error::WouldBlock),
        }
    }
}

/// Delay that only records the requested time
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    /// Fresh delay with nothing recorded
    pub fn new() -> Self {
        Self { total_ns: 0 }
    }

    /// Total requested delay in milliseconds
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }

    /// Forget recorded time
    pub fn reset(&mut self) {
        self.total_ns = 0;
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
