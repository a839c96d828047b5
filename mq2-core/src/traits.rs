//! Hardware Abstraction for the ADC Front End
//!
//! The driver never touches registers. Boards supply an [`AdcReader`] that
//! configures a channel and performs single conversions, plus any
//! `embedded_hal::delay::DelayNs` for the pauses between samples.
//!
//! ## Non-blocking reads
//!
//! `read_raw` follows the `nb` convention so HALs with a conversion-ready
//! flag can be adapted directly:
//!
//! - `Ok(code)` - conversion finished
//! - `Err(nb::Error::WouldBlock)` - conversion still running, poll again
//! - `Err(nb::Error::Other(e))` - the converter reported a fault
//!
//! A fault is out-of-band. Implementations must not report failures as a
//! code of 0, which the driver treats as a disconnected sensor.
//!
//! ## Example Implementation
//!
//! ```rust
//! use mq2_core::{AdcReader, Attenuation, ChannelGroup};
//!
//! struct OneShot {
//!     // ... HAL handles for ADC1 and ADC2
//! }
//!
//! impl AdcReader for OneShot {
//!     type Error = ();
//!
//!     fn configure(
//!         &mut self,
//!         group: ChannelGroup,
//!         channel: u8,
//!         attenuation: Attenuation,
//!     ) -> Result<(), Self::Error> {
//!         // Set 12-bit width and the channel attenuation
//!         Ok(())
//!     }
//!
//!     fn read_raw(&mut self, group: ChannelGroup, channel: u8) -> nb::Result<u16, Self::Error> {
//!         // ADC2 fails while the radio holds it
//!         Ok(2048)
//!     }
//! }
//! ```

use crate::pins::ChannelGroup;

/// Input attenuation of an ADC channel
///
/// Sets the measurable input range; the MQ2 divider swings close to the
/// supply rail, so the widest range is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attenuation {
    /// 0 dB, about 0-1.1 V
    Db0,
    /// 2.5 dB, about 0-1.5 V
    Db2_5,
    /// 6 dB, about 0-2.2 V
    Db6,
    /// 11 dB, about 0-3.9 V
    #[default]
    Db11,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Attenuation {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Db0 => defmt::write!(fmt, "0dB"),
            Self::Db2_5 => defmt::write!(fmt, "2.5dB"),
            Self::Db6 => defmt::write!(fmt, "6dB"),
            Self::Db11 => defmt::write!(fmt, "11dB"),
        }
    }
}

/// Raw access to the board's SAR converters
pub trait AdcReader {
    /// Driver-specific error
    type Error;

    /// Configure a channel for one-shot conversions.
    ///
    /// The full-scale code the channel produces must equal
    /// `SensorConfig::adc_max` (4095 for the default 12-bit width).
    /// Called once per driver, from `Mq2::initialize`.
    fn configure(
        &mut self,
        group: ChannelGroup,
        channel: u8,
        attenuation: Attenuation,
    ) -> Result<(), Self::Error>;

    /// Start or poll a single conversion on a channel
    fn read_raw(&mut self, group: ChannelGroup, channel: u8) -> nb::Result<u16, Self::Error>;
}

impl<T: AdcReader + ?Sized> AdcReader for &mut T {
    type Error = T::Error;

    fn configure(
        &mut self,
        group: ChannelGroup,
        channel: u8,
        attenuation: Attenuation,
    ) -> Result<(), Self::Error> {
        (**self).configure(group, channel, attenuation)
    }

    fn read_raw(&mut self, group: ChannelGroup, channel: u8) -> nb::Result<u16, Self::Error> {
        (**self).read_raw(group, channel)
    }
}
