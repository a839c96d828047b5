//! GPIO to ADC Channel Resolution
//!
//! Boards route a fixed subset of GPIOs to the SAR ADCs. The driver is
//! constructed with a GPIO number and needs the converter unit and channel
//! behind it, so each board carries a static table:
//!
//! ```text
//! GPIO 36 ──→ ADC1 channel 0
//! GPIO 25 ──→ ADC2 channel 8
//! ```
//!
//! Resolution is a linear scan; tables are small (15 entries on the ESP32
//! DevKit V1) and never change at runtime.

use crate::errors::{SensorError, SensorResult};

/// ADC converter unit a channel belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelGroup {
    /// First converter unit, always available
    Adc1,
    /// Second converter unit, shared with the radio on ESP32
    Adc2,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelGroup {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Adc1 => defmt::write!(fmt, "ADC1"),
            Self::Adc2 => defmt::write!(fmt, "ADC2"),
        }
    }
}

/// One row of a board pin map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinChannelMapping {
    /// GPIO number on the board
    pub gpio: u8,
    /// Converter unit
    pub group: ChannelGroup,
    /// Channel index within the unit
    pub channel: u8,
}

impl PinChannelMapping {
    /// Create a table entry
    pub const fn new(gpio: u8, group: ChannelGroup, channel: u8) -> Self {
        Self { gpio, group, channel }
    }
}

/// ESP32 DevKit V1 ADC pins
const ESP32_DEVKIT_V1_PINS: [PinChannelMapping; 15] = [
    PinChannelMapping::new(36, ChannelGroup::Adc1, 0), //  0
    PinChannelMapping::new(39, ChannelGroup::Adc1, 3), //  1
    PinChannelMapping::new(34, ChannelGroup::Adc1, 6), //  2
    PinChannelMapping::new(35, ChannelGroup::Adc1, 7), //  3
    PinChannelMapping::new(32, ChannelGroup::Adc1, 4), //  4
    PinChannelMapping::new(33, ChannelGroup::Adc1, 5), //  5
    PinChannelMapping::new(25, ChannelGroup::Adc2, 8), //  6
    PinChannelMapping::new(26, ChannelGroup::Adc2, 9), //  7
    PinChannelMapping::new(27, ChannelGroup::Adc2, 7), //  8
    PinChannelMapping::new(14, ChannelGroup::Adc2, 6), //  9
    PinChannelMapping::new(12, ChannelGroup::Adc2, 5), // 10
    PinChannelMapping::new(13, ChannelGroup::Adc2, 4), // 11
    PinChannelMapping::new(15, ChannelGroup::Adc2, 3), // 12
    PinChannelMapping::new(2, ChannelGroup::Adc2, 2),  // 13
    PinChannelMapping::new(4, ChannelGroup::Adc2, 0),  // 14
];

/// Pin map of the ESP32 DevKit V1 board
pub const ESP32_DEVKIT_V1: PinMap = PinMap::new(&ESP32_DEVKIT_V1_PINS);

/// Immutable GPIO to ADC channel table
#[derive(Debug, Clone, Copy)]
pub struct PinMap {
    entries: &'static [PinChannelMapping],
}

impl PinMap {
    /// Wrap a static table
    pub const fn new(entries: &'static [PinChannelMapping]) -> Self {
        Self { entries }
    }

    /// Find the table index for a GPIO
    pub fn resolve(&self, gpio: u8) -> SensorResult<usize> {
        self.entries
            .iter()
            .position(|entry| entry.gpio == gpio)
            .ok_or(SensorError::UnresolvedPin { gpio })
    }

    /// Entry at a resolved index
    pub fn get(&self, index: usize) -> Option<&'static PinChannelMapping> {
        self.entries.get(index)
    }

    /// Resolve a GPIO straight to its entry
    pub fn lookup(&self, gpio: u8) -> SensorResult<&'static PinChannelMapping> {
        let index = self.resolve(gpio)?;
        self.get(index).ok_or(SensorError::UnresolvedPin { gpio })
    }

    /// All entries in table order
    pub fn entries(&self) -> &'static [PinChannelMapping] {
        self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that no GPIO appears twice.
    ///
    /// `const` so board tables can be checked at compile time.
    pub const fn has_unique_pins(&self) -> bool {
        let mut i = 0;
        while i < self.entries.len() {
            let mut j = i + 1;
            while j < self.entries.len() {
                if self.entries[i].gpio == self.entries[j].gpio {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

const _: () = assert!(ESP32_DEVKIT_V1.has_unique_pins());
