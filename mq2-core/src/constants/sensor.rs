//! MQ2 Circuit and Datasheet Constants
//!
//! The sensing element and the load resistor form a voltage divider whose
//! midpoint feeds the ADC:
//!
//! ```text
//!  Vc ──[ Rs ]──┬──[ RL ]── GND
//!               │
//!              ADC
//!
//!  Rs = RL × (ADC_MAX - raw) / raw
//! ```

// ===== DIVIDER CIRCUIT =====

/// Load resistance on the breakout board (kΩ).
///
/// Common MQ2 modules fit a 1 kΩ load resistor. Resistances computed by the
/// driver are in the same unit as this value.
pub const LOAD_RESISTANCE_KOHM: f32 = 1.0;

// ===== CONVERTER =====

/// Full-scale code of a 12-bit converter.
///
/// Source: ESP32 technical reference (SAR ADC, 12-bit width)
pub const ADC_MAX_12BIT: u16 = 4095;

// ===== DATASHEET =====

/// Ratio of sensor resistance in clean air to R0.
///
/// Read off the clean-air line of the MQ2 sensitivity chart. Dividing the
/// measured clean-air resistance by this factor gives the R0 the curves are
/// normalized against.
///
/// Source: Hanwei MQ-2 datasheet
pub const CLEAN_AIR_FACTOR: f32 = 9.83;
