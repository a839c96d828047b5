//! Datasheet Sensitivity Curves
//!
//! ## Model
//!
//! The MQ2 sensitivity chart plots Rs/R0 against concentration on log-log
//! axes, where each gas is close to a straight line. A line is stored as a
//! point `(x0, y0)` on it plus its slope, and inverting it turns a measured
//! ratio straight into a concentration:
//!
//! ```text
//! concentration = 10 ^ ((ln(Rs/R0) - y0) / slope + x0)
//! ```
//!
//! All built-in slopes are negative: a higher resistance ratio means less
//! gas, so the estimate falls monotonically as the ratio grows.
//!
//! ## Domain
//!
//! The logarithm is only defined for positive ratios. Zero, negative or
//! non-finite ratios, and ratios so small the estimate overflows, are
//! reported as [`SensorError::InvalidRatio`].

use libm::{expf, log10f, logf, powf};

use crate::errors::{SensorError, SensorResult};

/// Gas species the MQ2 curves cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GasType {
    /// Liquefied petroleum gas
    Lpg,
    /// Carbon monoxide
    Co,
    /// Smoke
    Smoke,
}

impl GasType {
    /// All gas types in tag order
    pub const ALL: [GasType; 3] = [GasType::Lpg, GasType::Co, GasType::Smoke];

    /// Curve fitted for this gas
    pub const fn curve(self) -> GasCurve {
        match self {
            Self::Lpg => LPG_CURVE,
            Self::Co => CO_CURVE,
            Self::Smoke => SMOKE_CURVE,
        }
    }

    /// Numeric tag (0 = LPG, 1 = CO, 2 = smoke)
    pub const fn tag(self) -> u8 {
        match self {
            Self::Lpg => 0,
            Self::Co => 1,
            Self::Smoke => 2,
        }
    }

    /// Short display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lpg => "LPG",
            Self::Co => "CO",
            Self::Smoke => "SMOKE",
        }
    }
}

impl TryFrom<u8> for GasType {
    type Error = SensorError;

    fn try_from(tag: u8) -> SensorResult<Self> {
        match tag {
            0 => Ok(Self::Lpg),
            1 => Ok(Self::Co),
            2 => Ok(Self::Smoke),
            _ => Err(SensorError::InvalidGasType { tag }),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GasType {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

/// Line in log-log space fitted from the datasheet chart
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasCurve {
    /// log10 of the concentration at the reference point
    pub x0: f32,
    /// Log of Rs/R0 at the reference point
    pub y0: f32,
    /// Slope of the line
    pub slope: f32,
}

/// LPG: (200, 1.6) → (10000, 0.26)
pub const LPG_CURVE: GasCurve = GasCurve::new(2.3, 0.21, -0.47);

/// CO: (200, 5.2) → (10000, 1.4)
pub const CO_CURVE: GasCurve = GasCurve::new(2.3, 0.72, -0.34);

/// Smoke: (200, 3.4) → (10000, 0.6)
pub const SMOKE_CURVE: GasCurve = GasCurve::new(2.3, 0.53, -0.44);

impl GasCurve {
    /// Curve through `(x0, y0)` with the given slope
    pub const fn new(x0: f32, y0: f32, slope: f32) -> Self {
        Self { x0, y0, slope }
    }

    /// Concentration estimate for a resistance ratio Rs/R0
    pub fn percentage(&self, ratio: f32) -> SensorResult<f32> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(SensorError::InvalidRatio);
        }

        let exponent = (logf(ratio) - self.y0) / self.slope + self.x0;
        let value = powf(10.0, exponent);

        if !value.is_finite() {
            return Err(SensorError::InvalidRatio);
        }
        Ok(value)
    }

    /// Resistance ratio at which this curve reads `percentage`.
    ///
    /// Inverse of [`GasCurve::percentage`]; handy for alarm thresholds.
    pub fn ratio_for(&self, percentage: f32) -> SensorResult<f32> {
        if !percentage.is_finite() || percentage <= 0.0 {
            return Err(SensorError::InvalidValue);
        }
        Ok(expf(self.y0 + self.slope * (log10f(percentage) - self.x0)))
    }
}
