// 🌡️ Temperature Converter - C / F / K through a Kelvin pivot
//
// Every conversion is to_kelvin followed by from_kelvin.

use crate::error::{LabError, LabResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_PRECISION: u32 = 2;

const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// 2^52: every f64 at or above this magnitude is already an integer
const MAX_EXACT_FRACTION: f64 = 4_503_599_627_370_496.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "cel" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fah" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(LabError::InvalidUnit(
                "Unsupported unit. Use one of: C/Celsius, F/Fahrenheit, K/Kelvin".to_string(),
            )),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// PIVOT TRANSFORMS
// ============================================================================

/// Value in `unit` expressed in Kelvin. Fails below absolute zero.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> LabResult<f64> {
    let kelvin = match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + ZERO_CELSIUS_IN_KELVIN,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + ZERO_CELSIUS_IN_KELVIN,
    };

    if kelvin < 0.0 {
        return Err(LabError::InvalidValue("Kelvin cannot be negative.".to_string()));
    }
    Ok(kelvin)
}

/// Kelvin value expressed in `unit`
pub fn from_kelvin(kelvin: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => kelvin,
        TemperatureUnit::Celsius => kelvin - ZERO_CELSIUS_IN_KELVIN,
        TemperatureUnit::Fahrenheit => (kelvin - ZERO_CELSIUS_IN_KELVIN) * 9.0 / 5.0 + 32.0,
    }
}

// Exact halves go to the even digit. When the scaled value has no fractional
// part left (or overflows), the value already fits and is returned as is.
fn round_to(value: f64, digits: u32) -> f64 {
    let Ok(exponent) = i32::try_from(digits) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() || scaled.abs() >= MAX_EXACT_FRACTION {
        return value;
    }
    scaled.round_ties_even() / factor
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Convert `value` from one unit to another, rounding to `precision` decimal
/// places when given (pass `Some(DEFAULT_PRECISION)` for the usual 2).
pub fn convert(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
    precision: Option<u32>,
) -> LabResult<f64> {
    if value.is_nan() {
        return Err(LabError::InvalidValue("Temperature must be a number".to_string()));
    }

    let kelvin = to_kelvin(value, from)?;
    let out = from_kelvin(kelvin, to);
    let out = precision.map_or(out, |digits| round_to(out, digits));

    debug!(value, from = from.symbol(), to = to.symbol(), out, "converted temperature");
    Ok(out)
}

/// Convert every value; the first invalid one fails the whole batch
pub fn convert_many(
    values: &[f64],
    from: TemperatureUnit,
    to: TemperatureUnit,
    precision: Option<u32>,
) -> LabResult<Vec<f64>> {
    values
        .iter()
        .map(|&v| convert(v, from, to, precision))
        .collect()
}
