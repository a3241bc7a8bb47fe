//! Conversion between minor units (storage, e.g. cents) and major units
//! (display, e.g. dollars).
//!
//! Non-finite inputs yield `NaN` rather than an error; only a malformed
//! currency code fails.

use crate::core::currency::{rule, CurrencyError, CurrencyRule};
use crate::numeric::rounding::{pow10, safe_round};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which denomination an amount is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Smallest denomination, always a whole number (e.g. cents).
    #[default]
    Minor,
    /// Human-facing denomination (e.g. dollars).
    Major,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Minor => write!(f, "minor"),
            Unit::Major => write!(f, "major"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minor" => Ok(Unit::Minor),
            "major" => Ok(Unit::Major),
            _ => Err(format!("unknown unit '{s}', expected 'minor' or 'major'")),
        }
    }
}

/// Convert a major-unit amount to minor units.
///
/// # Examples
///
/// ```
/// use currency_format::numeric::units::to_minor_unit;
///
/// assert_eq!(to_minor_unit("MYR", 99.1).unwrap(), 9910.0);
/// assert_eq!(to_minor_unit("IDR", 10500.0).unwrap(), 10500.0);
/// assert!(to_minor_unit("MYR", f64::NAN).unwrap().is_nan());
/// ```
pub fn to_minor_unit(code: &str, value: f64) -> Result<f64, CurrencyError> {
    Ok(minor_from_major(rule(code)?, value))
}

/// Convert a minor-unit amount to major units.
///
/// ```
/// use currency_format::numeric::units::to_major_unit;
///
/// assert_eq!(to_major_unit("MYR", 9910.0).unwrap(), 99.1);
/// assert_eq!(to_major_unit("BHD", 1234.0).unwrap(), 1.234);
/// ```
pub fn to_major_unit(code: &str, value: f64) -> Result<f64, CurrencyError> {
    Ok(major_from_minor(rule(code)?, value))
}

/// Convert `value` from one unit to another. Same-unit conversion returns
/// the value unchanged.
pub fn convert(code: &str, value: f64, from: Unit, to: Unit) -> Result<f64, CurrencyError> {
    let rule = rule(code)?;
    Ok(match (from, to) {
        (Unit::Major, Unit::Minor) => minor_from_major(rule, value),
        (Unit::Minor, Unit::Major) => major_from_minor(rule, value),
        _ => value,
    })
}

pub(crate) fn minor_from_major(rule: &CurrencyRule, value: f64) -> f64 {
    if !value.is_finite() {
        log::trace!("cannot convert non-finite value {value} to minor units");
        return f64::NAN;
    }
    if rule.decimal_places == 0 {
        return safe_round(value, 0);
    }
    safe_round(value * pow10(rule.decimal_places), 0)
}

pub(crate) fn major_from_minor(rule: &CurrencyRule, value: f64) -> f64 {
    if !value.is_finite() {
        log::trace!("cannot convert non-finite value {value} to major units");
        return f64::NAN;
    }
    if rule.decimal_places == 0 {
        return safe_round(value, 0);
    }
    safe_round(value / pow10(rule.decimal_places), rule.decimal_places)
}
