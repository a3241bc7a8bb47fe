use crate::core::currency::{rule, CurrencyError, CurrencyRule};
use crate::numeric::rounding::{pow10, safe_round};
use crate::numeric::units::{minor_from_major, Unit};
use serde::{Deserialize, Serialize};

/// Per-call options for [`unformat_currency`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Unit of the returned amount.
    pub output_unit: Unit,
    /// Returned when the text cannot be read as an amount.
    pub fallback: f64,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            output_unit: Unit::Minor,
            fallback: f64::NAN,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_unit(mut self, output_unit: Unit) -> Self {
        self.output_unit = output_unit;
        self
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Read an amount back out of a display string.
///
/// Symbols, codes and whitespace are ignored. The text must use the
/// currency's own separators: a decimal separator appearing more than once,
/// or a missing integer part, yields `options.fallback`.
///
/// # Examples
///
/// ```
/// use currency_format::format::parse::{unformat_currency, ParseOptions};
/// use currency_format::numeric::units::Unit;
///
/// assert_eq!(unformat_currency("IDR", "Rp 10.500", &ParseOptions::default()).unwrap(), 10500.0);
///
/// let major = ParseOptions::new().with_output_unit(Unit::Major);
/// assert_eq!(unformat_currency("MYR", "RM 33.99", &major).unwrap(), 33.99);
///
/// assert!(unformat_currency("USD", "Invalid Format", &ParseOptions::default())
///     .unwrap()
///     .is_nan());
/// ```
pub fn unformat_currency(
    code: &str,
    text: &str,
    options: &ParseOptions,
) -> Result<f64, CurrencyError> {
    let rule = rule(code)?;
    let Some(major) = parse_major(text, rule) else {
        log::trace!("cannot read {text:?} as a {code} amount");
        return Ok(options.fallback);
    };

    Ok(match options.output_unit {
        Unit::Minor => minor_from_major(rule, major),
        Unit::Major => safe_round(major, rule.decimal_places),
    })
}

fn parse_major(text: &str, rule: &CurrencyRule) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let mut parts = cleaned.split(rule.decimal_symbol);
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return None;
    }

    let integer = integer.replace(rule.thousand_symbol, "");
    if integer.is_empty() {
        return None;
    }

    let whole: f64 = integer.parse().ok()?;
    if fraction.is_empty() {
        return Some(whole);
    }
    if fraction.contains('-') {
        return None;
    }

    let scale = pow10(u32::try_from(fraction.len()).ok()?);
    let fraction = fraction.parse::<f64>().ok()? / scale;
    // "-12.50" is -12 - 0.50, not -12 + 0.50.
    Some(if integer.starts_with('-') {
        whole - fraction
    } else {
        whole + fraction
    })
}
