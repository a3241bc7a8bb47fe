use crate::core::currency::{rule, CurrencyError, DEFAULT_RULE};
use crate::format::number::format_number;
use crate::numeric::rounding::safe_round;
use crate::numeric::units::{major_from_minor, Unit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When to prefix the amount with a sign. Zero never gets one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignDisplay {
    /// `+` for positive amounts, `-` for negative ones.
    Always,
    Never,
    /// `-` for negative amounts only.
    #[default]
    Auto,
}

/// How the currency is identified in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyDisplay {
    /// The ISO code, e.g. `IDR 10.500`.
    #[default]
    Code,
    /// The rule's symbol, e.g. `Rp10.500`. Falls back to the code when the
    /// currency has no symbol.
    Symbol,
    /// The amount alone.
    None,
}

impl FromStr for SignDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(SignDisplay::Always),
            "never" => Ok(SignDisplay::Never),
            "auto" => Ok(SignDisplay::Auto),
            _ => Err(format!(
                "unknown sign display '{s}', expected 'always', 'never' or 'auto'"
            )),
        }
    }
}

impl FromStr for CurrencyDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(CurrencyDisplay::Code),
            "symbol" => Ok(CurrencyDisplay::Symbol),
            "none" => Ok(CurrencyDisplay::None),
            _ => Err(format!(
                "unknown currency display '{s}', expected 'code', 'symbol' or 'none'"
            )),
        }
    }
}

impl fmt::Display for CurrencyDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyDisplay::Code => write!(f, "code"),
            CurrencyDisplay::Symbol => write!(f, "symbol"),
            CurrencyDisplay::None => write!(f, "none"),
        }
    }
}

/// Per-call options for [`format_currency`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub sign_display: SignDisplay,
    pub currency_display: CurrencyDisplay,
    /// Unit of the value passed in.
    pub input_unit: Unit,
    /// Returned in place of a formatted string when the value is not finite
    /// or overflows during rounding.
    pub fallback: Option<String>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sign_display(mut self, sign_display: SignDisplay) -> Self {
        self.sign_display = sign_display;
        self
    }

    pub fn with_currency_display(mut self, currency_display: CurrencyDisplay) -> Self {
        self.currency_display = currency_display;
        self
    }

    pub fn with_input_unit(mut self, input_unit: Unit) -> Self {
        self.input_unit = input_unit;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Format an amount for display.
///
/// Returns `Ok(options.fallback)` when `value` is NaN, infinite or too large
/// to render at the currency's decimal places, and an error only when `code`
/// is malformed.
///
/// # Examples
///
/// ```
/// use currency_format::format::currency::{format_currency, CurrencyDisplay, FormatOptions};
/// use currency_format::numeric::units::Unit;
///
/// let idr = format_currency("IDR", 10500.0, &FormatOptions::default()).unwrap();
/// assert_eq!(idr.as_deref(), Some("IDR 10.500"));
///
/// let options = FormatOptions::new()
///     .with_currency_display(CurrencyDisplay::Symbol)
///     .with_input_unit(Unit::Major);
/// let myr = format_currency("MYR", -99.1, &options).unwrap();
/// assert_eq!(myr.as_deref(), Some("-RM 99.10"));
/// ```
pub fn format_currency(
    code: &str,
    value: f64,
    options: &FormatOptions,
) -> Result<Option<String>, CurrencyError> {
    if !value.is_finite() {
        log::trace!("cannot format non-finite value {value} as {code}");
        return Ok(options.fallback.clone());
    }

    let rule = rule(code)?;
    let amount = match options.input_unit {
        Unit::Minor => major_from_minor(rule, value),
        Unit::Major => value,
    };
    // Scaling by 10^places can overflow for amounts near f64::MAX.
    if !safe_round(amount.abs(), rule.decimal_places).is_finite() {
        log::trace!("{code} amount {value} overflows at {} places", rule.decimal_places);
        return Ok(options.fallback.clone());
    }

    let sign = match options.sign_display {
        SignDisplay::Never => "",
        _ if amount < 0.0 => "-",
        SignDisplay::Always if amount > 0.0 => "+",
        _ => "",
    };

    let code_upper;
    let (symbol, pattern) = match (options.currency_display, rule.symbol) {
        (CurrencyDisplay::None, _) => ("", rule.pattern),
        (CurrencyDisplay::Symbol, Some(symbol)) => (symbol, rule.pattern),
        // A code-length token always gets the spaced default pattern.
        _ => {
            code_upper = code.to_uppercase();
            (code_upper.as_str(), DEFAULT_RULE.pattern)
        }
    };

    let digits = format_number(amount.abs(), rule);
    let mut result = format!(
        "{sign}{}",
        pattern.replacen("%s", symbol, 1).replacen("%v", &digits, 1)
    );
    if options.currency_display == CurrencyDisplay::None {
        result = result.replacen(' ', "", 1);
    }

    Ok(Some(result.trim().to_string()))
}
