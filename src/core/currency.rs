use crate::core::table::CURRENCY_RULES;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// ISO 4217-style currency code: exactly three uppercase ASCII letters.
///
/// A valid code is not necessarily a recognized one. Codes missing from
/// the rule table still format and parse, using [`DEFAULT_RULE`].
///
/// # Examples
///
/// ```
/// use currency_format::core::currency::CurrencyCode;
///
/// let usd = CurrencyCode::parse("USD").unwrap();
/// assert_eq!(usd.as_str(), "USD");
/// assert!(CurrencyCode::parse("usd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Validate and wrap a currency code.
    pub fn parse(code: impl Into<String>) -> Result<Self, CurrencyError> {
        let code = code.into();
        if !is_valid_currency_code(&code) {
            return Err(CurrencyError::InvalidCodeFormat(code));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The formatting rule for this code.
    pub fn rule(&self) -> &'static CurrencyRule {
        lookup(&self.0)
    }

    /// Whether the code has its own entry in the rule table.
    pub fn is_recognized(&self) -> bool {
        find(&self.0).is_some()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// Errors arising from currency code lookups.
///
/// Only malformed codes fail hard. Bad amounts and unparseable display
/// strings are reported through fallback values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    #[error("invalid currency code: {0:?} (expected three uppercase letters)")]
    InvalidCodeFormat(String),
}

/// Display rules for one currency.
///
/// `pattern` places the symbol (`%s`) and the rendered value (`%v`),
/// e.g. `"%s %v"` renders `US$ 1,234.56` and `"%v%s"` renders `10.500₫`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyRule {
    /// Digits after the decimal separator; also the minor/major exponent.
    pub decimal_places: u32,
    pub thousand_symbol: &'static str,
    pub decimal_symbol: &'static str,
    pub pattern: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
}

/// Rule applied to valid codes that have no entry in the table.
pub const DEFAULT_RULE: CurrencyRule = CurrencyRule {
    decimal_places: 0,
    thousand_symbol: ".",
    decimal_symbol: ",",
    pattern: "%s %v",
    symbol: None,
};

/// Returns true when `code` is exactly three uppercase ASCII letters.
pub fn is_valid_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Look up the formatting rule for a currency code.
///
/// Malformed codes fail with [`CurrencyError::InvalidCodeFormat`]. Valid
/// codes without a table entry get [`DEFAULT_RULE`].
///
/// # Examples
///
/// ```
/// use currency_format::core::currency::{rule, DEFAULT_RULE};
///
/// assert_eq!(rule("USD").unwrap().symbol, Some("US$"));
/// assert_eq!(rule("XYZ").unwrap(), &DEFAULT_RULE);
/// assert!(rule("12A").is_err());
/// ```
pub fn rule(code: &str) -> Result<&'static CurrencyRule, CurrencyError> {
    if !is_valid_currency_code(code) {
        return Err(CurrencyError::InvalidCodeFormat(code.to_string()));
    }
    Ok(lookup(code))
}

/// Whether `code` is valid and has its own table entry.
pub fn is_recognized(code: &str) -> bool {
    is_valid_currency_code(code) && find(code).is_some()
}

/// All codes in the rule table, in ascending order.
pub fn recognized_codes() -> impl Iterator<Item = &'static str> {
    CURRENCY_RULES.iter().map(|(code, _)| *code)
}

fn find(code: &str) -> Option<&'static CurrencyRule> {
    CURRENCY_RULES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| &CURRENCY_RULES[i].1)
}

fn lookup(code: &str) -> &'static CurrencyRule {
    find(code).unwrap_or_else(|| {
        log::debug!("no rule for currency {code}, using default rule");
        &DEFAULT_RULE
    })
}
