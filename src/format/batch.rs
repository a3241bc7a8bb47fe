//! Formatting and parsing of loosely typed JSON values.
//!
//! Items of the wrong JSON type get the caller's fallback instead of
//! failing the batch. A malformed currency code still fails the whole call.

use crate::core::currency::{rule, CurrencyError};
use crate::format::currency::{format_currency, FormatOptions};
use crate::format::parse::{unformat_currency, ParseOptions};
use serde_json::Value;

/// Format every value; non-numeric items yield `options.fallback`.
///
/// # Examples
///
/// ```
/// use currency_format::format::batch::format_values;
/// use currency_format::format::currency::FormatOptions;
/// use serde_json::json;
///
/// let values = [json!(10500), json!("oops"), json!(null)];
/// let out = format_values("IDR", &values, &FormatOptions::new().with_fallback("-")).unwrap();
/// assert_eq!(out, vec![Some("IDR 10.500".to_string()), Some("-".into()), Some("-".into())]);
/// ```
pub fn format_values(
    code: &str,
    values: &[Value],
    options: &FormatOptions,
) -> Result<Vec<Option<String>>, CurrencyError> {
    rule(code)?;
    values
        .iter()
        .map(|value| match value.as_f64() {
            Some(number) => format_currency(code, number, options),
            None => {
                log::trace!("skipping non-numeric batch item {value}");
                Ok(options.fallback.clone())
            }
        })
        .collect()
}

/// Parse every value; non-string items yield `options.fallback`.
pub fn unformat_values(
    code: &str,
    values: &[Value],
    options: &ParseOptions,
) -> Result<Vec<f64>, CurrencyError> {
    rule(code)?;
    values
        .iter()
        .map(|value| match value.as_str() {
            Some(text) => unformat_currency(code, text, options),
            None => {
                log::trace!("skipping non-string batch item {value}");
                Ok(options.fallback)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::units::Unit;
    use serde_json::json;

    #[test]
    fn test_format_mixed_values() {
        let values = vec![json!(123456), json!(-5), json!(true), json!({"amount": 1})];
        let out = format_values("SGD", &values, &FormatOptions::default()).unwrap();
        assert_eq!(
            out,
            vec![
                Some("SGD 1,234.56".to_string()),
                Some("-SGD 0.05".to_string()),
                None,
                None
            ]
        );
    }

    #[test]
    fn test_format_major_floats() {
        let values = vec![json!(99.1), json!(0)];
        let options = FormatOptions::new().with_input_unit(Unit::Major);
        let out = format_values("USD", &values, &options).unwrap();
        assert_eq!(out[0].as_deref(), Some("USD 99.10"));
        assert_eq!(out[1].as_deref(), Some("USD 0.00"));
    }

    #[test]
    fn test_unformat_mixed_values() {
        let values = vec![json!("RM 33.99"), json!(33.99), json!("1.2.3")];
        let options = ParseOptions::new().with_fallback(-1.0);
        let out = unformat_values("MYR", &values, &options).unwrap();
        assert_eq!(out, vec![3399.0, -1.0, -1.0]);
    }

    #[test]
    fn test_invalid_code_fails_empty_batch() {
        assert!(format_values("usd", &[], &FormatOptions::default()).is_err());
        assert!(unformat_values("1AB", &[], &ParseOptions::default()).is_err());
    }
}
