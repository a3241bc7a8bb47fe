use crate::core::currency::CurrencyRule;
use crate::numeric::rounding::to_fixed;

/// Render a non-negative amount with the rule's separators.
///
/// The integer part is grouped in threes from the right. When the rule has
/// no decimal places the decimal separator is left out entirely.
///
/// # Examples
///
/// ```
/// use currency_format::core::currency::rule;
/// use currency_format::format::number::format_number;
///
/// assert_eq!(format_number(1234567.891, rule("USD").unwrap()), "1,234,567.89");
/// assert_eq!(format_number(10500.0, rule("IDR").unwrap()), "10.500");
/// ```
pub fn format_number(value: f64, rule: &CurrencyRule) -> String {
    let fixed = to_fixed(value, rule.decimal_places);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = group_thousands(integer, rule.thousand_symbol);
    if rule.decimal_places > 0 {
        out.push_str(rule.decimal_symbol);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let lead = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.char_indices() {
        if i > 0 && i >= lead && (i - lead) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::{rule, DEFAULT_RULE};

    #[test]
    fn test_grouping_lengths() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("123456", ","), "123,456");
        assert_eq!(group_thousands("1234567", "."), "1.234.567");
    }

    #[test]
    fn test_format_two_places() {
        let usd = rule("USD").unwrap();
        assert_eq!(format_number(0.0, usd), "0.00");
        assert_eq!(format_number(99.1, usd), "99.10");
        assert_eq!(format_number(1234.5, usd), "1,234.50");
        assert_eq!(format_number(999.995, usd), "1,000.00");
    }

    #[test]
    fn test_format_swapped_separators() {
        let eur = rule("EUR").unwrap();
        assert_eq!(format_number(1234567.8, eur), "1.234.567,80");
    }

    #[test]
    fn test_format_zero_places() {
        assert_eq!(format_number(10500.0, &DEFAULT_RULE), "10.500");
        assert_eq!(format_number(10499.5, rule("JPY").unwrap()), "10,500");
    }

    #[test]
    fn test_format_three_places() {
        let bhd = rule("BHD").unwrap();
        assert_eq!(format_number(1234.5, bhd), "1,234.500");
        assert_eq!(format_number(0.001, bhd), "0.001");
    }
}
