/// Round `value` to `decimals` places, ties toward positive infinity.
///
/// `f64::EPSILON` is added before scaling so that values whose binary
/// representation falls just below a tie (such as `1.005`) still round up.
///
/// # Examples
///
/// ```
/// use currency_format::numeric::rounding::safe_round;
///
/// assert_eq!(safe_round(1.005, 2), 1.01);
/// assert_eq!(safe_round(2.5, 0), 3.0);
/// assert_eq!(safe_round(-2.5, 0), -2.0);
/// ```
pub fn safe_round(value: f64, decimals: u32) -> f64 {
    let factor = pow10(decimals);
    round_half_up((value + f64::EPSILON) * factor) / factor
}

/// Fixed-point rendering of `value` after [`safe_round`], with exactly
/// `decimals` fractional digits.
///
/// ```
/// use currency_format::numeric::rounding::to_fixed;
///
/// assert_eq!(to_fixed(1.005, 2), "1.01");
/// assert_eq!(to_fixed(99.1, 2), "99.10");
/// assert_eq!(to_fixed(10500.4, 0), "10500");
/// ```
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let rounded = safe_round(value, decimals);
    // Avoid rendering "-0.00" for values that round to zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals as usize, rounded)
}

pub(crate) fn pow10(exp: u32) -> f64 {
    10f64.powi(exp as i32)
}

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
