//! Floating-point helpers: epsilon-corrected rounding and unit conversion.

pub mod rounding;
pub mod units;
