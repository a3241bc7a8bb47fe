//! # currency-format
//!
//! Conversion of monetary amounts between minor units (what gets stored,
//! e.g. cents) and major units (what gets shown, e.g. dollars), plus
//! formatting and parsing of display strings with per-currency rules.
//!
//! ## Architecture
//!
//! - **core** — Currency codes and the static rule registry
//! - **numeric** — Epsilon-corrected rounding and minor/major conversion
//! - **format** — Number rendering, currency formatting, parsing, batches
//!
//! Malformed currency codes are the only hard error. Bad amounts and
//! unreadable strings come back as caller-supplied fallback values.

pub mod core;
pub mod format;
pub mod numeric;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::currency::{rule, CurrencyCode, CurrencyError, CurrencyRule, DEFAULT_RULE};
    pub use crate::format::batch::{format_values, unformat_values};
    pub use crate::format::currency::{format_currency, CurrencyDisplay, FormatOptions, SignDisplay};
    pub use crate::format::number::format_number;
    pub use crate::format::parse::{unformat_currency, ParseOptions};
    pub use crate::numeric::rounding::{safe_round, to_fixed};
    pub use crate::numeric::units::{convert, to_major_unit, to_minor_unit, Unit};
}
