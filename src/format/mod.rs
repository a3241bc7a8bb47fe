//! Display strings: number rendering, currency formatting and its inverse.

pub mod batch;
pub mod currency;
pub mod number;
pub mod parse;
