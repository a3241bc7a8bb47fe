//! Currency codes and the per-currency rule registry.

pub mod currency;
pub(crate) mod table;
