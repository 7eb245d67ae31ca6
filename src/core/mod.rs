//! Core billing types, validation, and the single computation pass.
//!
//! This module owns the data model for billing records and the pure
//! [`compute`] function whose [`ComputedInvoice`] output is the only source
//! of truth for totals, tax, and amount-in-words.

mod builder;
mod compute;
mod error;
mod tax;
mod types;
mod validate;
pub mod words;

pub(crate) use tax::round2;

pub use builder::*;
pub use compute::*;
pub use error::*;
pub use tax::*;
pub use types::*;
pub use validate::*;
pub use words::amount_in_words;
