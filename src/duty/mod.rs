//! Duty-to-billing conversion and the one-time billed transition.
//!
//! A completed duty becomes exactly one prefilled billing line. The billed
//! flag flips `false → true` at most once, enforced as a compare-and-set in
//! [`DutyStore::mark_billed`], so concurrent conversion attempts can never
//! both produce a billing record.

mod convert;
mod workflow;

pub use convert::*;
pub use workflow::*;
