//! # fleetbill
//!
//! Billing computation and invoice document assembly for vehicle-hire
//! businesses: one pure computation pass over a billing record produces a
//! [`core::ComputedInvoice`] that every output surface (HTML preview,
//! spreadsheet rows, paginated PDF) consumes read-only. No renderer ever
//! recomputes a total.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fleetbill::core::*;
//! use rust_decimal_macros::dec;
//!
//! let record = BillingRecordBuilder::new("Sharma Travels", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .recipient("BuildCo Infra Pvt Ltd", "Plot 14, GIDC Estate, Vadodara")
//!     .period("01/06/2024 - 30/06/2024")
//!     .gst_enabled(true)
//!     .add_item(ItemDraft::new("Hiring Charges", "996601", "Day", dec!(2), dec!(5000)))
//!     .build()
//!     .unwrap();
//!
//! let invoice = compute(&record).unwrap();
//! assert_eq!(invoice.subtotal, dec!(10000.00));
//! assert_eq!(invoice.grand_total, dec!(11800.00));
//! assert_eq!(invoice.grand_total_in_words, "ELEVEN THOUSAND EIGHT HUNDRED ONLY");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Billing types, validation, tax, aggregation, duty conversion, HTML/CSV surfaces |
//! | `pdf` | Paginated PDF rendering via `lopdf` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod duty;

#[cfg(feature = "core")]
pub mod render;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
