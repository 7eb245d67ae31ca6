//! Presentation adapters over a computed invoice.
//!
//! Every surface reads subtotal, tax, and grand total from the same
//! [`ComputedInvoice`] value — no renderer recomputes anything. Renderers
//! are pure mappers: a failure in one export neither mutates the record nor
//! blocks another surface.

mod html;
mod sheet;

#[cfg(feature = "pdf")]
mod pdf;

pub use html::render_html;
pub use sheet::{invoice_rows, render_csv};

#[cfg(feature = "pdf")]
pub use pdf::render_pdf;

use crate::core::{BillingRecord, CompanyProfile, ComputedInvoice};
use rust_decimal::Decimal;

/// Everything a renderer may read: the computed invoice plus the static
/// identity fields of the owning record and the settings profile.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceDocument<'a> {
    /// Tax invoice number assigned by the caller.
    pub number: &'a str,
    pub record: &'a BillingRecord,
    pub invoice: &'a ComputedInvoice,
    pub profile: &'a CompanyProfile,
}

impl<'a> InvoiceDocument<'a> {
    pub fn new(
        number: &'a str,
        record: &'a BillingRecord,
        invoice: &'a ComputedInvoice,
        profile: &'a CompanyProfile,
    ) -> Self {
        Self {
            number,
            record,
            invoice,
            profile,
        }
    }

    /// "GJ-06-AB-1234 (Tanker), ..." display summary of referenced vehicles.
    pub fn vehicle_summary(&self) -> String {
        self.record
            .vehicles
            .iter()
            .map(|v| format!("{} ({})", v.vehicle_number, v.vehicle_type))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Billing date in the dd/mm/yyyy convention used on the documents.
    pub fn date_display(&self) -> String {
        self.record.billing_date.format("%d/%m/%Y").to_string()
    }
}

/// Format an amount with exactly 2 decimal places for display.
pub(crate) fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
