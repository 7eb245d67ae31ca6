use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw billing line as entered in a form row, before validation.
///
/// Blank rows are legal input — the validator filters them out. Quantities
/// and rates arrive as [`Decimal`] so binary floating point never touches
/// the arithmetic path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Free text; may contain embedded line breaks for multi-line rendering.
    pub description: String,
    /// HSN/SAC tax classification code, opaque text.
    pub hsn_sac: String,
    /// Display unit, e.g. "Day" / "Km" / "Trip".
    pub unit: String,
    /// Invoiced quantity.
    pub quantity: Decimal,
    /// Currency per unit.
    pub rate: Decimal,
}

impl ItemDraft {
    pub fn new(
        description: impl Into<String>,
        hsn_sac: impl Into<String>,
        unit: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            hsn_sac: hsn_sac.into(),
            unit: unit.into(),
            quantity,
            rate,
        }
    }

    /// A fully empty form row: blank description, zero quantity and rate.
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty() && self.quantity.is_zero() && self.rate.is_zero()
    }
}

/// A validated billing line. Only the validator constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingItem {
    /// Description, preserved verbatim including line breaks.
    pub description: String,
    /// HSN/SAC tax classification code.
    pub hsn_sac: String,
    /// Display unit.
    pub unit: String,
    /// Quantity, strictly positive.
    pub quantity: Decimal,
    /// Currency per unit, strictly positive.
    pub rate: Decimal,
    /// Derived: `round2(quantity * rate)`. Never set by callers.
    pub line_total: Decimal,
}

/// Bank account details printed on the invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub branch: String,
    pub account_number: String,
    /// IFSC routing code.
    pub ifsc_code: String,
}

/// Read-only reference to a vehicle shown on the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRef {
    pub vehicle_number: String,
    pub vehicle_type: String,
}

/// The persisted billing record — the input to [`crate::core::compute`].
///
/// Items are kept as entered ([`ItemDraft`]); validation and all arithmetic
/// happen in the computation pass, so the derived [`ComputedInvoice`] can be
/// recomputed from this record at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRecord {
    pub company_name: String,
    pub billing_date: NaiveDate,
    pub recipient_name: String,
    pub recipient_address: String,
    /// Working-time free text (e.g. "8 Hours / Day").
    pub working_time: String,
    /// Billing period free text (e.g. "01/06/2024 - 30/06/2024").
    pub period: String,
    pub project_location: String,
    pub place_of_supply: String,
    /// Ordered line items as entered; order is preserved in every rendering.
    pub items: Vec<ItemDraft>,
    /// When false, the tax breakdown is empty and grand total equals subtotal.
    pub gst_enabled: bool,
    pub bank_details: BankDetails,
    /// Vehicles referenced for display.
    pub vehicles: Vec<VehicleRef>,
}

/// One named tax component on the invoice (e.g. "SGST 9%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComponent {
    /// Statutory display label.
    pub label: String,
    /// Percentage rate applied to the subtotal.
    pub rate: Decimal,
    /// Independently rounded amount.
    pub amount: Decimal,
}

/// The immutable result of the computation pass — the single source of truth
/// for every renderer and for persistence of totals.
///
/// Recomputing from the same [`BillingRecord`] always yields an equal value;
/// `Eq` is derived so idempotence is directly checkable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedInvoice {
    /// Validated items in input order, with derived line totals.
    pub items: Vec<BillingItem>,
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// Named tax components; empty when GST is disabled.
    pub tax_breakdown: Vec<TaxComponent>,
    /// `subtotal + Σ tax_breakdown`.
    pub grand_total: Decimal,
    /// Grand total in uppercase English words with trailing "ONLY".
    pub grand_total_in_words: String,
}

impl ComputedInvoice {
    /// Total tax across all components.
    pub fn tax_total(&self) -> Decimal {
        self.tax_breakdown.iter().map(|c| c.amount).sum()
    }
}

/// Settings record injected into rendered documents. Owned by the settings
/// screen of the surrounding application; read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub proprietor_name: String,
    pub company_address: String,
    pub contact_number: String,
    pub gst_number: String,
    pub pan_number: String,
    pub bank_details: BankDetails,
}

/// Lifecycle state of a duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DutyStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled vehicle/driver assignment, owned by the duty screens of the
/// surrounding application. The billing side only reads it and flips
/// `is_billed` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    pub id: String,
    pub status: DutyStatus,
    /// True once a billing record has been generated from this duty.
    pub is_billed: bool,
    /// Id of the billing record generated from this duty, if any.
    pub billing_id: Option<String>,
    pub vehicle: VehicleRef,
    pub company_name: Option<String>,
    pub client_name: Option<String>,
    pub pickup_location: String,
    pub drop_location: String,
    pub distance_traveled: Option<Decimal>,
    pub rate_per_km: Option<Decimal>,
    pub base_rate: Option<Decimal>,
    pub extra_charges: Option<Decimal>,
}
