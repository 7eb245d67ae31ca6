use chrono::NaiveDate;

use crate::core::{
    BankDetails, BillingError, BillingRecord, ComputedInvoice, Duty, DutyNotEligible, compute,
};

use super::convert::convert;

/// Read/write access to duties. Persistence itself belongs to the
/// surrounding CRUD layer; the billing engine only needs these two calls.
pub trait DutyStore {
    fn fetch(&self, duty_id: &str) -> Result<Duty, BillingError>;

    /// Compare-and-set the billed flag: record `billing_id` and flip
    /// `is_billed` to true only if it is currently false. Returns whether
    /// the transition was applied — `false` means another conversion won
    /// the race.
    fn mark_billed(&self, duty_id: &str, billing_id: &str) -> Result<bool, BillingError>;
}

/// Write access to billing records.
pub trait BillingStore {
    /// Persist a record with its computed invoice, returning the new id.
    fn create(
        &self,
        record: &BillingRecord,
        invoice: &ComputedInvoice,
    ) -> Result<String, BillingError>;

    /// Remove a record, used to roll back a lost billed-flag race.
    fn delete(&self, billing_id: &str) -> Result<(), BillingError>;
}

/// Invoice-level fields accompanying a duty conversion — everything the
/// billing record needs beyond the converted line itself.
#[derive(Debug, Clone)]
pub struct DutyBillingContext {
    pub company_name: String,
    pub billing_date: NaiveDate,
    pub recipient_name: String,
    pub recipient_address: String,
    pub working_time: String,
    pub period: String,
    pub project_location: String,
    pub place_of_supply: String,
    pub gst_enabled: bool,
    pub bank_details: BankDetails,
}

/// Result of a successful duty billing generation.
#[derive(Debug, Clone)]
pub struct GeneratedBilling {
    pub billing_id: String,
    pub record: BillingRecord,
    pub invoice: ComputedInvoice,
    /// False when the record was written but the duty's billed flag was
    /// not — [`reconcile`] repairs that state.
    pub duty_updated: bool,
}

/// Generate a billing record from a completed duty.
///
/// Eligibility and computation run before any write, so a validation error
/// leaves the duty untouched. After the record is persisted the billed flag
/// is applied as a compare-and-set: if another conversion already claimed
/// the duty, the just-written record is deleted and the call fails with
/// [`DutyNotEligible::AlreadyBilled`] — at most one billing record per duty
/// ever survives. If the flag write itself fails, the billing stands and
/// `duty_updated` is false; run [`reconcile`] to repair rather than
/// retrying the generation.
pub fn generate_billing<D: DutyStore, B: BillingStore>(
    duties: &D,
    billings: &B,
    duty_id: &str,
    ctx: &DutyBillingContext,
) -> Result<GeneratedBilling, BillingError> {
    let duty = duties.fetch(duty_id)?;
    let line = convert(&duty)?;

    let record = BillingRecord {
        company_name: ctx.company_name.clone(),
        billing_date: ctx.billing_date,
        recipient_name: ctx.recipient_name.clone(),
        recipient_address: ctx.recipient_address.clone(),
        working_time: ctx.working_time.clone(),
        period: ctx.period.clone(),
        project_location: if ctx.project_location.is_empty() {
            format!("{} to {}", duty.pickup_location, duty.drop_location)
        } else {
            ctx.project_location.clone()
        },
        place_of_supply: ctx.place_of_supply.clone(),
        items: vec![line],
        gst_enabled: ctx.gst_enabled,
        bank_details: ctx.bank_details.clone(),
        vehicles: vec![duty.vehicle.clone()],
    };

    let invoice = compute(&record)?;

    let billing_id = billings.create(&record, &invoice)?;

    let duty_updated = match duties.mark_billed(duty_id, &billing_id) {
        Ok(true) => true,
        Ok(false) => {
            // Lost the race: another conversion billed this duty first.
            billings.delete(&billing_id)?;
            return Err(DutyNotEligible::AlreadyBilled.into());
        }
        // The record exists; leave the flag for reconciliation instead of
        // failing the whole generation.
        Err(_) => false,
    };

    Ok(GeneratedBilling {
        billing_id,
        record,
        invoice,
        duty_updated,
    })
}

/// Repair a half-applied transition: a duty whose `billing_id` is set but
/// whose billed flag is still false. Returns whether a repair was applied.
///
/// Safe to call on any duty — a fully billed or never-billed duty is left
/// alone, so retries never duplicate billing.
pub fn reconcile<D: DutyStore>(duties: &D, duty_id: &str) -> Result<bool, BillingError> {
    let duty = duties.fetch(duty_id)?;

    if duty.is_billed {
        return Ok(false);
    }
    let Some(billing_id) = &duty.billing_id else {
        return Ok(false);
    };

    duties.mark_billed(duty_id, billing_id)
}
