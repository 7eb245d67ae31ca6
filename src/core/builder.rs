use chrono::NaiveDate;

use super::error::BillingError;
use super::types::*;
use super::validate::validate_items;

/// Builder for constructing billing records.
///
/// `build()` runs item validation so malformed input is rejected at the
/// boundary instead of reaching arithmetic later.
///
/// ```
/// use chrono::NaiveDate;
/// use fleetbill::core::*;
/// use rust_decimal_macros::dec;
///
/// let record = BillingRecordBuilder::new("Sharma Travels", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .recipient("BuildCo Infra Pvt Ltd", "Plot 14, GIDC Estate, Vadodara")
///     .project_location("Vadodara")
///     .place_of_supply("Gujarat")
///     .gst_enabled(true)
///     .add_item(ItemDraft::new("Hiring Charges", "996601", "Day", dec!(2), dec!(5000)))
///     .build()
///     .unwrap();
/// assert_eq!(record.items.len(), 1);
/// ```
pub struct BillingRecordBuilder {
    company_name: String,
    billing_date: NaiveDate,
    recipient_name: String,
    recipient_address: String,
    working_time: String,
    period: String,
    project_location: String,
    place_of_supply: String,
    items: Vec<ItemDraft>,
    gst_enabled: bool,
    bank_details: BankDetails,
    vehicles: Vec<VehicleRef>,
}

impl BillingRecordBuilder {
    pub fn new(company_name: impl Into<String>, billing_date: NaiveDate) -> Self {
        Self {
            company_name: company_name.into(),
            billing_date,
            recipient_name: String::new(),
            recipient_address: String::new(),
            working_time: String::new(),
            period: String::new(),
            project_location: String::new(),
            place_of_supply: String::new(),
            items: Vec::new(),
            gst_enabled: true,
            bank_details: BankDetails::default(),
            vehicles: Vec::new(),
        }
    }

    pub fn recipient(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.recipient_name = name.into();
        self.recipient_address = address.into();
        self
    }

    pub fn working_time(mut self, text: impl Into<String>) -> Self {
        self.working_time = text.into();
        self
    }

    pub fn period(mut self, text: impl Into<String>) -> Self {
        self.period = text.into();
        self
    }

    pub fn project_location(mut self, text: impl Into<String>) -> Self {
        self.project_location = text.into();
        self
    }

    pub fn place_of_supply(mut self, text: impl Into<String>) -> Self {
        self.place_of_supply = text.into();
        self
    }

    pub fn gst_enabled(mut self, enabled: bool) -> Self {
        self.gst_enabled = enabled;
        self
    }

    pub fn bank_details(mut self, details: BankDetails) -> Self {
        self.bank_details = details;
        self
    }

    pub fn add_item(mut self, item: ItemDraft) -> Self {
        self.items.push(item);
        self
    }

    pub fn add_vehicle(mut self, vehicle: VehicleRef) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Build the record, validating the item list.
    pub fn build(self) -> Result<BillingRecord, BillingError> {
        validate_items(&self.items)?;

        Ok(BillingRecord {
            company_name: self.company_name,
            billing_date: self.billing_date,
            recipient_name: self.recipient_name,
            recipient_address: self.recipient_address,
            working_time: self.working_time,
            period: self.period,
            project_location: self.project_location,
            place_of_supply: self.place_of_supply,
            items: self.items,
            gst_enabled: self.gst_enabled,
            bank_details: self.bank_details,
            vehicles: self.vehicles,
        })
    }
}
