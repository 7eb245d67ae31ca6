use rust_decimal::Decimal;

use super::error::ValidationError;
use super::tax::compute_tax;
use super::types::{BillingRecord, ComputedInvoice};
use super::validate::validate_items;
use super::words::amount_in_words;

/// The single computation pass: validate, total, tax, words.
///
/// Pure and deterministic — the same record always produces an equal
/// [`ComputedInvoice`], so every output surface and the persistence layer
/// read the one value instead of recomputing. Item order is preserved.
///
/// Fails fast with the first validation error; never partially computes.
pub fn compute(record: &BillingRecord) -> Result<ComputedInvoice, ValidationError> {
    let items = validate_items(&record.items)?;

    let subtotal: Decimal = items.iter().map(|item| item.line_total).sum();
    let tax_breakdown = compute_tax(subtotal, record.gst_enabled);
    let tax_total: Decimal = tax_breakdown.iter().map(|c| c.amount).sum();
    let grand_total = subtotal + tax_total;
    let grand_total_in_words = amount_in_words(grand_total);

    Ok(ComputedInvoice {
        items,
        subtotal,
        tax_breakdown,
        grand_total,
        grand_total_in_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BankDetails, ItemDraft};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(items: Vec<ItemDraft>, gst_enabled: bool) -> BillingRecord {
        BillingRecord {
            company_name: "Sharma Travels".into(),
            billing_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            recipient_name: "BuildCo Infra Pvt Ltd".into(),
            recipient_address: "Plot 14, GIDC Estate, Vadodara".into(),
            working_time: "8 Hours / Day".into(),
            period: "01/06/2024 - 30/06/2024".into(),
            project_location: "Vadodara".into(),
            place_of_supply: "Gujarat".into(),
            items,
            gst_enabled,
            bank_details: BankDetails::default(),
            vehicles: Vec::new(),
        }
    }

    #[test]
    fn end_to_end_hiring_charges() {
        let record = record(
            vec![ItemDraft::new(
                "Hiring Charges",
                "996601",
                "Day",
                dec!(2),
                dec!(5000),
            )],
            true,
        );

        let invoice = compute(&record).unwrap();
        assert_eq!(invoice.subtotal, dec!(10000.00));
        assert_eq!(invoice.tax_breakdown.len(), 2);
        assert_eq!(invoice.tax_breakdown[0].amount, dec!(900.00));
        assert_eq!(invoice.tax_breakdown[1].amount, dec!(900.00));
        assert_eq!(invoice.grand_total, dec!(11800.00));
        assert_eq!(
            invoice.grand_total_in_words,
            "ELEVEN THOUSAND EIGHT HUNDRED ONLY"
        );
    }

    #[test]
    fn gst_disabled_grand_total_equals_subtotal() {
        let record = record(
            vec![ItemDraft::new("Hiring Charges", "", "Trip", dec!(3), dec!(1234.56))],
            false,
        );
        let invoice = compute(&record).unwrap();
        assert!(invoice.tax_breakdown.is_empty());
        assert_eq!(invoice.grand_total, invoice.subtotal);
    }

    #[test]
    fn recomputation_is_identical() {
        let record = record(
            vec![
                ItemDraft::new("Hiring Charges", "996601", "Day", dec!(2), dec!(5000)),
                ItemDraft::new("Fuel Surcharge", "", "Trip", dec!(1), dec!(750.25)),
            ],
            true,
        );
        assert_eq!(compute(&record).unwrap(), compute(&record).unwrap());
    }

    #[test]
    fn validation_failure_surfaces_without_partial_result() {
        let record = record(
            vec![
                ItemDraft::new("Hiring Charges", "996601", "Day", dec!(2), dec!(5000)),
                ItemDraft::new("Broken", "", "Day", dec!(0), dec!(100)),
            ],
            true,
        );
        let err = compute(&record).unwrap_err();
        assert!(matches!(err, ValidationError::Item { index: 1, .. }));
    }
}
