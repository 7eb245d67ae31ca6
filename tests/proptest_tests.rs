//! Property-based tests for the computation core.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::NaiveDate;
use fleetbill::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn record_with(items: Vec<ItemDraft>, gst_enabled: bool) -> BillingRecord {
    BillingRecord {
        company_name: "Sharma Travels".into(),
        billing_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        recipient_name: "BuildCo Infra Pvt Ltd".into(),
        recipient_address: "Plot 14, GIDC Estate, Vadodara".into(),
        working_time: String::new(),
        period: String::new(),
        project_location: String::new(),
        place_of_supply: "Gujarat".into(),
        items,
        gst_enabled,
        bank_details: BankDetails::default(),
        vehicles: Vec::new(),
    }
}

/// A positive rate with up to 2 decimal places (0.01 to 99999.99).
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (1u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// A positive quantity with up to 2 decimal places (0.01 to 999.99).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1u64..100_000u64).prop_map(|hundredths| Decimal::new(hundredths as i64, 2))
}

fn arb_item() -> impl Strategy<Value = ItemDraft> {
    ("[A-Za-z][A-Za-z ]{0,30}", arb_quantity(), arb_rate())
        .prop_map(|(description, quantity, rate)| {
            ItemDraft::new(description, "996601", "Day", quantity, rate)
        })
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

proptest! {
    #[test]
    fn compute_is_idempotent(items in prop::collection::vec(arb_item(), 1..8), gst in any::<bool>()) {
        let record = record_with(items, gst);
        let first = compute(&record).unwrap();
        let second = compute(&record).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn line_totals_are_rounded_products(items in prop::collection::vec(arb_item(), 1..8)) {
        let record = record_with(items.clone(), true);
        let invoice = compute(&record).unwrap();
        prop_assert_eq!(invoice.items.len(), items.len());
        for (item, draft) in invoice.items.iter().zip(&items) {
            prop_assert_eq!(item.line_total, round2(draft.quantity * draft.rate));
        }
    }

    #[test]
    fn gst_invariant_holds(items in prop::collection::vec(arb_item(), 1..8)) {
        let record = record_with(items, true);
        let invoice = compute(&record).unwrap();
        let component = round2(invoice.subtotal * dec!(0.09));
        prop_assert_eq!(invoice.tax_breakdown.len(), 2);
        prop_assert_eq!(invoice.tax_breakdown[0].amount, component);
        prop_assert_eq!(invoice.tax_breakdown[1].amount, component);
        prop_assert_eq!(invoice.grand_total, invoice.subtotal + component + component);
    }

    #[test]
    fn no_gst_means_grand_total_is_subtotal(items in prop::collection::vec(arb_item(), 1..8)) {
        let record = record_with(items, false);
        let invoice = compute(&record).unwrap();
        prop_assert!(invoice.tax_breakdown.is_empty());
        prop_assert_eq!(invoice.grand_total, invoice.subtotal);
    }

    #[test]
    fn input_order_is_preserved(items in prop::collection::vec(arb_item(), 1..8)) {
        let record = record_with(items.clone(), true);
        let invoice = compute(&record).unwrap();
        let descriptions: Vec<_> = invoice.items.iter().map(|i| i.description.clone()).collect();
        let expected: Vec<_> = items.iter().map(|i| i.description.clone()).collect();
        prop_assert_eq!(descriptions, expected);
    }

    #[test]
    fn words_never_empty_and_end_with_only(amount in 0u64..100_000_000u64) {
        let words = amount_in_words(Decimal::from(amount));
        prop_assert!(words.ends_with(" ONLY"));
        prop_assert!(words.len() > " ONLY".len());
    }
}
