//! Renderer consistency tests: every surface must expose the exact numbers
//! carried by the computed invoice.

use std::str::FromStr;

use chrono::NaiveDate;
use fleetbill::core::*;
use fleetbill::render::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Sharma Travels".into(),
        proprietor_name: "A. Sharma".into(),
        company_address: "12, Station Road, Vadodara".into(),
        contact_number: "+91 98250 00000".into(),
        gst_number: "24elvpv5086r1zb".into(),
        pan_number: "ELVPV5086R".into(),
        bank_details: BankDetails::default(),
    }
}

fn record() -> BillingRecord {
    BillingRecordBuilder::new("Sharma Travels", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .recipient("BuildCo Infra Pvt Ltd", "Plot 14, GIDC Estate, Vadodara")
        .period("01/06/2024 - 30/06/2024")
        .project_location("Vadodara")
        .place_of_supply("Gujarat")
        .gst_enabled(true)
        .bank_details(BankDetails {
            bank_name: "State Bank of India".into(),
            branch: "Alkapuri".into(),
            account_number: "38012345678".into(),
            ifsc_code: "SBIN0001234".into(),
        })
        .add_vehicle(VehicleRef {
            vehicle_number: "GJ-06-AB-1234".into(),
            vehicle_type: "Tanker".into(),
        })
        .add_item(ItemDraft::new(
            "Hiring Charges for Tanker\nJune 2024",
            "996601",
            "Day",
            dec!(2),
            dec!(5000),
        ))
        .add_item(ItemDraft::new("Fuel Surcharge", "", "Trip", dec!(1), dec!(750.25)))
        .build()
        .unwrap()
}

/// Find the amount cell of the sheet row whose label column matches.
fn sheet_amount(rows: &[Vec<String>], label: &str) -> Decimal {
    let row = rows
        .iter()
        .find(|r| r.len() == 7 && r[5] == label)
        .unwrap_or_else(|| panic!("no sheet row labelled {label:?}"));
    Decimal::from_str(&row[6]).unwrap()
}

#[test]
fn sheet_rows_match_computed_invoice_exactly() {
    let record = record();
    let invoice = compute(&record).unwrap();
    let profile = profile();
    let doc = InvoiceDocument::new("INV-2024-007", &record, &invoice, &profile);

    let rows = invoice_rows(&doc);
    assert_eq!(sheet_amount(&rows, "Subtotal"), invoice.subtotal);
    assert_eq!(sheet_amount(&rows, "SGST 9%"), invoice.tax_breakdown[0].amount);
    assert_eq!(sheet_amount(&rows, "CGST 9%"), invoice.tax_breakdown[1].amount);
    assert_eq!(sheet_amount(&rows, "Grand Total"), invoice.grand_total);
}

#[test]
fn html_and_sheet_surfaces_agree() {
    let record = record();
    let invoice = compute(&record).unwrap();
    let profile = profile();
    let doc = InvoiceDocument::new("INV-2024-007", &record, &invoice, &profile);

    let html = render_html(&doc);
    let rows = invoice_rows(&doc);

    for (label, value) in [
        ("Subtotal", sheet_amount(&rows, "Subtotal")),
        ("SGST 9%", sheet_amount(&rows, "SGST 9%")),
        ("CGST 9%", sheet_amount(&rows, "CGST 9%")),
        ("Grand Total", sheet_amount(&rows, "Grand Total")),
    ] {
        let formatted = format!("{value:.2}");
        assert!(
            html.contains(&formatted),
            "HTML surface missing {label} amount {formatted}"
        );
    }
}

#[test]
fn html_preserves_item_order_and_multiline_descriptions() {
    let record = record();
    let invoice = compute(&record).unwrap();
    let profile = profile();
    let doc = InvoiceDocument::new("INV-2024-007", &record, &invoice, &profile);

    let html = render_html(&doc);
    let first = html.find("Hiring Charges for Tanker<br/>June 2024").unwrap();
    let second = html.find("Fuel Surcharge").unwrap();
    assert!(first < second);
}

#[test]
fn html_uppercases_gstn_and_includes_words() {
    let record = record();
    let invoice = compute(&record).unwrap();
    let profile = profile();
    let doc = InvoiceDocument::new("INV-2024-007", &record, &invoice, &profile);

    let html = render_html(&doc);
    assert!(html.contains("SUPPLIER'S GSTN: 24ELVPV5086R1ZB"));
    assert!(html.contains(&invoice.grand_total_in_words));
}

#[test]
fn csv_serializes_all_rows() {
    let record = record();
    let invoice = compute(&record).unwrap();
    let profile = profile();
    let doc = InvoiceDocument::new("INV-2024-007", &record, &invoice, &profile);

    let csv = render_csv(&doc);
    let rows = invoice_rows(&doc);
    // Each row is CRLF-terminated; the embedded description newline is bare.
    assert_eq!(csv.matches("\r\n").count(), rows.len());
    assert!(csv.contains("TAX INVOICE"));
    assert!(csv.contains("SGST 9%"));
    // Embedded newline in the description forces quoting
    assert!(csv.contains("\"Hiring Charges for Tanker\nJune 2024\""));
}

#[test]
fn rendering_does_not_mutate_inputs() {
    let record = record();
    let invoice = compute(&record).unwrap();
    let profile = profile();
    let doc = InvoiceDocument::new("INV-2024-007", &record, &invoice, &profile);

    let before = invoice.clone();
    let _ = render_html(&doc);
    let _ = render_csv(&doc);
    assert_eq!(invoice, before);
    assert_eq!(compute(&record).unwrap(), before);
}
