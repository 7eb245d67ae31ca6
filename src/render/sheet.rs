//! Spreadsheet surface: ordered rows mirroring the preview layout, plus a
//! CSV serialization with quoting.

use super::{InvoiceDocument, money};

/// Build the spreadsheet rows for an invoice.
///
/// The layout mirrors the on-screen preview: header block, one row per line
/// item, one row per tax component, then grand total and amount in words.
/// All amounts are read from the computed invoice.
pub fn invoice_rows(doc: &InvoiceDocument<'_>) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();

    rows.push(vec!["TAX INVOICE".into()]);
    rows.push(vec![doc.profile.company_name.clone()]);
    rows.push(vec![doc.profile.company_address.clone()]);
    rows.push(vec![
        "SUPPLIER'S GSTN:".into(),
        doc.profile.gst_number.to_uppercase(),
    ]);
    rows.push(vec!["PAN:".into(), doc.profile.pan_number.clone()]);
    rows.push(vec!["Invoice No:".into(), doc.number.to_string()]);
    rows.push(vec!["Date:".into(), doc.date_display()]);
    rows.push(vec!["To:".into(), doc.record.recipient_name.clone()]);
    rows.push(vec!["Address:".into(), doc.record.recipient_address.clone()]);
    rows.push(vec!["Project:".into(), doc.record.project_location.clone()]);
    rows.push(vec!["Period:".into(), doc.record.period.clone()]);
    rows.push(vec![
        "Place of Supply:".into(),
        doc.record.place_of_supply.clone(),
    ]);
    rows.push(vec!["Vehicles:".into(), doc.vehicle_summary()]);
    rows.push(Vec::new());

    rows.push(
        ["Sr.", "Description", "HSN/SAC", "Unit", "Qty", "Rate", "Amount"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    for (i, item) in doc.invoice.items.iter().enumerate() {
        rows.push(vec![
            (i + 1).to_string(),
            item.description.clone(),
            item.hsn_sac.clone(),
            item.unit.clone(),
            item.quantity.to_string(),
            money(item.rate),
            money(item.line_total),
        ]);
    }

    rows.push(totals_row("Subtotal", money(doc.invoice.subtotal)));
    for component in &doc.invoice.tax_breakdown {
        rows.push(totals_row(&component.label, money(component.amount)));
    }
    rows.push(totals_row("Grand Total", money(doc.invoice.grand_total)));
    rows.push(vec![doc.invoice.grand_total_in_words.clone()]);

    let bank = &doc.record.bank_details;
    rows.push(Vec::new());
    rows.push(vec!["Bank:".into(), bank.bank_name.clone()]);
    rows.push(vec!["Branch:".into(), bank.branch.clone()]);
    rows.push(vec!["A/c No:".into(), bank.account_number.clone()]);
    rows.push(vec!["IFSC:".into(), bank.ifsc_code.clone()]);

    rows
}

/// A totals row padded so the label and amount land in the rate/amount
/// columns of the item table.
fn totals_row(label: &str, amount: String) -> Vec<String> {
    vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        label.to_string(),
        amount,
    ]
}

/// Serialize the spreadsheet rows as CSV with double-quote escaping.
pub fn render_csv(doc: &InvoiceDocument<'_>) -> String {
    let mut out = String::new();
    for row in invoice_rows(doc) {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            csv_field(&mut out, field);
        }
        out.push_str("\r\n");
    }
    out
}

fn csv_field(out: &mut String, value: &str) {
    let needs_quoting = value.contains([',', '"', '\n', '\r']);
    if !needs_quoting {
        out.push_str(value);
        return;
    }
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}
