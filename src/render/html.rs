//! Screen-preview surface: self-contained HTML markup for the invoice.

use std::fmt::Write;

use super::{InvoiceDocument, money};

/// Render the on-screen preview markup. Pure and infallible — all numbers
/// come straight from the computed invoice.
pub fn render_html(doc: &InvoiceDocument<'_>) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("<div class=\"tax-invoice\">\n");
    out.push_str("<h1>TAX INVOICE</h1>\n");

    // Supplier identity block
    let _ = writeln!(out, "<h2>{}</h2>", esc(&doc.profile.company_name));
    let _ = writeln!(out, "<p>{}</p>", esc(&doc.profile.company_address));
    let _ = writeln!(
        out,
        "<p>SUPPLIER'S GSTN: {}</p>",
        esc(&doc.profile.gst_number.to_uppercase())
    );
    let _ = writeln!(out, "<p>PAN: {}</p>", esc(&doc.profile.pan_number));
    let _ = writeln!(
        out,
        "<p>Invoice No: {} &middot; Date: {}</p>",
        esc(doc.number),
        doc.date_display()
    );

    // Recipient and engagement details
    let _ = writeln!(out, "<p>To: {}</p>", esc(&doc.record.recipient_name));
    let _ = writeln!(out, "<p>{}</p>", esc(&doc.record.recipient_address));
    if !doc.record.project_location.is_empty() {
        let _ = writeln!(out, "<p>Project: {}</p>", esc(&doc.record.project_location));
    }
    if !doc.record.period.is_empty() {
        let _ = writeln!(out, "<p>Period: {}</p>", esc(&doc.record.period));
    }
    if !doc.record.working_time.is_empty() {
        let _ = writeln!(out, "<p>Working Time: {}</p>", esc(&doc.record.working_time));
    }
    if !doc.record.place_of_supply.is_empty() {
        let _ = writeln!(
            out,
            "<p>Place of Supply: {}</p>",
            esc(&doc.record.place_of_supply)
        );
    }
    let vehicles = doc.vehicle_summary();
    if !vehicles.is_empty() {
        let _ = writeln!(out, "<p>Vehicles: {}</p>", esc(&vehicles));
    }

    // Line items
    out.push_str("<table>\n<thead><tr>");
    out.push_str("<th>Sr.</th><th>Description</th><th>HSN/SAC</th><th>Unit</th>");
    out.push_str("<th>Qty</th><th>Rate</th><th>Amount</th>");
    out.push_str("</tr></thead>\n<tbody>\n");

    for (i, item) in doc.invoice.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            i + 1,
            multiline(&item.description),
            esc(&item.hsn_sac),
            esc(&item.unit),
            item.quantity,
            money(item.rate),
            money(item.line_total),
        );
    }
    out.push_str("</tbody>\n</table>\n");

    // Totals, read verbatim from the computed invoice
    let _ = writeln!(
        out,
        "<p class=\"subtotal\">Subtotal: {}</p>",
        money(doc.invoice.subtotal)
    );
    for component in &doc.invoice.tax_breakdown {
        let _ = writeln!(
            out,
            "<p class=\"tax\">{}: {}</p>",
            esc(&component.label),
            money(component.amount)
        );
    }
    let _ = writeln!(
        out,
        "<p class=\"grand-total\">Grand Total: &#8377;{}</p>",
        money(doc.invoice.grand_total)
    );
    let _ = writeln!(
        out,
        "<p class=\"in-words\">{}</p>",
        esc(&doc.invoice.grand_total_in_words)
    );

    // Bank details
    let bank = &doc.record.bank_details;
    let _ = writeln!(
        out,
        "<p class=\"bank\">Bank: {} &middot; Branch: {} &middot; A/c No: {} &middot; IFSC: {}</p>",
        esc(&bank.bank_name),
        esc(&bank.branch),
        esc(&bank.account_number),
        esc(&bank.ifsc_code),
    );

    let _ = writeln!(
        out,
        "<p class=\"signatory\">For {}</p>",
        esc(&doc.record.company_name)
    );
    out.push_str("</div>\n");
    out
}

fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape and convert embedded line breaks to `<br/>`.
fn multiline(text: &str) -> String {
    esc(text).replace('\n', "<br/>")
}
