//! Paginated PDF surface built with `lopdf`.
//!
//! The invoice is laid out as monospaced-style text lines on A4 pages. A
//! rendering failure surfaces as [`BillingError::Render`] and touches
//! nothing else — the computed invoice and record are read-only here.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::core::BillingError;

use super::{InvoiceDocument, money};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const FONT_SIZE: i64 = 10;
const LEADING: i64 = 14;
const LINES_PER_PAGE: usize = 52;

/// Render the invoice as a paginated A4 PDF, returning the document bytes.
pub fn render_pdf(doc: &InvoiceDocument<'_>) -> Result<Vec<u8>, BillingError> {
    let lines = layout_lines(doc);

    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let font_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! { "F1" => Object::Reference(font_id) },
    });

    let mut kids: Vec<Object> = Vec::new();
    for chunk in lines.chunks(LINES_PER_PAGE) {
        let content = page_content(chunk);
        let encoded = content
            .encode()
            .map_err(|e| BillingError::Render(format!("failed to encode page content: {e}")))?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "Contents" => Object::Reference(content_id),
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Resources" => Object::Reference(resources_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    pdf.trailer.set("Root", catalog_id);

    let mut output = Vec::new();
    pdf.save_to(&mut output)
        .map_err(|e| BillingError::Render(format!("failed to save PDF: {e}")))?;
    Ok(output)
}

fn page_content(lines: &[String]) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(line.as_str())]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

/// Flatten the document into text lines; pagination chunks these.
fn layout_lines(doc: &InvoiceDocument<'_>) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("TAX INVOICE".to_string());
    lines.push(String::new());
    lines.push(doc.profile.company_name.clone());
    lines.push(doc.profile.company_address.replace('\n', ", "));
    lines.push(format!(
        "SUPPLIER'S GSTN: {}   PAN: {}",
        doc.profile.gst_number.to_uppercase(),
        doc.profile.pan_number
    ));
    lines.push(format!(
        "Invoice No: {}   Date: {}",
        doc.number,
        doc.date_display()
    ));
    lines.push(String::new());
    lines.push(format!("To: {}", doc.record.recipient_name));
    for part in doc.record.recipient_address.split('\n') {
        lines.push(part.to_string());
    }
    if !doc.record.project_location.is_empty() {
        lines.push(format!("Project: {}", doc.record.project_location));
    }
    if !doc.record.period.is_empty() {
        lines.push(format!("Period: {}", doc.record.period));
    }
    if !doc.record.place_of_supply.is_empty() {
        lines.push(format!("Place of Supply: {}", doc.record.place_of_supply));
    }
    let vehicles = doc.vehicle_summary();
    if !vehicles.is_empty() {
        lines.push(format!("Vehicles: {vehicles}"));
    }
    lines.push(String::new());

    lines.push(format!(
        "{:<4}{:<34}{:>10}{:>6}{:>8}{:>12}{:>12}",
        "Sr.", "Description", "HSN/SAC", "Unit", "Qty", "Rate", "Amount"
    ));
    for (i, item) in doc.invoice.items.iter().enumerate() {
        let mut description = item.description.split('\n');
        let first = description.next().unwrap_or_default();
        lines.push(format!(
            "{:<4}{:<34}{:>10}{:>6}{:>8}{:>12}{:>12}",
            i + 1,
            first,
            item.hsn_sac,
            item.unit,
            item.quantity,
            money(item.rate),
            money(item.line_total),
        ));
        // Continuation lines for multi-line descriptions
        for part in description {
            lines.push(format!("{:<4}{}", "", part));
        }
    }
    lines.push(String::new());

    lines.push(format!("{:>74}{:>12}", "Subtotal:", money(doc.invoice.subtotal)));
    for component in &doc.invoice.tax_breakdown {
        lines.push(format!(
            "{:>74}{:>12}",
            format!("{}:", component.label),
            money(component.amount)
        ));
    }
    lines.push(format!(
        "{:>74}{:>12}",
        "Grand Total (Rs.):",
        money(doc.invoice.grand_total)
    ));
    lines.push(doc.invoice.grand_total_in_words.clone());
    lines.push(String::new());

    let bank = &doc.record.bank_details;
    lines.push(format!(
        "Bank: {}  Branch: {}  A/c No: {}  IFSC: {}",
        bank.bank_name, bank.branch, bank.account_number, bank.ifsc_code
    ));
    lines.push(String::new());
    lines.push(format!("For {}", doc.record.company_name));

    lines
}
