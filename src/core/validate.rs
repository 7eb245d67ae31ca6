use rust_decimal::Decimal;

use super::error::ValidationError;
use super::tax::round2;
use super::types::{BillingItem, ItemDraft};

/// Validate raw form rows into billing items.
///
/// Fully blank rows (empty description, zero quantity and rate) are dropped
/// the way trailing empty form rows are. Every surviving row must pass the
/// per-item rules; the first failure is returned with the row's index in the
/// caller's original slice. If nothing survives filtering the result is
/// [`ValidationError::EmptyInvoice`].
///
/// Pure — no side effects, input is untouched.
pub fn validate_items(drafts: &[ItemDraft]) -> Result<Vec<BillingItem>, ValidationError> {
    let mut items = Vec::new();

    for (index, draft) in drafts.iter().enumerate() {
        if draft.is_blank() {
            continue;
        }
        items.push(validate_item(index, draft)?);
    }

    if items.is_empty() {
        return Err(ValidationError::EmptyInvoice);
    }
    Ok(items)
}

fn validate_item(index: usize, draft: &ItemDraft) -> Result<BillingItem, ValidationError> {
    if draft.description.trim().is_empty() {
        return Err(ValidationError::item(
            index,
            "description",
            "must not be blank",
        ));
    }

    if draft.quantity <= Decimal::ZERO {
        return Err(ValidationError::item(
            index,
            "quantity",
            format!("must be greater than zero, got {}", draft.quantity),
        ));
    }

    if draft.rate <= Decimal::ZERO {
        return Err(ValidationError::item(
            index,
            "rate",
            format!("must be greater than zero, got {}", draft.rate),
        ));
    }

    // HSN/SAC and unit are free text but must stay printable. The
    // description is exempt: embedded line breaks are preserved verbatim
    // for multi-line rendering.
    if draft.hsn_sac.chars().any(char::is_control) {
        return Err(ValidationError::item(
            index,
            "hsn_sac",
            "must not contain control characters",
        ));
    }
    if draft.unit.chars().any(char::is_control) {
        return Err(ValidationError::item(
            index,
            "unit",
            "must not contain control characters",
        ));
    }

    Ok(BillingItem {
        description: draft.description.clone(),
        hsn_sac: draft.hsn_sac.clone(),
        unit: draft.unit.clone(),
        quantity: draft.quantity,
        rate: draft.rate,
        line_total: round2(draft.quantity * draft.rate),
    })
}
