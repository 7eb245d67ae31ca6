//! GST computation on an invoice subtotal.
//!
//! Indian intra-state GST splits into two statutory components, SGST and
//! CGST, each shown as its own line. Each component is rounded to 2 decimal
//! places independently, so the total tax is `2 × round2(subtotal × 0.09)` —
//! deliberately not `round2(subtotal × 0.18)`, which diverges at the cent
//! level for non-round subtotals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::TaxComponent;

/// Compute the tax breakdown for a subtotal.
///
/// Disabled GST yields an empty breakdown. A zero subtotal yields two zero
/// components — not an error.
pub fn compute_tax(subtotal: Decimal, gst_enabled: bool) -> Vec<TaxComponent> {
    if !gst_enabled {
        return Vec::new();
    }

    let component = round2(subtotal * dec!(0.09));
    vec![
        TaxComponent {
            label: "SGST 9%".to_string(),
            rate: dec!(9),
            amount: component,
        },
        TaxComponent {
            label: "CGST 9%".to_string(),
            rate: dec!(9),
            amount: component,
        },
    ]
}

/// Round a Decimal to 2 decimal places using half-up (commercial rounding).
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
