use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{Duty, DutyNotEligible, DutyStatus, ItemDraft, round2};

/// SAC code for rental services of transport vehicles with operators.
pub const TRANSPORT_HSN_SAC: &str = "996601";

/// Convert a completed, not-yet-billed duty into one prefilled billing line.
///
/// The line carries `quantity = 1` and `rate = round2(distance × rate/km)`,
/// with missing distance or rate falling back to zero. It is a draft: it
/// flows through the same validation boundary as form rows, so a zero-rate
/// conversion is rejected at compute time rather than silently billed.
pub fn convert(duty: &Duty) -> Result<ItemDraft, DutyNotEligible> {
    if duty.status != DutyStatus::Completed {
        return Err(DutyNotEligible::NotCompleted(duty.status));
    }
    if duty.is_billed {
        return Err(DutyNotEligible::AlreadyBilled);
    }

    let distance = duty.distance_traveled.unwrap_or(Decimal::ZERO);
    let rate_per_km = duty.rate_per_km.unwrap_or(Decimal::ZERO);

    Ok(ItemDraft::new(
        format!("Hiring Charges for {}", duty.vehicle.vehicle_type),
        TRANSPORT_HSN_SAC,
        "Km",
        dec!(1),
        round2(distance * rate_per_km),
    ))
}
