//! Amounts in words for statutory invoice display.
//!
//! Short-scale English without group commas, hyphenated tens, uppercased
//! with a trailing "ONLY": `11800` becomes `"ELEVEN THOUSAND EIGHT HUNDRED
//! ONLY"`. The amount is rounded half-up to a whole rupee first.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const BELOW_TWENTY: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 4] = [
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Convert an amount to uppercase English words with a trailing "ONLY".
///
/// Rounds half-up to the nearest whole unit. Negative amounts (unreachable
/// from the computation pass) are prefixed with "MINUS".
pub fn amount_in_words(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    // Totals always fit u64 once the sign is stripped; saturate defensively.
    let whole = rounded.abs().to_u64().unwrap_or(u64::MAX);

    let words = spell(whole);
    let mut out = String::new();
    if negative {
        out.push_str("minus ");
    }
    out.push_str(&words);
    out.push_str(" only");
    out.to_uppercase()
}

fn spell(n: u64) -> String {
    if n < 20 {
        return BELOW_TWENTY[n as usize].to_string();
    }

    for (scale, name) in SCALES {
        if n >= scale {
            let head = spell(n / scale);
            let rest = n % scale;
            return if rest == 0 {
                format!("{head} {name}")
            } else {
                format!("{head} {name} {}", spell(rest))
            };
        }
    }

    if n >= 100 {
        let head = format!("{} hundred", BELOW_TWENTY[(n / 100) as usize]);
        let rest = n % 100;
        return if rest == 0 {
            head
        } else {
            format!("{head} {}", spell(rest))
        };
    }

    // 20..=99
    let tens = TENS[(n / 10) as usize];
    let unit = n % 10;
    if unit == 0 {
        tens.to_string()
    } else {
        format!("{tens}-{}", BELOW_TWENTY[unit as usize])
    }
}
