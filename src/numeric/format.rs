//! Display formatting for numeric values

use super::value::NumericValue;
use crate::constants::{BILLION, MAX_PRECISION, MILLION, THOUSAND, TRILLION, ZERO_DISPLAY};

/// Enough places to hold the exact decimal expansion of any finite f64
const EXACT_PLACES: usize = 1100;

/// Magnitude tiers, most significant first: (threshold, suffix, decimals)
const COMPACT_TIERS: &[(f64, &str, usize)] = &[
    (TRILLION, "T", 2),
    (BILLION, "B", 2),
    (MILLION, "M", 2),
    (THOUSAND, "K", 1),
];

/// Format a value compactly, e.g. `1500` as `1.5K` and `2_500_000` as `2.50M`.
///
/// Values below one thousand keep two decimals, or four when strictly
/// between -1 and 1 so small fractions such as funding rates stay readable.
/// Missing or non-numeric input renders as `0.00`.
pub fn format_compact(value: impl Into<NumericValue>) -> String {
    let n = match value.into().to_finite() {
        Some(n) if n != 0.0 => n,
        _ => return ZERO_DISPLAY.to_string(),
    };

    let sign = if n < 0.0 { "-" } else { "" };
    let abs = n.abs();

    for &(threshold, suffix, decimals) in COMPACT_TIERS {
        if abs >= threshold {
            return format!("{}{}{}", sign, round_fixed(abs / threshold, decimals), suffix);
        }
    }

    let decimals = if abs < 1.0 { 4 } else { 2 };
    format!("{}{}", sign, round_fixed(abs, decimals))
}

/// Fixed-point formatting with the given number of decimals.
///
/// Ties round away from zero. Precision is capped at `MAX_PRECISION`, and
/// non-numeric input renders as `0.00` whatever the precision.
pub fn format_fixed(value: impl Into<NumericValue>, precision: usize) -> String {
    match value.into().to_finite() {
        Some(n) => {
            let sign = if n < 0.0 { "-" } else { "" };
            format!("{}{}", sign, round_fixed(n.abs(), precision.min(MAX_PRECISION)))
        }
        None => ZERO_DISPLAY.to_string(),
    }
}

/// `format_fixed` at the default precision of two decimals
pub fn format_fixed2(value: impl Into<NumericValue>) -> String {
    format_fixed(value, crate::constants::DEFAULT_PRECISION)
}

/// Render a non-negative value with `decimals` places, rounding half up.
///
/// The decision digit is read from the exact decimal expansion of `abs`, so
/// an exact binary tie such as `0.125` goes up while `1.005` (stored just
/// below) goes down.
fn round_fixed(abs: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", EXACT_PLACES, abs);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|&d| d >= b'5');

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut out: String = digits[..split].iter().map(|&d| d as char).collect();
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| d as char));
    }
    out
}
