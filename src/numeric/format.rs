// ============================================================================
// Decimal Formatting
// Canonical text rendering for scaled magnitudes
// ============================================================================

use super::config::FormatOptions;
use num_bigint::BigInt;
use num_traits::Signed;

/// Render `magnitude / 10^scale` as text according to `options`.
///
/// The fraction is cut (never rounded) or zero-padded to `options.decimals`
/// digits before trimming. A rendering whose digits are all zero carries no
/// sign, and a value without fractional digits carries no decimal point.
pub(crate) fn render(magnitude: &BigInt, scale: u32, options: &FormatOptions) -> String {
    let scale = scale as usize;
    let digits = magnitude.magnitude().to_string();

    // Guarantee at least one integer digit ahead of the fraction
    let padded = if digits.len() <= scale {
        let mut padded = "0".repeat(scale + 1 - digits.len());
        padded.push_str(&digits);
        padded
    } else {
        digits
    };
    let (integer, full_fraction) = padded.split_at(padded.len() - scale);

    let decimals = options.decimals.map_or(scale, |d| d as usize);
    let mut fraction = if full_fraction.len() >= decimals {
        full_fraction[..decimals].to_owned()
    } else {
        let mut fraction = full_fraction.to_owned();
        fraction.push_str(&"0".repeat(decimals - full_fraction.len()));
        fraction
    };

    if options.trim {
        let kept = fraction.trim_end_matches('0').len();
        fraction.truncate(kept);
    }

    let all_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(integer.len() + fraction.len() + 8);
    if magnitude.is_negative() && !all_zero {
        out.push('-');
    }
    if options.group_digits {
        out.push_str(&group_thousands(integer));
    } else {
        out.push_str(integer);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Insert `,` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
