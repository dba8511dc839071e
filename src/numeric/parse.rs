// ============================================================================
// Numeral Parsing
// Decimal numeral grammar shared by the lenient and strict constructors
// ============================================================================
//
// Grammar (after trimming surrounding whitespace):
//
//   numeral  = [ "+" | "-" ] integer [ "." fraction ]
//   integer  = digit*
//   fraction = digit*
//
// with at least one digit overall. "5.", ".5" and "-.5" are accepted;
// exponents, hex prefixes and "Infinity" are not.

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_traits::Zero;

/// A syntactically valid numeral split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Numeral<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> Numeral<'a> {
    /// Split a trimmed numeral into sign, integer digits and fractional digits.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the text does not follow the grammar.
    pub(crate) fn parse(input: &'a str) -> NumericResult<Self> {
        let (negative, unsigned) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() && fraction.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(NumericError::InvalidInput);
        }
        if u32::try_from(fraction.len()).is_err() {
            return Err(NumericError::InvalidInput);
        }

        Ok(Self {
            negative,
            integer,
            fraction,
        })
    }

    /// Number of digits after the decimal point.
    pub(crate) fn inferred_scale(&self) -> u32 {
        // Bounded by the length check in `parse`
        self.fraction.len() as u32
    }

    /// Scaled integer at `scale`, truncating or zero-padding the fraction.
    pub(crate) fn to_magnitude(&self, scale: u32) -> BigInt {
        let scale = scale as usize;
        let mut digits = String::with_capacity(self.integer.len() + scale);
        digits.push_str(self.integer);

        if self.fraction.len() >= scale {
            digits.push_str(&self.fraction[..scale]);
        } else {
            digits.push_str(self.fraction);
            digits.extend(std::iter::repeat('0').take(scale - self.fraction.len()));
        }

        // Digits were validated in `parse`, so only the empty case yields None
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).unwrap_or_else(BigInt::zero);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Parse `value` into `(magnitude, scale)`, rejecting malformed numerals.
///
/// With `scale == None` the scale is inferred from the fractional digit count.
///
/// # Errors
/// Returns `InvalidInput` if the trimmed text is not a numeral.
pub(crate) fn parse_strict(value: &str, scale: Option<u32>) -> NumericResult<(BigInt, u32)> {
    let numeral = Numeral::parse(value.trim())?;
    let scale = scale.unwrap_or_else(|| numeral.inferred_scale());
    Ok((numeral.to_magnitude(scale), scale))
}

/// Parse `value` into `(magnitude, scale)`, coercing malformed numerals to
/// zero at the requested scale (or scale 0 when none was requested).
pub(crate) fn parse_lenient(value: &str, scale: Option<u32>) -> (BigInt, u32) {
    parse_strict(value, scale).unwrap_or_else(|_| {
        let input = value.trim();
        tracing::debug!(input, "malformed numeral coerced to zero");
        (BigInt::zero(), scale.unwrap_or(0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(value: &str, scale: Option<u32>) -> (String, u32) {
        let (m, s) = parse_strict(value, scale).unwrap();
        (m.to_string(), s)
    }

    #[test]
    fn test_numeral_parts() {
        let n = Numeral::parse("-12.340").unwrap();
        assert!(n.negative);
        assert_eq!(n.integer, "12");
        assert_eq!(n.fraction, "340");
        assert_eq!(n.inferred_scale(), 3);
    }

    #[test]
    fn test_accepts_partial_forms() {
        assert_eq!(magnitude("5.", None), ("5".to_string(), 0));
        assert_eq!(magnitude(".5", None), ("5".to_string(), 1));
        assert_eq!(magnitude("-.5", None), ("-5".to_string(), 1));
        assert_eq!(magnitude("+7.25", None), ("725".to_string(), 2));
        assert_eq!(magnitude("  42  ", None), ("42".to_string(), 0));
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "", " ", ".", "-", "+", "abc", "1.2.3", "1e5", "0x10", "Infinity", "1 000",
            "--1", "1-",
        ] {
            assert_eq!(
                Numeral::parse(input.trim()),
                Err(NumericError::InvalidInput),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_truncates_and_pads() {
        assert_eq!(magnitude("1.239", Some(2)), ("123".to_string(), 2));
        assert_eq!(magnitude("-1.239", Some(2)), ("-123".to_string(), 2));
        assert_eq!(magnitude("1.2", Some(4)), ("12000".to_string(), 4));
        assert_eq!(magnitude("9.99", Some(0)), ("9".to_string(), 0));
    }

    #[test]
    fn test_lenient_fallback() {
        let (m, s) = parse_lenient("not a number", None);
        assert!(m.is_zero());
        assert_eq!(s, 0);

        let (m, s) = parse_lenient("", Some(6));
        assert!(m.is_zero());
        assert_eq!(s, 6);
    }

    #[test]
    fn test_strict_rejects() {
        assert_eq!(
            parse_strict("1,000", None),
            Err(NumericError::InvalidInput)
        );
    }
}
