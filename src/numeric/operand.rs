// ============================================================================
// Operand Coercion
// Right-hand sides accepted by the binary decimal operations
// ============================================================================

use super::fixed_point::FixedPointDecimal;
use std::ops::Deref;

/// The right-hand side of a binary decimal operation.
///
/// Lets callers pass either a decimal (owned or borrowed) or a numeral
/// string. Strings go through the lenient parser with an inferred scale, so
/// `"1.50"` becomes a value at scale 2 and `"abc"` becomes zero.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Borrowed(&'a FixedPointDecimal),
    Owned(FixedPointDecimal),
}

impl Deref for Operand<'_> {
    type Target = FixedPointDecimal;

    fn deref(&self) -> &Self::Target {
        match self {
            Operand::Borrowed(value) => value,
            Operand::Owned(value) => value,
        }
    }
}

impl<'a> From<&'a FixedPointDecimal> for Operand<'a> {
    fn from(value: &'a FixedPointDecimal) -> Self {
        Operand::Borrowed(value)
    }
}

impl From<FixedPointDecimal> for Operand<'_> {
    fn from(value: FixedPointDecimal) -> Self {
        Operand::Owned(value)
    }
}

impl From<&str> for Operand<'_> {
    fn from(value: &str) -> Self {
        Operand::Owned(FixedPointDecimal::from_string(value, None))
    }
}

impl From<&String> for Operand<'_> {
    fn from(value: &String) -> Self {
        Operand::Owned(FixedPointDecimal::from_string(value, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_operand_infers_scale() {
        let operand = Operand::from("1.50");
        assert_eq!(operand.scale(), 2);
        assert_eq!(operand.magnitude().to_string(), "150");
    }

    #[test]
    fn test_malformed_string_operand_is_zero() {
        let operand = Operand::from("n/a");
        assert!(operand.is_zero());
        assert_eq!(operand.scale(), 0);
    }

    #[test]
    fn test_borrowed_operand() {
        let value = FixedPointDecimal::from_magnitude(42, 1);
        let operand = Operand::from(&value);
        assert!(matches!(operand, Operand::Borrowed(_)));
        assert_eq!(*operand, value);
    }
}
