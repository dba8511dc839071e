// ============================================================================
// Numeric Errors
// Error types for fixed-point decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur while building or operating on decimal values.
///
/// Malformed numerals are deliberately absent from the lenient construction
/// path: `FixedPointDecimal::from_string` coerces them to zero. Only the strict
/// parser reports `InvalidInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A required argument (the scale of a raw magnitude) was not supplied
    InvalidArgument,
    /// Input string is not a decimal numeral
    InvalidInput,
    /// Attempted division or remainder by zero
    DivisionByZero,
    /// Remainder requested with a negative modulus
    NegativeModulus,
    /// Value does not fit the target representation
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidArgument => {
                write!(f, "invalid argument: scale must be provided for a raw magnitude")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeModulus => {
                write!(f, "negative modulus: remainder requires a positive divisor")
            },
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
