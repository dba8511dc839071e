// ============================================================================
// Numeric Module
// Arbitrary-precision fixed-point decimals for on-chain token amounts
// ============================================================================
//
// This module provides:
// - FixedPointDecimal: decimal with a per-value scale over a BigInt magnitude
// - Operand: coercion of decimals and numeral strings into operands
// - FormatOptions / ParseMode / Rounding: rendering, parsing, rounding policy
// - NumericError: Error types for parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - Immutable values, every operation returns a new instance
// - Truncation toward zero whenever digits are dropped
// - Fallible arithmetic (division, remainder) returns Result, nothing panics

mod config;
mod errors;
mod fixed_point;
mod format;
mod operand;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;

pub use config::{FormatOptions, ParseMode, Rounding};
pub use errors::{NumericError, NumericResult};
pub use fixed_point::{FixedPointDecimal, TokenValue};
pub use operand::Operand;
