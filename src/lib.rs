// ============================================================================
// Token Decimal Library
// Arbitrary-precision fixed-point decimals for on-chain token amounts
// ============================================================================

//! # Token Decimal
//!
//! An immutable fixed-point decimal type for token balances, swap quotes and
//! liquidity math, where every value carries its own number of decimals.
//!
//! ## Features
//!
//! - **Arbitrary precision** magnitudes backed by `num-bigint`, so 18-decimal
//!   token amounts never overflow
//! - **Per-value scale** with alignment across mixed-precision operands
//! - **Truncation policy**: digits are dropped toward zero, never rounded,
//!   except for the explicit `Rounding::Up` of `mul_div`
//! - **Lossless integer interop** for contract call encoding and decoding
//! - **Lenient user-input parsing** with an opt-in strict mode
//!
//! ## Example
//!
//! ```rust
//! use token_decimal::prelude::*;
//!
//! // A balance decoded from a contract with 6 decimals
//! let balance = TokenValue::from_magnitude(2_500_000u64, 6);
//!
//! // User input, scale inferred from the text
//! let spend = TokenValue::from_string("1.25", None);
//!
//! let remaining = balance.sub(&spend);
//! assert_eq!(remaining.to_string(), "1.25");
//! assert_eq!(remaining.to_integer(Some(6)).to_string(), "1250000");
//!
//! // Price ratio at 4 decimals, truncated
//! let ratio = remaining.div_with_scale("3", 4).unwrap();
//! assert_eq!(ratio.to_string(), "0.4166");
//!
//! let display = TokenValue::from_string("1234567.891", None)
//!     .to_string_with(FormatOptions::new().decimals(2).group_digits(true));
//! assert_eq!(display, "1,234,567.89");
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        FixedPointDecimal, FormatOptions, NumericError, NumericResult, Operand, ParseMode,
        Rounding, TokenValue,
    };
}
