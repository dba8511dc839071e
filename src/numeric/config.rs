// ============================================================================
// Decimal Configuration
// Formatting, parsing and rounding options for fixed-point decimals
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Formatting
// ============================================================================

/// Controls how a decimal is rendered as text.
///
/// The default renders at the value's own scale, strips trailing zeros and
/// does not group digits, which yields the shortest string that parses back
/// to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Number of fractional digits to render (truncating).
    /// `None` renders at the value's own scale.
    pub decimals: Option<u32>,

    /// Strip trailing fractional zeros and a bare trailing decimal point
    pub trim: bool,

    /// Insert `,` between every three digits of the integer part
    pub group_digits: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: None,
            trim: true,
            group_digits: false,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render with exactly `decimals` fractional digits before trimming.
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn group_digits(mut self, group_digits: bool) -> Self {
        self.group_digits = group_digits;
        self
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// How malformed numerals are handled during construction from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseMode {
    /// Malformed input becomes zero.
    /// Used for free-text user input, where validation happens elsewhere.
    #[default]
    Lenient,

    /// Malformed input is rejected with `NumericError::InvalidInput`
    Strict,
}

// ============================================================================
// Rounding
// ============================================================================

/// Rounding applied by `mul_div` when the quotient is inexact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Truncate toward zero
    #[default]
    Down,

    /// Add one unit in the last place when there is a remainder
    Up,
}
