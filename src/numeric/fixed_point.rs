// ============================================================================
// Fixed-Point Decimal
// Arbitrary-precision fixed-point arithmetic with per-value scale
// ============================================================================

use super::config::{FormatOptions, ParseMode, Rounding};
use super::errors::{NumericError, NumericResult};
use super::format;
use super::operand::Operand;
use super::parse;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Largest scale a `rust_decimal::Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Fixed-point decimal number with a runtime scale.
///
/// Stores `magnitude = value × 10^scale` as an arbitrary-precision integer,
/// so on-chain amounts (routinely above 10^18) never overflow. Every value
/// carries its own scale, and operations between values of different scales
/// align them first.
///
/// Values are immutable: every operation returns a new instance.
///
/// # Precision policy
/// Changing to a smaller scale always truncates toward zero, never rounds.
/// `mul_div` with `Rounding::Up` is the only operation that rounds up.
///
/// # Example
/// ```
/// use token_decimal::numeric::FixedPointDecimal;
///
/// let price = FixedPointDecimal::from_string("1.25", None);      // scale 2
/// let amount = FixedPointDecimal::from_magnitude(3_000_000, 6);  // 3.000000
/// let total = price.mul(&amount);                                // scale 8
/// assert_eq!(total.to_string(), "3.75");
/// assert_eq!(total.to_integer(Some(6)).to_string(), "3750000");
/// ```
#[derive(Clone)]
pub struct FixedPointDecimal {
    magnitude: BigInt,
    scale: u32,
}

/// Token amounts are the primary use of the type.
pub type TokenValue = FixedPointDecimal;

/// Compute 10^n
fn pow10(n: u32) -> BigInt {
    BigInt::from(10u8).pow(n)
}

/// Non-negative remainder of `dividend` by a positive `modulus`.
fn remainder(dividend: &BigInt, modulus: &BigInt) -> NumericResult<BigInt> {
    if modulus.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    if modulus.is_negative() {
        return Err(NumericError::NegativeModulus);
    }

    let r = dividend % modulus;
    Ok(if r.is_negative() { r + modulus } else { r })
}

impl FixedPointDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse user text leniently.
    ///
    /// The input is trimmed. With `scale == None` the scale is the number of
    /// digits after the decimal point. Extra fractional digits are truncated,
    /// missing ones are zero-padded.
    ///
    /// Text that is not a numeral becomes zero at the requested scale (or
    /// scale 0). Use [`parse_strict`](Self::parse_strict) to reject it instead.
    pub fn from_string(value: &str, scale: Option<u32>) -> Self {
        let (magnitude, scale) = parse::parse_lenient(value, scale);
        Self { magnitude, scale }
    }

    /// Parse text, rejecting anything that is not a numeral.
    ///
    /// # Errors
    /// Returns `InvalidInput` for malformed text.
    pub fn parse_strict(value: &str, scale: Option<u32>) -> NumericResult<Self> {
        let (magnitude, scale) = parse::parse_strict(value, scale)?;
        Ok(Self { magnitude, scale })
    }

    /// Parse text under an explicit [`ParseMode`].
    ///
    /// # Errors
    /// Returns `InvalidInput` for malformed text in `ParseMode::Strict`.
    pub fn parse_with(value: &str, scale: Option<u32>, mode: ParseMode) -> NumericResult<Self> {
        match mode {
            ParseMode::Lenient => Ok(Self::from_string(value, scale)),
            ParseMode::Strict => Self::parse_strict(value, scale),
        }
    }

    /// Wrap a raw scaled integer, e.g. a token balance returned by a contract.
    #[inline]
    pub fn from_magnitude(magnitude: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            magnitude: magnitude.into(),
            scale,
        }
    }

    /// Wrap a raw scaled integer whose scale may be unknown.
    ///
    /// A bare integer carries no decimal information, so the scale is
    /// mandatory.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `scale` is `None`.
    pub fn try_from_magnitude(
        magnitude: impl Into<BigInt>,
        scale: Option<u32>,
    ) -> NumericResult<Self> {
        let scale = scale.ok_or(NumericError::InvalidArgument)?;
        Ok(Self::from_magnitude(magnitude, scale))
    }

    /// Create a whole number at scale 0.
    #[inline]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::from_magnitude(value, 0)
    }

    /// Zero at the given scale.
    #[inline]
    pub fn zero(scale: u32) -> Self {
        Self::from_magnitude(BigInt::zero(), scale)
    }

    /// One at scale 0.
    #[inline]
    pub fn one() -> Self {
        Self::from_magnitude(BigInt::one(), 0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of implied decimal digits.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The scaled integer (`value × 10^scale`).
    #[inline]
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    /// The scaled integer at the value's own scale, or at `scale` if given.
    ///
    /// This is what gets handed to a contract call expecting a fixed number
    /// of decimals. Re-expressing at a smaller scale truncates.
    pub fn to_integer(&self, scale: Option<u32>) -> BigInt {
        match scale {
            Some(scale) if scale != self.scale => self.rescale(scale).magnitude,
            _ => self.magnitude.clone(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    /// Strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    /// Zero or greater.
    #[inline]
    pub fn is_non_negative(&self) -> bool {
        !self.magnitude.is_negative()
    }

    // ========================================================================
    // Scale
    // ========================================================================

    /// Re-express the value at `scale`.
    ///
    /// Growing the scale is exact. Shrinking it drops the excess fractional
    /// digits (truncation toward zero), the same result as rendering the
    /// value, cutting the fraction and parsing it back.
    pub fn rescale(&self, scale: u32) -> Self {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self {
                magnitude: &self.magnitude * pow10(scale - self.scale),
                scale,
            },
            Ordering::Less => {
                let divisor = pow10(self.scale - scale);
                let magnitude = &self.magnitude / &divisor;
                if tracing::enabled!(tracing::Level::TRACE) && &magnitude * &divisor != self.magnitude
                {
                    tracing::trace!(
                        value = %self,
                        from = self.scale,
                        to = scale,
                        "rescale discarded fractional digits"
                    );
                }
                Self { magnitude, scale }
            },
        }
    }

    /// The same value at the smallest scale that represents it exactly.
    pub fn normalize(&self) -> Self {
        if self.magnitude.is_zero() {
            return Self::zero(0);
        }

        let ten = BigInt::from(10u8);
        let mut magnitude = self.magnitude.clone();
        let mut scale = self.scale;
        while scale > 0 && (&magnitude % &ten).is_zero() {
            magnitude /= &ten;
            scale -= 1;
        }
        Self { magnitude, scale }
    }

    /// Magnitudes of both operands at the larger of their scales.
    fn aligned(&self, rhs: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(rhs.scale);
        (
            self.rescale(scale).magnitude,
            rhs.rescale(scale).magnitude,
            scale,
        )
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render as text.
    ///
    /// # Example
    /// ```
    /// use token_decimal::numeric::{FixedPointDecimal, FormatOptions};
    ///
    /// let x = FixedPointDecimal::from_string("1234567.891", None);
    /// assert_eq!(x.to_string_with(FormatOptions::new().decimals(2).group_digits(true)), "1,234,567.89");
    /// assert_eq!(x.to_string_with(FormatOptions::new().decimals(5).trim(false)), "1234567.89100");
    /// ```
    pub fn to_string_with(&self, options: FormatOptions) -> String {
        format::render(&self.magnitude, self.scale, &options)
    }

    /// Approximate `f64` value.
    ///
    /// Only for places where precision does not matter (charts, sorting
    /// heuristics). Convert the other side to a decimal for real arithmetic.
    pub fn to_f64_lossy(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare after aligning both operands to the larger scale.
    pub fn compare<'a>(&self, rhs: impl Into<Operand<'a>>) -> Ordering {
        let rhs: Operand<'a> = rhs.into();
        self.cmp_aligned(&rhs)
    }

    fn cmp_aligned(&self, rhs: &Self) -> Ordering {
        if self.scale == rhs.scale {
            return self.magnitude.cmp(&rhs.magnitude);
        }
        let (lhs, rhs, _) = self.aligned(rhs);
        lhs.cmp(&rhs)
    }

    pub fn is_eq<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare(rhs) == Ordering::Equal
    }

    pub fn is_gt<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare(rhs) == Ordering::Greater
    }

    pub fn is_gte<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare(rhs) != Ordering::Less
    }

    pub fn is_lt<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare(rhs) == Ordering::Less
    }

    pub fn is_lte<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        self.compare(rhs) != Ordering::Greater
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Sum at the larger of the two scales.
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Self {
        let rhs: Operand<'a> = rhs.into();
        self.add_aligned(&rhs)
    }

    fn add_aligned(&self, rhs: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned(rhs);
        Self {
            magnitude: lhs + rhs,
            scale,
        }
    }

    /// Difference at the larger of the two scales.
    pub fn sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Self {
        let rhs: Operand<'a> = rhs.into();
        self.sub_aligned(&rhs)
    }

    fn sub_aligned(&self, rhs: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned(rhs);
        Self {
            magnitude: lhs - rhs,
            scale,
        }
    }

    /// Exact product. The result scale is the sum of both scales.
    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Self {
        let rhs: Operand<'a> = rhs.into();
        self.mul_exact(&rhs)
    }

    fn mul_exact(&self, rhs: &Self) -> Self {
        Self {
            magnitude: &self.magnitude * &rhs.magnitude,
            scale: self.scale + rhs.scale,
        }
    }

    /// Quotient at the sum of both scales, truncated toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        let rhs: Operand<'a> = rhs.into();
        let scale = self.scale + rhs.scale;
        self.div_at(&rhs, scale)
    }

    /// Quotient at an explicit output scale, truncated toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div_with_scale<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        scale: u32,
    ) -> NumericResult<Self> {
        let rhs: Operand<'a> = rhs.into();
        self.div_at(&rhs, scale)
    }

    fn div_at(&self, rhs: &Self, scale: u32) -> NumericResult<Self> {
        if rhs.magnitude.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        // Pad the numerator so the integer quotient lands at `scale`
        let numerator = self.rescale(scale + rhs.scale);
        Ok(Self {
            magnitude: numerator.magnitude / &rhs.magnitude,
            scale,
        })
    }

    /// Remainder of the raw magnitudes, at this value's scale.
    ///
    /// The operands are not aligned first: `1.5 mod 1` works on `15 mod 1`.
    /// Callers must bring both sides to a common scale themselves. The
    /// remainder is never negative.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `NegativeModulus` if `rhs` is negative
    pub fn modulo<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        let rhs: Operand<'a> = rhs.into();
        Ok(Self {
            magnitude: remainder(&self.magnitude, &rhs.magnitude)?,
            scale: self.scale,
        })
    }

    /// `(self × value) mod denominator` on raw magnitudes, at this value's scale.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `NegativeModulus` if `denominator` is negative
    pub fn mul_mod<'a, 'b>(
        &self,
        value: impl Into<Operand<'a>>,
        denominator: impl Into<Operand<'b>>,
    ) -> NumericResult<Self> {
        let value: Operand<'a> = value.into();
        let denominator: Operand<'b> = denominator.into();
        let product = &self.magnitude * &value.magnitude;
        Ok(Self {
            magnitude: remainder(&product, &denominator.magnitude)?,
            scale: self.scale,
        })
    }

    /// `(self × value) / denominator` on raw magnitudes, at this value's scale.
    ///
    /// The quotient is truncated toward zero. With `Rounding::Up` one unit is
    /// added whenever the division leaves a remainder.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `NegativeModulus` if rounding up with a negative `denominator`
    pub fn mul_div<'a, 'b>(
        &self,
        value: impl Into<Operand<'a>>,
        denominator: impl Into<Operand<'b>>,
        rounding: Rounding,
    ) -> NumericResult<Self> {
        let value: Operand<'a> = value.into();
        let denominator: Operand<'b> = denominator.into();
        if denominator.magnitude.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let product = &self.magnitude * &value.magnitude;
        let mut magnitude = &product / &denominator.magnitude;
        if rounding == Rounding::Up && !remainder(&product, &denominator.magnitude)?.is_zero() {
            magnitude += BigInt::one();
        }

        Ok(Self {
            magnitude,
            scale: self.scale,
        })
    }

    /// Raise to a non-negative integer power by repeated multiplication.
    ///
    /// The scale compounds: `x.pow(n)` has scale `n × x.scale()`.
    /// `x.pow(0)` is one at scale 0 and a zero base gives zero at scale 0.
    pub fn pow(&self, n: u32) -> Self {
        match n {
            0 => Self::one(),
            1 => self.clone(),
            _ if self.is_zero() => Self::zero(0),
            _ => {
                let mut acc = self.clone();
                for _ in 1..n {
                    acc = acc.mul_exact(self);
                }
                acc
            },
        }
    }

    /// Get absolute value.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            Self {
                magnitude: -&self.magnitude,
                scale: self.scale,
            }
        } else {
            self.clone()
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for FixedPointDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero(0)
    }
}

impl PartialEq for FixedPointDecimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp_aligned(other) == Ordering::Equal
    }
}

impl Eq for FixedPointDecimal {}

impl PartialOrd for FixedPointDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_aligned(other))
    }
}

impl Ord for FixedPointDecimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_aligned(other)
    }
}

// Values equal across scales must hash alike
impl Hash for FixedPointDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.magnitude.hash(state);
        normalized.scale.hash(state);
    }
}

impl std::ops::Neg for FixedPointDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            magnitude: -self.magnitude,
            scale: self.scale,
        }
    }
}

impl std::ops::Neg for &FixedPointDecimal {
    type Output = FixedPointDecimal;

    #[inline]
    fn neg(self) -> Self::Output {
        FixedPointDecimal {
            magnitude: -&self.magnitude,
            scale: self.scale,
        }
    }
}

impl std::ops::Add for FixedPointDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_aligned(&rhs)
    }
}

impl std::ops::Add for &FixedPointDecimal {
    type Output = FixedPointDecimal;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_aligned(rhs)
    }
}

impl std::ops::Sub for FixedPointDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_aligned(&rhs)
    }
}

impl std::ops::Sub for &FixedPointDecimal {
    type Output = FixedPointDecimal;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_aligned(rhs)
    }
}

impl std::ops::Mul for FixedPointDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_exact(&rhs)
    }
}

impl std::ops::Mul for &FixedPointDecimal {
    type Output = FixedPointDecimal;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_exact(rhs)
    }
}

impl std::iter::Sum for FixedPointDecimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, x| acc.add_aligned(&x))
    }
}

impl<'a> std::iter::Sum<&'a FixedPointDecimal> for FixedPointDecimal {
    fn sum<I: Iterator<Item = &'a FixedPointDecimal>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, x| acc.add_aligned(x))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedPointDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedPointDecimal({}, magnitude={}, scale={})",
            self, self.magnitude, self.scale
        )
    }
}

impl fmt::Display for FixedPointDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_with(FormatOptions::default()))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for FixedPointDecimal {
    type Err = NumericError;

    /// Strict parse with the scale inferred from the fractional digits.
    ///
    /// # Examples
    /// - "123" -> 123 (scale 0)
    /// - "123.450" -> 123.45 (scale 3)
    /// - "-0.001" -> -0.001 (scale 3)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s, None)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl FixedPointDecimal {
    /// Convert from rust_decimal::Decimal, keeping its scale.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self {
            magnitude: BigInt::from(d.mantissa()),
            scale: d.scale(),
        }
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if more than 28 significant fractional digits remain
    /// - `Overflow` if the magnitude does not fit 96 bits
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let value = if self.scale > MAX_DECIMAL_SCALE {
            let normalized = self.normalize();
            if normalized.scale > MAX_DECIMAL_SCALE {
                return Err(NumericError::PrecisionLoss);
            }
            normalized
        } else {
            self.clone()
        };

        let mantissa = value.magnitude.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, value.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

impl From<rust_decimal::Decimal> for FixedPointDecimal {
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::from_decimal(d)
    }
}

// ============================================================================
// Tests
// ============================================================================
