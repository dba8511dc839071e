// ============================================================================
// Property Tests
// Invariants of FixedPointDecimal under generated inputs
// ============================================================================

use num_bigint::BigInt;
use proptest::prelude::*;
use quickcheck::quickcheck;
use token_decimal::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Numeral text without leading zeros or a negative zero: (text, fraction digits)
fn numeral_strategy() -> impl Strategy<Value = (String, usize)> {
    (
        any::<bool>(),
        prop_oneof!["0", "[1-9][0-9]{0,29}"],
        "[0-9]{0,20}",
    )
        .prop_map(|(negative, integer, fraction)| {
            let all_zero = integer == "0" && fraction.bytes().all(|b| b == b'0');
            let mut text = String::new();
            if negative && !all_zero {
                text.push('-');
            }
            text.push_str(&integer);
            if !fraction.is_empty() {
                text.push('.');
                text.push_str(&fraction);
            }
            (text, fraction.len())
        })
}

fn decimal_strategy() -> impl Strategy<Value = TokenValue> {
    numeral_strategy().prop_map(|(text, _)| TokenValue::from_string(&text, None))
}

fn small_decimal_strategy() -> impl Strategy<Value = TokenValue> {
    (any::<i32>(), 0u32..=9).prop_map(|(m, s)| TokenValue::from_magnitude(m, s))
}

proptest! {
    #[test]
    fn prop_round_trip_at_fixed_decimals(
        (text, fraction_len) in numeral_strategy(),
        extra in 0usize..6,
    ) {
        let d = fraction_len + extra;
        let x = TokenValue::from_string(&text, Some(d as u32));
        let rendered = x.to_string_with(FormatOptions::new().decimals(d as u32).trim(false));

        let mut expected = text.clone();
        if d > 0 {
            if fraction_len == 0 {
                expected.push('.');
            }
            expected.push_str(&"0".repeat(extra));
        }
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn prop_truncation_never_rounds_up(
        (text, fraction_len) in numeral_strategy(),
    ) {
        prop_assume!(fraction_len > 0);
        let keep = fraction_len / 2;
        let x = TokenValue::from_string(&text, None);
        let cut = TokenValue::from_string(&text, Some(keep as u32));

        // Truncation moves toward zero
        prop_assert!(cut.abs() <= x.abs());
        // and drops less than one unit in the last kept place
        let unit = TokenValue::from_magnitude(1, keep as u32);
        prop_assert!(x.sub(&cut).abs() < unit);
    }

    #[test]
    fn prop_mul_sums_scales_exactly(
        a in small_decimal_strategy(),
        b in small_decimal_strategy(),
    ) {
        let product = a.mul(&b);
        prop_assert_eq!(product.scale(), a.scale() + b.scale());

        let expected = a.to_decimal().unwrap() * b.to_decimal().unwrap();
        prop_assert_eq!(product.to_decimal().unwrap(), expected);
    }

    #[test]
    fn prop_comparison_scale_invariant(x in decimal_strategy(), extra in 0u32..10) {
        let wider = x.rescale(x.scale() + extra);
        prop_assert!(x.is_eq(&wider));
        prop_assert_eq!(&x, &wider);
        prop_assert!(x.is_gte(&wider) && x.is_lte(&wider));
        prop_assert!(!x.is_gt(&wider) && !x.is_lt(&wider));
    }

    #[test]
    fn prop_add_sub_inverse(a in decimal_strategy(), b in decimal_strategy()) {
        let sum = a.add(&b);
        prop_assert_eq!(sum.scale(), a.scale().max(b.scale()));
        prop_assert_eq!(sum.sub(&b), a);
    }

    #[test]
    fn prop_ordering_antisymmetric(a in decimal_strategy(), b in decimal_strategy()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.is_lt(&b), b.is_gt(&a));
    }

    #[test]
    fn prop_mul_div_rounding_differs_by_remainder(
        a in 0i64..1_000_000_000,
        b in 0i64..1_000_000,
        d in 1i64..1_000_000,
    ) {
        let x = TokenValue::from_integer(a);
        let y = TokenValue::from_integer(b);
        let z = TokenValue::from_integer(d);

        let down = x.mul_div(&y, &z, Rounding::Down).unwrap();
        let up = x.mul_div(&y, &z, Rounding::Up).unwrap();
        let rem = x.mul_mod(&y, &z).unwrap();

        let step = up.magnitude() - down.magnitude();
        if rem.is_zero() {
            prop_assert_eq!(step, BigInt::from(0));
        } else {
            prop_assert_eq!(step, BigInt::from(1));
        }
        prop_assert_eq!(
            down.magnitude() * &BigInt::from(d) + rem.magnitude(),
            BigInt::from(a) * BigInt::from(b)
        );
    }

    #[test]
    fn prop_pow_zero_is_one(x in decimal_strategy()) {
        let one = x.pow(0);
        prop_assert_eq!(one.scale(), 0);
        prop_assert_eq!(one.magnitude(), &BigInt::from(1));
    }

    #[test]
    fn prop_pow_compounds_scale(x in small_decimal_strategy(), n in 2u32..5) {
        prop_assume!(!x.is_zero());
        let p = x.pow(n);
        prop_assert_eq!(p.scale(), x.scale() * n);
        prop_assert_eq!(p.magnitude(), &x.magnitude().pow(n));
    }

    #[test]
    fn prop_format_idempotent(x in decimal_strategy()) {
        let once = x.to_string();
        let twice = TokenValue::from_string(&once, None).to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_division_by_zero_is_reported(x in decimal_strategy(), scale in 0u32..20) {
        prop_assert_eq!(x.div(&TokenValue::zero(scale)), Err(NumericError::DivisionByZero));
        prop_assert_eq!(x.modulo(&TokenValue::zero(scale)), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn prop_div_inverts_mul(a in small_decimal_strategy(), b in small_decimal_strategy()) {
        prop_assume!(!b.is_zero());
        // At the product's scale the quotient is exact
        let product = a.mul(&b);
        let back = product.div_with_scale(&b, a.scale()).unwrap();
        prop_assert_eq!(back, a);
    }
}

// ============================================================================
// QuickCheck
// ============================================================================

quickcheck! {
    fn qc_add_commutative(a: i64, sa: u8, b: i64, sb: u8) -> bool {
        let x = TokenValue::from_magnitude(a, u32::from(sa % 24));
        let y = TokenValue::from_magnitude(b, u32::from(sb % 24));
        x.add(&y) == y.add(&x)
    }

    fn qc_grouping_is_cosmetic(m: i64, s: u8) -> bool {
        let x = TokenValue::from_magnitude(m, u32::from(s % 12));
        let grouped = x.to_string_with(FormatOptions::new().group_digits(true));
        grouped.replace(',', "") == x.to_string()
    }

    fn qc_to_integer_rescale(m: i64, s: u8, t: u8) -> bool {
        let x = TokenValue::from_magnitude(m, u32::from(s % 20));
        let target = u32::from(t % 20);
        TokenValue::from_magnitude(x.to_integer(Some(target)), target) == x.rescale(target)
    }
}
