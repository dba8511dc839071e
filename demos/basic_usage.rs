// ============================================================================
// Basic Usage Example
// ============================================================================

use token_decimal::prelude::*;

fn main() -> Result<(), NumericError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Token Decimal Example ===\n");

    // Balances as decoded from contracts
    let usdc_reserve = TokenValue::from_magnitude(2_000_000_000_000u64, 6);
    let weth_reserve = TokenValue::from_magnitude(1_000_000_000_000_000_000_000u128, 18);
    println!("USDC reserve: {}", usdc_reserve);
    println!("WETH reserve: {}\n", weth_reserve);

    // User input, scale inferred from the text
    let amount_in = TokenValue::from_string("2500.50", None);
    println!("Swapping {} USDC", amount_in);

    // Malformed input degrades to zero (logged at debug level)
    let typo = TokenValue::from_string("25OO", None);
    println!("Malformed input parsed as {}\n", typo);

    // Constant-product quote with a 0.3% fee, rounded down
    let in_with_fee = amount_in.rescale(6).mul("997");
    let numerator = in_with_fee.mul(&weth_reserve);
    let denominator = usdc_reserve.mul("1000").add(&in_with_fee);
    let amount_out = numerator.div_with_scale(&denominator, 18)?;
    println!("Quote: {} WETH", amount_out);
    println!(
        "Quote (display): {} WETH",
        amount_out.to_string_with(FormatOptions::new().decimals(6))
    );
    println!("Quote (wei): {}\n", amount_out.to_integer(Some(18)));

    // Minimum received with 0.5% slippage, rounded up in the pool's favour
    let min_out = amount_out.mul_div("995", "1000", Rounding::Up)?;
    println!("Minimum received: {} WETH", min_out);

    let price = usdc_reserve.div_with_scale(&weth_reserve, 2)?;
    println!(
        "Spot price: {} USDC/WETH",
        price.to_string_with(FormatOptions::new().group_digits(true))
    );

    // Dropping digits below the requested scale is logged at trace level
    println!("Truncated to 4 decimals: {}", amount_out.rescale(4));

    println!("\n=== Example Complete ===");
    Ok(())
}
