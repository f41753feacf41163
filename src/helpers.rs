//! Small order-flow helpers.

use uuid::Uuid;

/// Default slippage applied by market-order convenience flows (5%).
pub const DEFAULT_SLIPPAGE: f64 = 0.05;

/// Generates a random client order id: 16 random bytes as `0x` + 32 hex chars.
#[must_use]
pub fn random_cloid() -> String {
    format!("0x{}", Uuid::new_v4().simple())
}

/// Adjusts a mark price by slippage in the aggressive direction and trims the
/// result to 5 significant figures, matching the price canonicalizer's cap.
#[must_use]
pub fn slippage_price(is_buy: bool, px: f64, slippage: f64) -> f64 {
    let px = if is_buy {
        px * (1.0 + slippage)
    } else {
        px * (1.0 - slippage)
    };
    // 5 significant figures via scientific notation round-trip.
    format!("{px:.4e}").parse().unwrap_or(px)
}

/// Direction convention for call sites that carry side in the sign of a size:
/// positive means buy. The wire builder itself takes an explicit `is_buy` and
/// the size magnitude.
#[must_use]
pub fn is_buy(signed_size: f64) -> bool {
    signed_size > 0.0
}
