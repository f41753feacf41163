//! Canonical decimal formatting for prices and sizes.
//!
//! The matching engine rejects values that violate either of two orthogonal
//! rules: a tick ceiling of `max_decimals - sz_decimals` fractional digits,
//! and a flat cap of 5 significant figures; the tighter rule governs. Sizes
//! are bounded by `sz_decimals` alone.
//!
//! Rounding is performed on a [`Decimal`] representation with
//! half-away-from-zero semantics. Multiplying the raw `f64` by `10^n` and
//! rounding that product mis-rounds values near `.5` boundaries because the
//! product is itself not exactly representable.

use rust_decimal::prelude::FromPrimitive as _;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::Result;
use crate::error::Error;

/// Max fractional digits on perpetual markets.
pub const PERP_MAX_DECIMALS: u32 = 6;
/// Max fractional digits on spot markets.
pub const SPOT_MAX_DECIMALS: u32 = 8;

fn to_decimal(x: f64) -> Result<Decimal> {
    Decimal::from_f64(x)
        .ok_or_else(|| Error::numeric(format!("value {x} is not representable as a decimal")))
}

fn round_away(d: Decimal, dp: u32) -> Decimal {
    d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Plain decimal string with trailing zeros and any dangling point stripped.
/// Exact zero formats as `"0"`.
fn trimmed(d: Decimal) -> String {
    d.normalize().to_string()
}

fn digits_before_point(d: Decimal) -> u32 {
    d.abs().trunc().to_string().len() as u32
}

/// Encodes a price per exchange rules: at most 5 significant figures and at
/// most `max_decimals - sz_decimals` fractional digits, whichever is tighter.
/// Integer prices are always valid and returned without a fractional part.
pub fn price_to_wire(px: f64, max_decimals: u32, sz_decimals: u32) -> Result<String> {
    let d = to_decimal(px)?;
    if d.is_integer() {
        return Ok(trimmed(d.trunc()));
    }

    let allowed_tick = max_decimals as i32 - sz_decimals as i32;

    let abs = px.abs();
    let allowed_sig = if abs >= 1.0 {
        (5 - digits_before_point(d) as i32).max(0)
    } else {
        // The smaller the magnitude, the more decimals 5 significant figures
        // permit: 4 + ceil(-log10(|px|)).
        4 + (-abs.log10()).ceil() as i32
    };

    let allowed = allowed_tick.min(allowed_sig).max(0) as u32;
    let rounded = round_away(d, allowed);
    if rounded.is_zero() {
        return Err(Error::numeric(format!(
            "price {px} rounds to zero at {allowed} decimal places"
        )));
    }
    Ok(trimmed(rounded))
}

/// Encodes an order size, rounding half-away-from-zero to `sz_decimals`
/// fractional digits. Integer sizes (and any size on a `sz_decimals == 0`
/// asset) are emitted as plain integers.
pub fn size_to_wire(sz: f64, sz_decimals: u32) -> Result<String> {
    let d = to_decimal(sz)?;
    if sz_decimals == 0 || d.is_integer() {
        let t = d.trunc();
        if t.is_zero() && !d.is_zero() {
            return Err(Error::numeric(format!(
                "size {sz} truncates to zero on a whole-unit asset"
            )));
        }
        return Ok(trimmed(t));
    }

    let rounded = round_away(d, sz_decimals);
    if rounded.is_zero() {
        return Err(Error::numeric(format!(
            "size {sz} rounds to zero at {sz_decimals} decimal places"
        )));
    }
    Ok(trimmed(rounded))
}

/// Metadata-agnostic fallback encoder for call sites that format before the
/// asset's `sz_decimals` is known: the fractional budget is whatever the flat
/// ceiling leaves after the integer part's digits.
pub fn float_to_wire(x: f64, max_decimals: u32) -> Result<String> {
    let d = to_decimal(x)?;
    if d.is_integer() {
        return Ok(trimmed(d.trunc()));
    }

    let dp = max_decimals.saturating_sub(digits_before_point(d));
    let rounded = round_away(d, dp);
    if rounded.is_zero() {
        return Err(Error::numeric(format!(
            "value {x} rounds to zero at {dp} decimal places"
        )));
    }
    Ok(trimmed(rounded))
}
