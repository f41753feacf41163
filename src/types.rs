//! Shared scalar and chain types.

pub use alloy::primitives::{Address, B256};
pub use rust_decimal::Decimal;

/// Exchange-assigned order id.
pub type OrderId = u64;

/// Millisecond unix timestamp, as used for nonces and info queries.
pub type Timestamp = u64;
