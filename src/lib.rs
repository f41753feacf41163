//! Client-side encoding core for the Hyperliquid exchange API.
//!
//! This crate implements the parts of an exchange client where byte-exact
//! output matters: canonical decimal formatting of prices and sizes
//! ([`wire::num`]), assembly of order/cancel/modify wire actions
//! ([`wire::order`], [`wire::action`]), strictly monotonic nonce issuance
//! ([`nonce`]), and the signed-request envelope ([`wire::envelope`]).
//!
//! Transport, response decoding, metadata retrieval and the signing primitive
//! itself are external collaborators; this crate only shapes what they consume
//! and produce. The numeric strings emitted here are placed verbatim into both
//! the signed pre-image and the request body, so callers must not re-format
//! them.

pub mod error;
pub mod helpers;
pub mod meta;
pub mod nonce;
pub mod types;
pub mod wire;

pub use error::Error;
pub use meta::{AssetInfo, AssetMeta};
pub use nonce::{NonceGenerator, next_nonce};
pub use wire::{OrderRequest, OrderType, OrderWire, Tif, TpSl};

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
