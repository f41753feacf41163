//! Exchange wire encoding.
//!
//! This module owns everything that must match the exchange byte-for-byte:
//! - canonical decimal strings for prices and sizes ([`num`])
//! - order/modify/cancel wire structs and their builder ([`order`])
//! - the tagged action bodies the exchange accepts ([`action`])
//! - the signed-request envelope ([`envelope`])
//!
//! The strings produced here go verbatim into both the signed pre-image and
//! the request body; a mismatch between the two invalidates the signature.

pub mod action;
pub mod envelope;
pub mod num;
pub mod order;

pub use action::{Action, BulkCancel, BulkCancelCloid, BulkModify, BulkOrder, Grouping};
pub use envelope::{ExchangeRequest, RsvSignature};
pub use num::{
    PERP_MAX_DECIMALS, SPOT_MAX_DECIMALS, float_to_wire, price_to_wire, size_to_wire,
};
pub use order::{
    CancelCloidRequest, CancelCloidWire, CancelRequest, CancelWire, LimitWire, ModifyOrderWire,
    OrderRequest, OrderType, OrderTypeWire, OrderWire, SPOT_ASSET_OFFSET, Tif, TpSl, TriggerWire,
};
