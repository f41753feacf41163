//! Order, modify and cancel wire structs and the request → wire builder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::error::Error;
use crate::meta::{AssetInfo, AssetMeta};
use crate::types::OrderId;
use crate::wire::num::{PERP_MAX_DECIMALS, SPOT_MAX_DECIMALS, price_to_wire, size_to_wire};

/// Added to a spot asset's base id to disambiguate it from the perp id space.
pub const SPOT_ASSET_OFFSET: u32 = 10_000;

/// Time-in-force for resting limit orders.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Tif {
    Gtc,
    Ioc,
    Alo,
}

/// Take-profit / stop-loss marker on trigger orders.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TpSl {
    Tp,
    Sl,
}

/// Order execution type. Exactly one variant exists by construction; there is
/// no both-absent or both-present state to validate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit {
        tif: Tif,
    },
    Trigger {
        is_market: bool,
        trigger_px: f64,
        tpsl: TpSl,
    },
}

impl OrderType {
    fn to_wire(&self, max_decimals: u32, sz_decimals: u32) -> Result<OrderTypeWire> {
        match self {
            OrderType::Limit { tif } => Ok(OrderTypeWire::Limit(LimitWire { tif: *tif })),
            OrderType::Trigger {
                is_market,
                trigger_px,
                tpsl,
            } => Ok(OrderTypeWire::Trigger(TriggerWire {
                is_market: *is_market,
                trigger_px: price_to_wire(*trigger_px, max_decimals, sz_decimals)?,
                tpsl: *tpsl,
            })),
        }
    }
}

/// Wire form of [`OrderType`]: `{"limit":{...}}` or `{"trigger":{...}}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderTypeWire {
    Limit(LimitWire),
    Trigger(TriggerWire),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LimitWire {
    pub tif: Tif,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerWire {
    pub is_market: bool,
    pub trigger_px: String,
    pub tpsl: TpSl,
}

/// A domain-level trading intent, consumed once to produce an [`OrderWire`].
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRequest {
    /// Target order id; required for modifies, ignored otherwise.
    pub order_id: Option<OrderId>,
    pub coin: String,
    /// Authoritative direction. The sign of `sz` does not affect the wire
    /// form; call sites that carry direction in the sign should go through
    /// [`crate::helpers::is_buy`] when populating this field.
    pub is_buy: bool,
    /// Order size; only the magnitude is encoded.
    pub sz: f64,
    pub limit_px: f64,
    pub order_type: OrderType,
    pub reduce_only: bool,
    /// Client order id; empty strings are treated as absent.
    pub cloid: Option<String>,
}

impl OrderRequest {
    #[must_use]
    pub fn new(
        coin: impl Into<String>,
        is_buy: bool,
        sz: f64,
        limit_px: f64,
        order_type: OrderType,
    ) -> Self {
        Self {
            order_id: None,
            coin: coin.into(),
            is_buy,
            sz,
            limit_px,
            order_type,
            reduce_only: false,
            cloid: None,
        }
    }

    #[must_use]
    pub fn reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = reduce_only;
        self
    }

    #[must_use]
    pub fn with_cloid(mut self, cloid: impl Into<String>) -> Self {
        self.cloid = Some(cloid.into());
        self
    }

    #[must_use]
    pub fn modifies(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Spot symbols carry a reserved delimiter (`@` or `-`).
    #[must_use]
    pub fn is_spot(&self) -> bool {
        is_spot_coin(&self.coin)
    }

    /// Builds the wire form against already-resolved asset metadata.
    pub fn to_wire(&self, info: &AssetInfo) -> Result<OrderWire> {
        let (asset, max_decimals) = asset_and_decimals(&self.coin, info);
        let wire = OrderWire {
            asset,
            is_buy: self.is_buy,
            limit_px: price_to_wire(self.limit_px, max_decimals, info.sz_decimals)?,
            sz: size_to_wire(self.sz.abs(), info.sz_decimals)?,
            reduce_only: self.reduce_only,
            order_type: self.order_type.to_wire(max_decimals, info.sz_decimals)?,
            cloid: self.cloid.clone().filter(|c| !c.is_empty()),
        };
        debug!(coin = %self.coin, asset, px = %wire.limit_px, sz = %wire.sz, "built order wire");
        Ok(wire)
    }

    /// Builds the wire form, resolving the symbol through the asset map.
    pub fn to_wire_with(&self, meta: &AssetMeta) -> Result<OrderWire> {
        self.to_wire(meta.get(&self.coin)?)
    }

    /// Builds a modify wire; the request must carry the target order id.
    pub fn to_modify_wire(&self, info: &AssetInfo) -> Result<ModifyOrderWire> {
        let oid = self.order_id.ok_or_else(|| {
            Error::validation(format!("modify for `{}` is missing an order id", self.coin))
        })?;
        Ok(ModifyOrderWire {
            oid,
            order: self.to_wire(info)?,
        })
    }

    /// Builds a modify wire, resolving the symbol through the asset map.
    pub fn to_modify_wire_with(&self, meta: &AssetMeta) -> Result<ModifyOrderWire> {
        self.to_modify_wire(meta.get(&self.coin)?)
    }
}

/// The canonical order wire form with the exchange's short field names.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OrderWire {
    #[serde(rename = "a")]
    pub asset: u32,
    #[serde(rename = "b")]
    pub is_buy: bool,
    #[serde(rename = "p")]
    pub limit_px: String,
    #[serde(rename = "s")]
    pub sz: String,
    #[serde(rename = "r")]
    pub reduce_only: bool,
    #[serde(rename = "t")]
    pub order_type: OrderTypeWire,
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub cloid: Option<String>,
}

/// Modify wire: the target order id plus a full replacement order payload.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ModifyOrderWire {
    pub oid: OrderId,
    pub order: OrderWire,
}

/// Cancel-by-oid intent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelRequest {
    pub coin: String,
    pub oid: OrderId,
}

impl CancelRequest {
    pub fn to_wire(&self, info: &AssetInfo) -> CancelWire {
        let (asset, _) = asset_and_decimals(&self.coin, info);
        CancelWire {
            asset,
            oid: self.oid,
        }
    }

    pub fn to_wire_with(&self, meta: &AssetMeta) -> Result<CancelWire> {
        Ok(self.to_wire(meta.get(&self.coin)?))
    }
}

/// Cancel-by-cloid intent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelCloidRequest {
    pub coin: String,
    pub cloid: String,
}

impl CancelCloidRequest {
    pub fn to_wire(&self, info: &AssetInfo) -> CancelCloidWire {
        let (asset, _) = asset_and_decimals(&self.coin, info);
        CancelCloidWire {
            asset,
            cloid: self.cloid.clone(),
        }
    }

    pub fn to_wire_with(&self, meta: &AssetMeta) -> Result<CancelCloidWire> {
        Ok(self.to_wire(meta.get(&self.coin)?))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CancelWire {
    #[serde(rename = "a")]
    pub asset: u32,
    #[serde(rename = "o")]
    pub oid: OrderId,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CancelCloidWire {
    pub asset: u32,
    pub cloid: String,
}

fn is_spot_coin(coin: &str) -> bool {
    coin.contains(['@', '-'])
}

fn asset_and_decimals(coin: &str, info: &AssetInfo) -> (u32, u32) {
    if is_spot_coin(coin) {
        (info.asset_id + SPOT_ASSET_OFFSET, SPOT_MAX_DECIMALS)
    } else {
        (info.asset_id, PERP_MAX_DECIMALS)
    }
}
