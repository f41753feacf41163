//! Tagged action bodies.
//!
//! The exchange routes a signed request by the `type` tag inside `action`.
//! The serialized form of these types is part of the signed pre-image, so the
//! field names and tag casing here are load-bearing.

use serde::{Deserialize, Serialize};

use crate::wire::order::{CancelCloidWire, CancelWire, ModifyOrderWire, OrderWire};

/// How the orders inside a placement are grouped by the exchange.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Grouping {
    #[serde(rename = "na")]
    Na,
    #[serde(rename = "positionTpsl")]
    PositionTpSl,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BulkOrder {
    pub orders: Vec<OrderWire>,
    pub grouping: Grouping,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BulkCancel {
    pub cancels: Vec<CancelWire>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BulkCancelCloid {
    pub cancels: Vec<CancelCloidWire>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BulkModify {
    pub modifies: Vec<ModifyOrderWire>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeverage {
    pub asset: u32,
    pub is_cross: bool,
    pub leverage: u32,
}

/// An action body, tagged the way the exchange's `/exchange` endpoint expects.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    Order(BulkOrder),
    Cancel(BulkCancel),
    CancelByCloid(BulkCancelCloid),
    BatchModify(BulkModify),
    UpdateLeverage(UpdateLeverage),
}

impl Action {
    #[must_use]
    pub fn order(orders: Vec<OrderWire>, grouping: Grouping) -> Self {
        Self::Order(BulkOrder { orders, grouping })
    }

    #[must_use]
    pub fn cancel(cancels: Vec<CancelWire>) -> Self {
        Self::Cancel(BulkCancel { cancels })
    }

    #[must_use]
    pub fn cancel_by_cloid(cancels: Vec<CancelCloidWire>) -> Self {
        Self::CancelByCloid(BulkCancelCloid { cancels })
    }

    #[must_use]
    pub fn batch_modify(modifies: Vec<ModifyOrderWire>) -> Self {
        Self::BatchModify(BulkModify { modifies })
    }

    #[must_use]
    pub fn update_leverage(asset: u32, is_cross: bool, leverage: u32) -> Self {
        Self::UpdateLeverage(UpdateLeverage {
            asset,
            is_cross,
            leverage,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::wire::order::{LimitWire, OrderTypeWire, Tif};

    fn order_wire() -> OrderWire {
        OrderWire {
            asset: 4,
            is_buy: true,
            limit_px: "1234.1".into(),
            sz: "0.01".into(),
            reduce_only: false,
            order_type: OrderTypeWire::Limit(LimitWire { tif: Tif::Gtc }),
            cloid: None,
        }
    }

    #[test]
    fn order_action_is_tagged_with_grouping() {
        let value = serde_json::to_value(Action::order(vec![order_wire()], Grouping::Na)).unwrap();
        assert_eq!(value["type"], "order");
        assert_eq!(value["grouping"], "na");
        assert_eq!(value["orders"][0]["p"], "1234.1");
    }

    #[test]
    fn cancel_actions_use_camel_case_tags() {
        let cancel = Action::cancel(vec![CancelWire { asset: 4, oid: 42 }]);
        assert_eq!(serde_json::to_value(&cancel).unwrap()["type"], "cancel");

        let by_cloid = Action::cancel_by_cloid(vec![CancelCloidWire {
            asset: 10_007,
            cloid: "0xabc".into(),
        }]);
        assert_eq!(
            serde_json::to_value(&by_cloid).unwrap()["type"],
            "cancelByCloid"
        );
    }

    #[test]
    fn batch_modify_wraps_full_order_payloads() {
        let action = Action::batch_modify(vec![ModifyOrderWire {
            oid: 7,
            order: order_wire(),
        }]);
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "batchModify");
        assert_eq!(value["modifies"][0]["oid"], 7);
        assert_eq!(value["modifies"][0]["order"]["a"], 4);
    }

    #[test]
    fn update_leverage_action_shape() {
        let value = serde_json::to_value(Action::update_leverage(4, true, 20)).unwrap();
        assert_eq!(
            value,
            json!({"type": "updateLeverage", "asset": 4, "isCross": true, "leverage": 20})
        );
    }
}
