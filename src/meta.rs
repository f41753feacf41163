//! Asset metadata boundary.
//!
//! The metadata itself is fetched by an external collaborator (the info
//! endpoint); this module only defines the shape the encoding core consumes.
//! The map must be fully populated before orders are built for a symbol.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;

/// Per-asset precision and id data, immutable once fetched.
///
/// `sz_decimals` is unsigned by construction; a negative decimal budget is
/// not representable.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    /// Exchange-assigned asset index. For spot markets this is the base id;
    /// the wire form adds the spot offset.
    pub asset_id: u32,
    /// Max fractional digits an order size may carry.
    pub sz_decimals: u32,
    /// On-chain decimal precision for spot tokens.
    pub wei_decimals: u32,
    /// Symbolic spot identifier (e.g. `"@107"`), absent for perps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_name: Option<String>,
}

/// Symbol → [`AssetInfo`] map.
#[derive(Clone, Debug, Default)]
pub struct AssetMeta {
    assets: HashMap<String, AssetInfo>,
}

impl AssetMeta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, coin: impl Into<String>, info: AssetInfo) {
        self.assets.insert(coin.into(), info);
    }

    /// Looks up a symbol, failing loudly rather than defaulting to asset id 0.
    pub fn get(&self, coin: &str) -> Result<&AssetInfo> {
        self.assets
            .get(coin)
            .ok_or_else(|| Error::unknown_symbol(coin))
    }

    #[must_use]
    pub fn contains(&self, coin: &str) -> bool {
        self.assets.contains_key(coin)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl FromIterator<(String, AssetInfo)> for AssetMeta {
    fn from_iter<I: IntoIterator<Item = (String, AssetInfo)>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    #[test]
    fn missing_symbol_is_an_error_not_a_default() {
        let meta = AssetMeta::new();
        let err = meta.get("ETH").unwrap_err();
        assert_eq!(err.kind(), Kind::UnknownSymbol);
    }

    #[test]
    fn lookup_returns_inserted_info() {
        let mut meta = AssetMeta::new();
        meta.insert(
            "ETH",
            AssetInfo {
                asset_id: 4,
                sz_decimals: 4,
                wei_decimals: 18,
                spot_name: None,
            },
        );
        assert_eq!(meta.get("ETH").unwrap().asset_id, 4);
        assert!(meta.contains("ETH"));
        assert_eq!(meta.len(), 1);
    }
}
