//! Signed-request envelope.
//!
//! The signing collaborator hashes `action` + `nonce` and hands back a raw
//! `(r, s, v)` triple; this module shapes that into the request body the
//! exchange accepts. Field omission matters: `vaultAddress` must be entirely
//! absent when not acting on behalf of a vault, never `null` or `""`.

use alloy::primitives::hex;
use serde::{Deserialize, Serialize};

use crate::types::{Address, B256};

/// Signature triple with `r`/`s` as fixed-length `0x`-prefixed hex strings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RsvSignature {
    pub r: String,
    pub s: String,
    pub v: u8,
}

impl RsvSignature {
    /// Renders the raw 32-byte scalars; the output is always 66 chars each
    /// (`0x` + 64 hex), with leading zero bytes preserved.
    #[must_use]
    pub fn from_parts(r: B256, s: B256, v: u8) -> Self {
        Self {
            r: hex::encode_prefixed(r),
            s: hex::encode_prefixed(s),
            v,
        }
    }
}

/// The final request payload around a signed action.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest<A> {
    pub action: A,
    pub nonce: u64,
    pub signature: RsvSignature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_address: Option<Address>,
}

impl<A> ExchangeRequest<A> {
    #[must_use]
    pub fn new(action: A, nonce: u64, signature: RsvSignature) -> Self {
        Self {
            action,
            nonce,
            signature,
            vault_address: None,
        }
    }

    /// Marks the action as signed on behalf of a vault / sub-account.
    #[must_use]
    pub fn on_behalf_of(mut self, vault_address: Address) -> Self {
        self.vault_address = Some(vault_address);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::action::{Action, Grouping};

    fn signature() -> RsvSignature {
        RsvSignature::from_parts(B256::repeat_byte(0x01), B256::with_last_byte(0x02), 27)
    }

    #[test]
    fn r_and_s_are_fixed_length_prefixed_hex() {
        let sig = signature();
        assert_eq!(sig.r.len(), 66);
        assert_eq!(sig.s.len(), 66);
        assert!(sig.r.starts_with("0x01"));
        // Leading zeros are not trimmed.
        assert_eq!(
            sig.s,
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
        assert_eq!(sig.v, 27);
    }

    #[test]
    fn vault_address_is_absent_when_not_set() {
        let request = ExchangeRequest::new(Action::order(vec![], Grouping::Na), 1_700_000_000_000, signature());
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("vaultAddress").is_none());
        assert_eq!(value["nonce"], 1_700_000_000_000_u64);
        assert_eq!(value["action"]["type"], "order");
        assert_eq!(value["signature"]["v"], 27);
    }

    #[test]
    fn vault_address_serializes_when_present() {
        let vault = Address::repeat_byte(0xab);
        let request =
            ExchangeRequest::new(Action::cancel(vec![]), 2, signature()).on_behalf_of(vault);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["vaultAddress"],
            "0xabababababababababababababababababababab"
        );
    }
}
