use super::common::{ListingId, SteamId, TradeId, string_or_number};
use super::listing::{Contract, PublicUser};
use serde::Deserialize;
use serde_json::Value;

/// Lifecycle state of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeState {
    Pending,
    Verified,
    Failed,
    Cancelled,
    /// A state this SDK version does not know about.
    #[serde(other)]
    Other,
}

impl TradeState {
    /// Whether the trade reached a terminal state.
    #[must_use]
    pub fn is_final(self) -> bool {
        matches!(self, Self::Verified | Self::Failed | Self::Cancelled)
    }
}

/// Snapshot of a trade between the authenticated account and a counterparty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Trade {
    pub id: Option<TradeId>,
    pub created_at: Option<String>,
    pub buyer_id: Option<SteamId>,
    pub buyer: Option<PublicUser>,
    pub seller_id: Option<SteamId>,
    pub seller: Option<PublicUser>,
    pub contract_id: Option<ListingId>,
    pub accepted_at: Option<String>,
    pub state: Option<TradeState>,
    pub verification_mode: Option<String>,
    pub steam_offer: Option<SteamOffer>,
    pub verify_sale_at: Option<String>,
    pub inventory_check_status: Option<Value>,
    pub trade_protection_ends_at: Option<String>,
    pub contract: Option<Contract>,
    pub trade_url: Option<String>,
    pub trade_token: Option<String>,
    pub wait_for_cancel_ping: Option<bool>,
    pub is_settlement_period: Option<bool>,
}

/// The Steam trade offer backing a trade.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SteamOffer {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub state: Option<String>,
    pub is_from_seller: Option<bool>,
    pub can_cancel_at: Option<String>,
    pub sent_at: Option<String>,
    pub deadline_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One page of `GET /me/trades`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TradesPage {
    pub trades: Vec<Trade>,
    /// Total number of trades matching the filter.
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cents;
    use serde_json::json;

    #[test]
    fn trade_embeds_users_contract_and_item() {
        let trade: Trade = serde_json::from_value(json!({
            "id": "900",
            "state": "verified",
            "buyer": {"steam_id": 76561198000000001u64, "username": "buyer"},
            "seller": {"username": "seller", "statistics": {"total_verified_trades": 3}},
            "contract": {
                "id": "123",
                "price": 4999,
                "item": {"market_hash_name": "AWP | Asiimov (Field-Tested)"}
            },
            "steam_offer": {"id": 6000000001u64, "state": 3}
        }))
        .unwrap();

        assert_eq!(trade.state, Some(TradeState::Verified));
        assert!(trade.state.unwrap().is_final());
        assert_eq!(
            trade.buyer.unwrap().steam_id,
            Some(SteamId::new("76561198000000001"))
        );
        let contract = trade.contract.unwrap();
        assert_eq!(contract.price, Some(Cents(4999)));
        assert_eq!(
            contract.item.unwrap().market_hash_name.as_deref(),
            Some("AWP | Asiimov (Field-Tested)")
        );
        let offer = trade.steam_offer.unwrap();
        assert_eq!(offer.id.as_deref(), Some("6000000001"));
        assert_eq!(offer.state.as_deref(), Some("3"));
        assert!(trade.trade_url.is_none());
    }

    #[test]
    fn known_states_decode_and_new_ones_do_not_fail() {
        for (raw, state) in [
            ("pending", TradeState::Pending),
            ("verified", TradeState::Verified),
            ("failed", TradeState::Failed),
            ("cancelled", TradeState::Cancelled),
            ("disputed", TradeState::Other),
        ] {
            let decoded: TradeState = serde_json::from_value(json!(raw)).unwrap();
            assert_eq!(decoded, state);
        }
        assert!(!TradeState::Pending.is_final());
    }

    #[test]
    fn missing_trades_key_yields_empty_page() {
        let page: TradesPage = serde_json::from_value(json!({"count": 0})).unwrap();
        assert!(page.trades.is_empty());
        assert_eq!(page.count, Some(0));
    }
}
