use super::common::{Cents, SteamId, string_or_number};
use super::listing::Statistics;
use crate::auth::SecretString;
use serde::Deserialize;
use serde_json::Value;

/// Payload of `GET /me`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Me {
    pub user: Option<User>,
    pub pending_offers: Option<u64>,
    pub actionable_trades: Option<u64>,
}

/// Private profile of the authenticated account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct User {
    pub steam_id: Option<SteamId>,
    pub username: Option<String>,
    pub flags: Option<u64>,
    pub avatar: Option<String>,
    pub background_url: Option<String>,
    pub email: Option<String>,
    pub balance: Option<Cents>,
    pub pending_balance: Option<Cents>,
    pub stall_public: Option<bool>,
    pub away: Option<bool>,
    pub trade_token: Option<String>,
    pub payment_accounts: Option<Value>,
    /// Redacted in `Debug` output.
    pub api_key: Option<SecretString>,
    pub statistics: Option<Statistics>,
    pub preferences: Option<Preferences>,
    pub know_your_customer: Option<String>,
    pub extension_setup_at: Option<String>,
    pub firebase_messaging: Option<FirebaseMessaging>,
    pub stripe_connect: Option<Value>,
    pub has_valid_steam_api_key: Option<bool>,
    #[serde(deserialize_with = "string_or_number")]
    pub obfuscated_id: Option<String>,
    pub online: Option<bool>,
    pub fee: Option<f64>,
    pub withdraw_fee: Option<f64>,
    pub subscriptions: Option<Vec<Value>>,
    pub has_2fa: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Preferences {
    pub offers_enabled: Option<bool>,
    /// Basis points.
    pub max_offer_discount: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FirebaseMessaging {
    #[serde(deserialize_with = "string_or_number")]
    pub platform: Option<String>,
    pub last_updated: Option<String>,
}
