use super::common::{BuyOrderId, Cents, ListingId, SteamId, string_or_number};
use super::item::Item;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// A marketplace offer for one item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Listing {
    pub id: Option<ListingId>,
    pub created_at: Option<String>,
    /// `buy_now` or `auction`.
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub price: Option<Cents>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub seller: Option<PublicUser>,
    pub reference: Option<Reference>,
    pub item: Option<Item>,
    pub is_seller: Option<bool>,
    pub min_offer_price: Option<Cents>,
    /// Basis points.
    pub max_offer_discount: Option<u32>,
    pub is_watchlisted: Option<bool>,
    pub watchers: Option<u64>,
    pub auction_details: Option<AuctionDetails>,
    pub sold_at: Option<String>,
}

/// The transactional wrapper around a listing once a trade is initiated.
///
/// The server sends the same shape as a listing.
pub type Contract = Listing;

/// Public profile of a marketplace participant (listing seller, trade buyer/seller).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PublicUser {
    pub steam_id: Option<SteamId>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub away: Option<bool>,
    pub flags: Option<u64>,
    pub online: Option<bool>,
    pub stall_public: Option<bool>,
    pub statistics: Option<Statistics>,
    pub has_valid_steam_api_key: Option<bool>,
    #[serde(deserialize_with = "string_or_number")]
    pub obfuscated_id: Option<String>,
    pub verification_mode: Option<String>,
}

/// Trade statistics of an account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Statistics {
    pub total_sales: Option<u64>,
    pub total_purchases: Option<u64>,
    /// Seconds.
    pub median_trade_time: Option<f64>,
    pub total_avoided_trades: Option<u64>,
    pub total_failed_trades: Option<u64>,
    pub total_verified_trades: Option<u64>,
    pub total_trades: Option<u64>,
}

/// Pricing statistics attached to a listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Reference {
    pub base_price: Option<Cents>,
    pub float_factor: Option<f64>,
    pub predicted_price: Option<Cents>,
    pub quantity: Option<u64>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AuctionDetails {
    pub reserve_price: Option<Cents>,
    pub top_bid: Option<TopBid>,
    pub expires_at: Option<String>,
    pub min_next_bid: Option<Cents>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TopBid {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub price: Option<Cents>,
    pub contract_id: Option<ListingId>,
    pub state: Option<String>,
    #[serde(rename = "active")]
    pub is_active: Option<bool>,
    #[serde(deserialize_with = "string_or_number")]
    pub obfuscated_buyer_id: Option<String>,
}

/// One page of `GET /listings`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListingsPage {
    #[serde(rename = "data")]
    pub listings: Vec<Listing>,
    /// Opaque token for the next page, absent on the last page.
    pub cursor: Option<String>,
}

/// A seller's public storefront.
///
/// Listings come from `data` when it is an array, otherwise from `listings`.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Stall {
    pub listings: Vec<Listing>,
    pub cursor: Option<String>,
}

impl<'de> Deserialize<'de> for Stall {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Wire {
            data: Option<Value>,
            listings: Option<Vec<Listing>>,
            cursor: Option<String>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let listings = match wire.data {
            Some(data @ Value::Array(_)) => {
                Vec::<Listing>::deserialize(data).map_err(D::Error::custom)?
            }
            _ => wire.listings.unwrap_or_default(),
        };
        Ok(Self {
            listings,
            cursor: wire.cursor,
        })
    }
}

/// A standing offer to buy any item matching `expression`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuyOrder {
    pub id: Option<BuyOrderId>,
    pub created_at: Option<String>,
    pub expression: Option<String>,
    pub market_hash_name: Option<String>,
    pub qty: Option<u64>,
    pub price: Option<Cents>,
}
