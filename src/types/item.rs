use super::common::{AssetId, Cents, lenient_bool, string_or_number};
use serde::Deserialize;
use serde_json::Value;

/// The tradable good behind a listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Item {
    pub asset_id: Option<AssetId>,
    pub def_index: Option<u32>,
    pub paint_index: Option<u32>,
    pub paint_seed: Option<u32>,
    pub float_value: Option<f64>,
    pub icon_url: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub d_param: Option<String>,
    pub is_stattrak: Option<bool>,
    pub is_souvenir: Option<bool>,
    pub rarity: Option<u8>,
    pub quality: Option<u8>,
    pub market_hash_name: Option<String>,
    pub low_rank: Option<u32>,
    pub high_rank: Option<u32>,
    /// Applied stickers, in slot order as sent by the server.
    pub stickers: Option<Vec<Sticker>>,
    /// Set when the item itself is a sticker.
    pub sticker_index: Option<u32>,
    #[serde(deserialize_with = "lenient_bool")]
    pub tradable: Option<bool>,
    pub inspect_link: Option<String>,
    pub has_screenshot: Option<bool>,
    #[serde(deserialize_with = "string_or_number")]
    pub cs2_screenshot_id: Option<String>,
    pub cs2_screenshot_at: Option<String>,
    pub is_commodity: Option<bool>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub rarity_name: Option<String>,
    pub type_name: Option<String>,
    pub item_name: Option<String>,
    pub wear_name: Option<String>,
    pub description: Option<String>,
    pub collection: Option<String>,
    pub badges: Option<Vec<Value>>,
    pub serialized_inspect: Option<String>,
    pub gs_sig: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Sticker {
    #[serde(rename = "stickerId")]
    pub sticker_id: Option<u32>,
    pub slot: Option<u8>,
    pub wear: Option<f64>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub icon_url: Option<String>,
    pub name: Option<String>,
    pub reference: Option<StickerReference>,
}

/// Market reference price of a single sticker.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct StickerReference {
    pub price: Option<Cents>,
    pub quantity: Option<u64>,
    pub updated_at: Option<String>,
}
