//! Typed snapshots of server JSON.
//!
//! Every model field is optional: keys the server omits (or sends as `null`) decode to `None`,
//! and unknown keys are ignored.

pub mod account;
pub mod common;
pub mod item;
pub mod listing;
pub mod params;
pub mod trade;

pub use account::*;
pub use common::{AssetId, BuyOrderId, Cents, ListingId, SteamId, TradeId};
pub use item::*;
pub use listing::*;
pub use params::*;
pub use trade::*;
