//! Async Rust SDK for the CSFloat market REST API.
//!
//! ```no_run
//! # async fn run() -> csfloat_sdk::Result<()> {
//! use csfloat_sdk::{Client, ListingsQuery, SortBy};
//!
//! let client = Client::new("my-api-key")?;
//! let page = client
//!     .listings()
//!     .list(&ListingsQuery::new().sort_by(SortBy::LowestPrice).limit(20))
//!     .await?;
//! for listing in &page.listings {
//!     println!("{:?} {:?}", listing.id, listing.price);
//! }
//! client.close().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
mod transport;
pub mod types;
mod util;

#[cfg(feature = "unstable-raw")]
pub mod raw;

pub use api::{ListingsQuery, NewListing};
pub use auth::{ApiKey, SecretString};
pub use client::{Client, ClientBuilder};
pub use error::*;
pub use types::*;
