//! Endpoint services of the CSFloat market API.
//!
//! Services are reached through accessors on [`crate::Client`]:
//! - `Client::listings()` / `Client::buy_orders()`
//! - `Client::trades()` / `Client::account()`
//! - `Client::users()` / `Client::history()` / `Client::meta()`

pub mod account;
pub mod buy_orders;
pub mod history;
pub mod listings;
pub mod meta;
pub mod trades;
pub mod users;

pub use account::*;
pub use buy_orders::*;
pub use history::*;
pub use listings::*;
pub use meta::*;
pub use trades::*;
pub use users::*;
