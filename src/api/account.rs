use crate::transport::request::Request;
use crate::{Error, Me};
use serde_json::Value;

/// APIs for the account that owns the API key.
#[derive(Clone)]
pub struct AccountService {
    client: crate::Client,
}

impl AccountService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /me`
    pub async fn me(&self) -> Result<Me, Error> {
        self.client.send_json(Request::get(["me"])).await
    }

    /// `GET /me` without modelling the response.
    pub async fn me_raw(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["me"])).await
    }

    /// `GET /me/transactions`, newest first.
    pub async fn transactions(&self, page: u32, limit: u32) -> Result<Value, Error> {
        let req = Request::get(["me", "transactions"])
            .query_pair("page", page)
            .query_pair("limit", limit)
            .query_pair("order", "desc");
        self.client.send_json(req).await
    }

    /// `GET /me/account-standing`
    pub async fn account_standing(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["me", "account-standing"]))
            .await
    }

    /// `GET /me/inventory`
    pub async fn inventory(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["me", "inventory"]))
            .await
    }

    /// `GET /me/watchlist`
    pub async fn watchlist(&self, limit: u32) -> Result<Value, Error> {
        let req = Request::get(["me", "watchlist"]).query_pair("limit", limit);
        self.client.send_json(req).await
    }

    /// `GET /me/offers-timeline`
    pub async fn offers_timeline(&self, limit: u32) -> Result<Value, Error> {
        let req = Request::get(["me", "offers-timeline"]).query_pair("limit", limit);
        self.client.send_json(req).await
    }

    /// `GET /me/buy-orders`, newest first.
    pub async fn buy_orders(&self, page: u32, limit: u32) -> Result<Value, Error> {
        let req = Request::get(["me", "buy-orders"])
            .query_pair("page", page)
            .query_pair("limit", limit)
            .query_pair("order", "desc");
        self.client.send_json(req).await
    }
}
