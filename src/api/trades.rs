use crate::transport::request::Request;
use crate::{Error, IntoParam, TradeId, TradeRole, TradesPage};
use serde_json::{Value, json};

const FINISHED_STATES: &str = "failed,cancelled,verified";

/// CSFloat trade APIs for the authenticated account.
#[derive(Clone)]
pub struct TradesService {
    client: crate::Client,
}

impl TradesService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /me/trades?state=pending`
    pub async fn pending(&self, limit: u32, page: u32) -> Result<TradesPage, Error> {
        let req = Request::get(["me", "trades"])
            .query_pair("state", "pending")
            .query_pair("limit", limit)
            .query_pair("page", page);
        self.client.send_json(req).await
    }

    /// Finished trades (verified, failed or cancelled) in the given role.
    pub async fn history(
        &self,
        role: impl IntoParam<TradeRole>,
        limit: u32,
        page: u32,
    ) -> Result<TradesPage, Error> {
        let req = Request::get(["me", "trades"])
            .query_pair("role", role.into_param()?)
            .query_pair("state", FINISHED_STATES)
            .query_pair("limit", limit)
            .query_pair("page", page);
        self.client.send_json(req).await
    }

    /// Trades in any state for the given role.
    pub async fn list(
        &self,
        role: impl IntoParam<TradeRole>,
        limit: u32,
        page: u32,
    ) -> Result<TradesPage, Error> {
        let req = Request::get(["me", "trades"])
            .query_pair("role", role.into_param()?)
            .query_pair("limit", limit)
            .query_pair("page", page);
        self.client.send_json(req).await
    }

    /// `POST /trades/bulk/accept`
    pub async fn accept<I, T>(&self, trade_ids: I) -> Result<Value, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<TradeId>,
    {
        let trade_ids: Vec<TradeId> = trade_ids.into_iter().map(Into::into).collect();
        let req = Request::post(["trades", "bulk", "accept"]).json(&json!({
            "trade_ids": trade_ids,
        }))?;
        self.client.send_json(req).await
    }
}
