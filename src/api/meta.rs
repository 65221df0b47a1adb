use crate::Error;
use crate::transport::request::Request;
use serde_json::Value;

/// Marketplace metadata that does not belong to an account.
#[derive(Clone)]
pub struct MetaService {
    client: crate::Client,
}

impl MetaService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /meta/exchange-rates`
    pub async fn exchange_rates(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["meta", "exchange-rates"]))
            .await
    }

    /// `GET /meta/location`
    pub async fn location(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["meta", "location"]))
            .await
    }
}
