use crate::transport::request::Request;
use crate::{BuyOrderId, Cents, Error};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct NewBuyOrder<'a> {
    market_hash_name: &'a str,
    max_price: Cents,
    quantity: u32,
}

/// CSFloat buy order APIs.
#[derive(Clone)]
pub struct BuyOrdersService {
    client: crate::Client,
}

impl BuyOrdersService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `POST /buy-orders`
    pub async fn create(
        &self,
        market_hash_name: &str,
        max_price: impl Into<Cents>,
        quantity: u32,
    ) -> Result<Value, Error> {
        let body = NewBuyOrder {
            market_hash_name,
            max_price: max_price.into(),
            quantity,
        };
        self.client
            .send_json(Request::post(["buy-orders"]).json(&body)?)
            .await
    }

    /// `DELETE /buy-orders/<id>`
    pub async fn delete(&self, id: impl Into<BuyOrderId>) -> Result<Value, Error> {
        let id: BuyOrderId = id.into();
        self.client
            .send_json(Request::delete(["buy-orders", id.as_str()]))
            .await
    }
}
