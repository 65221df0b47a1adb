use crate::Error;
use crate::transport::request::Request;
use serde_json::Value;

/// Sale history of a market item.
#[derive(Clone)]
pub struct HistoryService {
    client: crate::Client,
}

impl HistoryService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /history/<market_hash_name>/sales`, optionally narrowed to one paint index.
    pub async fn sales(
        &self,
        market_hash_name: &str,
        paint_index: Option<u32>,
    ) -> Result<Value, Error> {
        let req = Request::get(["history", market_hash_name, "sales"])
            .query_opt("paint_index", paint_index);
        self.client.send_json(req).await
    }
}
