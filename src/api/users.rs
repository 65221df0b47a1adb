use crate::transport::request::Request;
use crate::{Error, Stall, SteamId};
use serde_json::Value;

/// Public user APIs.
#[derive(Clone)]
pub struct UsersService {
    client: crate::Client,
}

impl UsersService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl UsersService {
    /// `GET /users/<id>/stall`
    pub async fn stall(&self, user_id: impl Into<SteamId>, limit: u32) -> Result<Stall, Error> {
        let user_id: SteamId = user_id.into();
        let req = Request::get(["users", user_id.as_str(), "stall"]).query_pair("limit", limit);
        self.client.send_json(req).await
    }

    /// `GET /users/<id>/stall` without modelling the response.
    pub async fn stall_raw(&self, user_id: impl Into<SteamId>, limit: u32) -> Result<Value, Error> {
        let user_id: SteamId = user_id.into();
        let req = Request::get(["users", user_id.as_str(), "stall"]).query_pair("limit", limit);
        self.client.send_json(req).await
    }
}
