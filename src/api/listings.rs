use crate::transport::request::Request;
use crate::{
    Category, Cents, Error, IntoParam, Listing, ListingId, ListingType, ListingsPage, SortBy,
};
use crate::{BuyOrder, SteamId};
use serde::Serialize;
use serde_json::{Value, json};

/// Filters and paging for `GET /listings`.
///
/// Enumerated filters accept either their typed value or the raw wire value; an invalid raw
/// value is reported by [`ListingsService::list`] before anything is sent.
#[derive(Clone, Debug)]
pub struct ListingsQuery {
    limit: u32,
    sort_by: SortBy,
    category: Category,
    listing_type: ListingType,
    cursor: Option<String>,
    min_price: Option<Cents>,
    max_price: Option<Cents>,
    def_index: Vec<u32>,
    min_float: Option<f64>,
    max_float: Option<f64>,
    rarity: Option<String>,
    paint_seed: Option<u32>,
    paint_index: Option<u32>,
    user_id: Option<SteamId>,
    collection: Option<String>,
    market_hash_name: Option<String>,
    invalid: Option<(&'static str, Box<str>)>,
}

impl Default for ListingsQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            sort_by: SortBy::default(),
            category: Category::default(),
            listing_type: ListingType::default(),
            cursor: None,
            min_price: None,
            max_price: None,
            def_index: Vec::new(),
            min_float: None,
            max_float: None,
            rarity: None,
            paint_seed: None,
            paint_index: None,
            user_id: None,
            collection: None,
            market_hash_name: None,
            invalid: None,
        }
    }
}

impl ListingsQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn set<T>(&mut self, value: impl IntoParam<T>, slot: impl FnOnce(&mut Self, T)) {
        match value.into_param() {
            Ok(value) => slot(self, value),
            Err(Error::InvalidParameter { parameter, value }) => {
                self.invalid.get_or_insert((parameter, value));
            }
            Err(other) => {
                self.invalid
                    .get_or_insert(("query", other.to_string().into_boxed_str()));
            }
        }
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn sort_by(mut self, sort_by: impl IntoParam<SortBy>) -> Self {
        self.set(sort_by, |q, v| q.sort_by = v);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl IntoParam<Category>) -> Self {
        self.set(category, |q, v| q.category = v);
        self
    }

    #[must_use]
    pub fn listing_type(mut self, listing_type: impl IntoParam<ListingType>) -> Self {
        self.set(listing_type, |q, v| q.listing_type = v);
        self
    }

    /// Continue from the cursor returned with a previous page.
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn min_price(mut self, price: impl Into<Cents>) -> Self {
        self.min_price = Some(price.into());
        self
    }

    #[must_use]
    pub fn max_price(mut self, price: impl Into<Cents>) -> Self {
        self.max_price = Some(price.into());
        self
    }

    /// Restrict to one or more weapon definition indexes.
    #[must_use]
    pub fn def_index(mut self, indexes: impl IntoIterator<Item = u32>) -> Self {
        self.def_index = indexes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn min_float(mut self, value: f64) -> Self {
        self.min_float = Some(value);
        self
    }

    #[must_use]
    pub fn max_float(mut self, value: f64) -> Self {
        self.max_float = Some(value);
        self
    }

    #[must_use]
    pub fn rarity(mut self, rarity: impl ToString) -> Self {
        self.rarity = Some(rarity.to_string());
        self
    }

    #[must_use]
    pub fn paint_seed(mut self, seed: u32) -> Self {
        self.paint_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn paint_index(mut self, index: u32) -> Self {
        self.paint_index = Some(index);
        self
    }

    /// Only listings of this seller.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<SteamId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    #[must_use]
    pub fn market_hash_name(mut self, name: impl Into<String>) -> Self {
        self.market_hash_name = Some(name.into());
        self
    }

    fn into_request(self) -> Result<Request, Error> {
        if let Some((parameter, value)) = self.invalid {
            return Err(Error::InvalidParameter { parameter, value });
        }

        let def_index = (!self.def_index.is_empty()).then(|| {
            self.def_index
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });

        Ok(Request::get(["listings"])
            .query_pair("limit", self.limit)
            .query_pair("sort_by", self.sort_by)
            .query_pair("category", self.category)
            .query_pair("type", self.listing_type)
            .query_opt("cursor", self.cursor)
            .query_opt("min_price", self.min_price.map(Cents::as_i64))
            .query_opt("max_price", self.max_price.map(Cents::as_i64))
            .query_opt("def_index", def_index)
            .query_opt("min_float", self.min_float)
            .query_opt("max_float", self.max_float)
            .query_opt("rarity", self.rarity)
            .query_opt("paint_seed", self.paint_seed)
            .query_opt("paint_index", self.paint_index)
            .query_opt("user_id", self.user_id)
            .query_opt("collection", self.collection)
            .query_opt("market_hash_name", self.market_hash_name))
    }
}

/// Body of `POST /listings`.
#[derive(Clone, Debug, Serialize)]
pub struct NewListing {
    asset_id: String,
    price: Cents,
    #[serde(rename = "type")]
    listing_type: ListingType,
    description: String,
    private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_offer_discount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reserve_price: Option<Cents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_days: Option<u32>,
    #[serde(skip)]
    invalid: Option<(&'static str, Box<str>)>,
}

impl NewListing {
    /// A public buy-now listing of `asset_id` at `price`.
    #[must_use]
    pub fn new(asset_id: impl Into<String>, price: impl Into<Cents>) -> Self {
        Self {
            asset_id: asset_id.into(),
            price: price.into(),
            listing_type: ListingType::BuyNow,
            description: String::new(),
            private: false,
            max_offer_discount: None,
            reserve_price: None,
            duration_days: None,
            invalid: None,
        }
    }

    #[must_use]
    pub fn listing_type(mut self, listing_type: impl IntoParam<ListingType>) -> Self {
        match listing_type.into_param() {
            Ok(value) => self.listing_type = value,
            Err(err) => {
                self.invalid
                    .get_or_insert(("type", invalid_value(err).into_boxed_str()));
            }
        }
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Maximum accepted offer discount, in basis points.
    #[must_use]
    pub fn max_offer_discount(mut self, basis_points: u32) -> Self {
        self.max_offer_discount = Some(basis_points);
        self
    }

    /// Auction reserve price.
    #[must_use]
    pub fn reserve_price(mut self, price: impl Into<Cents>) -> Self {
        self.reserve_price = Some(price.into());
        self
    }

    /// Auction duration.
    #[must_use]
    pub fn duration_days(mut self, days: u32) -> Self {
        self.duration_days = Some(days);
        self
    }
}

fn invalid_value(err: Error) -> String {
    match err {
        Error::InvalidParameter { value, .. } => value.into_string(),
        other => other.to_string(),
    }
}

/// CSFloat listing APIs.
#[derive(Clone)]
pub struct ListingsService {
    client: crate::Client,
}

impl ListingsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /listings` — one page of listings plus the cursor for the next one.
    pub async fn list(&self, query: &ListingsQuery) -> Result<ListingsPage, Error> {
        self.client.send_json(query.clone().into_request()?).await
    }

    /// `GET /listings` without modelling the response.
    pub async fn list_raw(&self, query: &ListingsQuery) -> Result<Value, Error> {
        self.client.send_json(query.clone().into_request()?).await
    }

    /// `GET /listings/<id>`
    pub async fn get(&self, id: impl Into<ListingId>) -> Result<Listing, Error> {
        let id: ListingId = id.into();
        self.client
            .send_json(Request::get(["listings", id.as_str()]))
            .await
    }

    /// `GET /listings/<id>` without modelling the response.
    pub async fn get_raw(&self, id: impl Into<ListingId>) -> Result<Value, Error> {
        let id: ListingId = id.into();
        self.client
            .send_json(Request::get(["listings", id.as_str()]))
            .await
    }

    /// `GET /listings/<id>/similar`
    pub async fn similar(&self, id: impl Into<ListingId>) -> Result<Vec<Listing>, Error> {
        let id: ListingId = id.into();
        self.client
            .send_json(Request::get(["listings", id.as_str(), "similar"]))
            .await
    }

    /// `GET /listings/<id>/similar` without modelling the response.
    pub async fn similar_raw(&self, id: impl Into<ListingId>) -> Result<Value, Error> {
        let id: ListingId = id.into();
        self.client
            .send_json(Request::get(["listings", id.as_str(), "similar"]))
            .await
    }

    /// `GET /listings/<id>/buy-orders?limit=<limit>`
    pub async fn buy_orders(
        &self,
        id: impl Into<ListingId>,
        limit: u32,
    ) -> Result<Vec<BuyOrder>, Error> {
        let id: ListingId = id.into();
        let req = Request::get(["listings", id.as_str(), "buy-orders"]).query_pair("limit", limit);
        self.client.send_json(req).await
    }

    /// `GET /listings/<id>/buy-orders` without modelling the response.
    pub async fn buy_orders_raw(&self, id: impl Into<ListingId>, limit: u32) -> Result<Value, Error> {
        let id: ListingId = id.into();
        let req = Request::get(["listings", id.as_str(), "buy-orders"]).query_pair("limit", limit);
        self.client.send_json(req).await
    }

    /// `POST /listings`
    pub async fn create(&self, listing: &NewListing) -> Result<Value, Error> {
        if let Some((parameter, value)) = listing.invalid.clone() {
            return Err(Error::InvalidParameter { parameter, value });
        }
        let req = Request::post(["listings"]).json(listing)?;
        self.client.send_json(req).await
    }

    /// `PATCH /listings/<id>` with a new price.
    pub async fn update_price(
        &self,
        id: impl Into<ListingId>,
        price: impl Into<Cents>,
    ) -> Result<Value, Error> {
        let id: ListingId = id.into();
        let price: Cents = price.into();
        let req = Request::patch(["listings", id.as_str()]).json(&json!({ "price": price }))?;
        self.client.send_json(req).await
    }

    /// `DELETE /listings/<id>`
    pub async fn delete(&self, id: impl Into<ListingId>) -> Result<Value, Error> {
        let id: ListingId = id.into();
        self.client
            .send_json(Request::delete(["listings", id.as_str()]))
            .await
    }

    /// `DELETE /listings/<id>/watchlist`
    pub async fn unwatch(&self, id: impl Into<ListingId>) -> Result<Value, Error> {
        let id: ListingId = id.into();
        self.client
            .send_json(Request::delete(["listings", id.as_str(), "watchlist"]))
            .await
    }

    /// `POST /listings/buy` — purchase a listing immediately at `total_price`.
    pub async fn buy_now(
        &self,
        total_price: impl Into<Cents>,
        id: impl Into<ListingId>,
    ) -> Result<Value, Error> {
        let total_price: Cents = total_price.into();
        let id: ListingId = id.into();
        let body = json!({
            "total_price": total_price,
            "contract_ids": [id],
        });
        self.client
            .send_json(Request::post(["listings", "buy"]).json(&body)?)
            .await
    }

    /// `POST /offers` — offer `price` for a listing.
    pub async fn make_offer(
        &self,
        id: impl Into<ListingId>,
        price: impl Into<Cents>,
    ) -> Result<Value, Error> {
        let id: ListingId = id.into();
        let price: Cents = price.into();
        let body = json!({
            "contract_id": id,
            "price": price,
            "cancel_previous_offer": false,
        });
        self.client
            .send_json(Request::post(["offers"]).json(&body)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(req: &Request) -> Vec<(&str, &str)> {
        req.query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn default_query_matches_server_defaults() {
        let req = ListingsQuery::new().into_request().unwrap();
        assert_eq!(req.segments, ["listings"]);
        assert_eq!(
            pairs(&req),
            [
                ("limit", "50"),
                ("sort_by", "best_deal"),
                ("category", "0"),
                ("type", "buy_now"),
            ]
        );
    }

    #[test]
    fn filters_are_appended_in_order() {
        let req = ListingsQuery::new()
            .sort_by(SortBy::LowestFloat)
            .category(Category::StatTrak)
            .listing_type("auction")
            .cursor("abc")
            .min_price(100i64)
            .def_index([7, 9])
            .max_float(0.07)
            .paint_seed(661)
            .user_id("76561198000000000")
            .market_hash_name("AK-47 | Case Hardened (Factory New)")
            .into_request()
            .unwrap();

        assert_eq!(
            pairs(&req),
            [
                ("limit", "50"),
                ("sort_by", "lowest_float"),
                ("category", "2"),
                ("type", "auction"),
                ("cursor", "abc"),
                ("min_price", "100"),
                ("def_index", "7,9"),
                ("max_float", "0.07"),
                ("paint_seed", "661"),
                ("user_id", "76561198000000000"),
                ("market_hash_name", "AK-47 | Case Hardened (Factory New)"),
            ]
        );
    }

    #[test]
    fn first_invalid_filter_is_reported() {
        let err = ListingsQuery::new()
            .sort_by("cheapest")
            .category(9)
            .into_request()
            .unwrap_err();
        match err {
            Error::InvalidParameter { parameter, value } => {
                assert_eq!(parameter, "sort_by");
                assert_eq!(&*value, "cheapest");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn new_listing_omits_unset_optionals() {
        let body = serde_json::to_value(NewListing::new("31337", 1500i64)).unwrap();
        assert_eq!(
            body,
            json!({
                "asset_id": "31337",
                "price": 1500,
                "type": "buy_now",
                "description": "",
                "private": false,
            })
        );
    }

    #[test]
    fn auction_listing_carries_reserve_and_duration() {
        let listing = NewListing::new("1", 100i64)
            .listing_type(ListingType::Auction)
            .reserve_price(250i64)
            .duration_days(7);
        let body = serde_json::to_value(&listing).unwrap();
        assert_eq!(body["type"], "auction");
        assert_eq!(body["reserve_price"], 250);
        assert_eq!(body["duration_days"], 7);
        assert!(body.get("max_offer_discount").is_none());
    }
}
