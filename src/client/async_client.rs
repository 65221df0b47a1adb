//! High-level asynchronous CSFloat client.

use crate::{
    ApiKey, BodySnippetConfig, Error, ErrorBody, HttpError, api,
    error::status_message,
    transport::{
        TransportBody, TransportRequest,
        async_transport::{DynAsyncTransport, ReqwestAsync, ReqwestOptions},
        request::{Request, Response},
    },
    util::{
        diagnostics,
        proxy::validate_proxy,
        url::{DEFAULT_BASE_URL, endpoint_url, normalize_base_url, sanitize_url_for_error},
    },
};
use http::{HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::{future::Future, sync::Arc, time::Duration};
use tokio::sync::RwLock;
use url::Url;

#[cfg(feature = "tracing")]
use tracing::{Instrument, field};

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configures and constructs [`Client`].
pub struct ClientBuilder {
    api_key: ApiKey,
    base_url: String,
    proxy: Option<String>,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    no_proxy: bool,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
    transport: Option<DynAsyncTransport>,
}

impl ClientBuilder {
    fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            proxy: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            no_proxy: false,
            default_headers: HeaderMap::new(),
            body_snippet: BodySnippetConfig::default(),
            transport: None,
        }
    }

    /// Route every request through `proxy` (`socks5`, `socks4`, `http` or `https`).
    ///
    /// The URL is validated by [`ClientBuilder::build`].
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the API origin, e.g. to point at a mock server.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Ignore system proxy environment variables.
    pub fn no_system_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Adjust the per-request timeout.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Adjust the connection establishment timeout.
    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.connect_timeout = value;
        self
    }

    /// Add a default header applied to every request.
    pub fn default_header(
        mut self,
        name: http::header::HeaderName,
        value: http::HeaderValue,
    ) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Add a set of default headers applied to every request.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    /// Enable/disable capturing `body_snippet` on decode failures.
    pub fn capture_body_snippet(mut self, enabled: bool) -> Self {
        self.body_snippet.enabled = enabled;
        self
    }

    /// Set max bytes to keep for `body_snippet`.
    pub fn max_body_snippet_bytes(mut self, max_bytes: usize) -> Self {
        self.body_snippet.max_bytes = max_bytes;
        self
    }

    /// Replace the `reqwest` transport.
    #[cfg(feature = "unstable-raw")]
    pub fn transport(mut self, transport: DynAsyncTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    #[cfg(test)]
    pub(crate) fn with_transport(mut self, transport: DynAsyncTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate configuration and open the connection pool.
    pub fn build(self) -> Result<Client, Error> {
        if let Some(proxy) = self.proxy.as_deref() {
            validate_proxy(proxy)?;
        }
        let base = normalize_base_url(&self.base_url)?;
        // Reject keys that cannot travel in a header now rather than on the first call.
        self.api_key.header_value()?;

        let transport: DynAsyncTransport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestAsync::try_new(ReqwestOptions {
                user_agent: &self.user_agent,
                timeout: self.timeout,
                connect_timeout: self.connect_timeout,
                no_system_proxy: self.no_proxy,
                proxy: self.proxy.as_deref(),
            })?),
        };

        Ok(Client {
            inner: Arc::new(Inner {
                base,
                api_key: self.api_key,
                timeout: self.timeout,
                default_headers: self.default_headers,
                body_snippet: self.body_snippet,
                transport: RwLock::new(Some(transport)),
            }),
        })
    }
}

/// Async CSFloat API client.
///
/// Cloning is cheap; all clones share one connection pool. The pool is released by
/// [`Client::close`] (idempotent) or when the last clone is dropped.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    base: Url,
    api_key: ApiKey,
    timeout: Duration,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
    /// `None` once the client has been closed.
    transport: RwLock<Option<DynAsyncTransport>>,
}

impl Client {
    pub fn builder(api_key: impl Into<ApiKey>) -> ClientBuilder {
        ClientBuilder::new(api_key.into())
    }

    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, Error> {
        Self::builder(api_key).build()
    }

    /// Tear down the connection pool. Calling this more than once is a no-op.
    ///
    /// Requests issued afterwards fail with [`Error::InvalidConfig`].
    pub async fn close(&self) {
        let _ = self.inner.transport.write().await.take();
    }

    #[must_use]
    pub async fn is_closed(&self) -> bool {
        self.inner.transport.read().await.is_none()
    }

    /// Run `f` with this client and close it afterwards, whatever `f` returns.
    pub async fn scope<F, Fut, T>(self, f: F) -> T
    where
        F: FnOnce(Client) -> Fut,
        Fut: Future<Output = T>,
    {
        let out = f(self.clone()).await;
        self.close().await;
        out
    }

    #[must_use]
    pub fn listings(&self) -> api::ListingsService {
        api::ListingsService::new(self.clone())
    }

    #[must_use]
    pub fn buy_orders(&self) -> api::BuyOrdersService {
        api::BuyOrdersService::new(self.clone())
    }

    #[must_use]
    pub fn trades(&self) -> api::TradesService {
        api::TradesService::new(self.clone())
    }

    #[must_use]
    pub fn account(&self) -> api::AccountService {
        api::AccountService::new(self.clone())
    }

    #[must_use]
    pub fn users(&self) -> api::UsersService {
        api::UsersService::new(self.clone())
    }

    #[must_use]
    pub fn history(&self) -> api::HistoryService {
        api::HistoryService::new(self.clone())
    }

    #[must_use]
    pub fn meta(&self) -> api::MetaService {
        api::MetaService::new(self.clone())
    }

    /// Dispatch `req` and decode the JSON body into `T` (use `serde_json::Value` for raw JSON).
    pub(crate) async fn send_json<T: DeserializeOwned + Send + 'static>(
        &self,
        req: Request,
    ) -> Result<T, Error> {
        let resp = self.execute_request(&req).await?;
        resp.json().map_err(|source| self.decode_error(&req, &resp, Box::new(source)))
    }

    #[cfg(feature = "unstable-raw")]
    pub async fn execute(&self, req: &Request) -> Result<Response, Error> {
        self.execute_request(req).await
    }

    fn decode_error(
        &self,
        req: &Request,
        resp: &Response,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Error {
        let path = endpoint_url(&self.inner.base, req.segments.iter().map(String::as_str))
            .map(|url| url.path().to_owned())
            .unwrap_or_else(|_| req.segments.join("/"));
        Error::Decode {
            status: resp.status,
            method: req.method.clone(),
            path: path.into_boxed_str(),
            content_type: diagnostics::content_type(&resp.headers),
            request_id: diagnostics::request_id(&resp.headers),
            body_snippet: diagnostics::body_snippet(
                &resp.body,
                self.inner.body_snippet,
                &self.inner.api_key,
            ),
            source,
        }
    }

    /// Send one request and classify the response.
    ///
    /// Returns the response only for `200 OK` with a JSON content type.
    pub(crate) async fn execute_request(&self, req: &Request) -> Result<Response, Error> {
        if !matches!(
            req.method,
            Method::GET | Method::POST | Method::DELETE | Method::PATCH
        ) {
            return Err(Error::invalid_config(format!(
                "unsupported HTTP method: {}",
                req.method
            )));
        }

        let transport = self
            .inner
            .transport
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::invalid_config("client has been closed"))?;

        #[cfg(feature = "metrics")]
        let area = req.segments.first().map_or("", String::as_str);
        #[cfg(feature = "metrics")]
        let _inflight = crate::transport::metrics::InFlightGuard::new(area);

        let url = endpoint_url(&self.inner.base, req.segments.iter().map(String::as_str))?;

        let mut headers = self.inner.default_headers.clone();
        self.inner.api_key.apply(&mut headers)?;
        headers.extend(req.headers.clone());

        let body = req.body.clone().map(|body| TransportBody {
            bytes: body.bytes,
            content_type: body.content_type,
        });

        #[cfg(any(feature = "tracing", feature = "metrics"))]
        let start = std::time::Instant::now();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "csfloat.request",
            http.method = %req.method,
            http.path = %url.path(),
            http.status = field::Empty,
            request_id = field::Empty,
            latency_ms = field::Empty,
            error_kind = field::Empty,
        );

        let timeout = req.timeout_override.unwrap_or(self.inner.timeout);
        let send = transport.send(TransportRequest {
            method: req.method.clone(),
            url: url.clone(),
            headers,
            query: req.query.clone(),
            body,
            timeout,
        });
        #[cfg(feature = "tracing")]
        let send = send.instrument(span.clone());

        let resp = match send.await {
            Ok(resp) => resp,
            Err(err) => {
                #[cfg(feature = "metrics")]
                crate::transport::metrics::Outcome {
                    method: &req.method,
                    area,
                    status: err.status(),
                    latency: start.elapsed(),
                    error: Some(err.kind()),
                }
                .record();
                #[cfg(feature = "tracing")]
                {
                    span.record("error_kind", field::debug(err.kind()));
                    span.record("latency_ms", start.elapsed().as_millis() as i64);
                }
                return Err(err);
            }
        };

        let request_id = diagnostics::request_id(&resp.headers);

        #[cfg(feature = "tracing")]
        {
            span.record("http.status", resp.status.as_u16() as i64);
            span.record("latency_ms", start.elapsed().as_millis() as i64);
            if let Some(rid) = request_id.as_deref() {
                span.record("request_id", field::display(rid));
            }
        }

        let result = if resp.status != StatusCode::OK {
            Err(Error::Api(HttpError {
                status: resp.status,
                method: req.method.clone(),
                url: Box::new(sanitize_url_for_error(&url)),
                message: status_message(resp.status),
                body: ErrorBody::decode(&resp.body),
                request_id,
            }))
        } else {
            let content_type = diagnostics::content_type(&resp.headers);
            let response = Response {
                status: resp.status,
                headers: resp.headers,
                body: resp.body,
            };
            if diagnostics::is_json(content_type.as_deref()) {
                Ok(response)
            } else {
                let found = content_type.as_deref().unwrap_or("no content type");
                Err(self.decode_error(
                    req,
                    &response,
                    format!("expected JSON, got {found}").into(),
                ))
            }
        };

        #[cfg(any(feature = "tracing", feature = "metrics"))]
        let error_kind = result.as_ref().err().map(Error::kind);
        #[cfg(feature = "tracing")]
        if let Some(kind) = error_kind {
            span.record("error_kind", field::debug(kind));
        }
        #[cfg(feature = "metrics")]
        crate::transport::metrics::Outcome {
            method: &req.method,
            area,
            status: match &result {
                Ok(response) => Some(response.status),
                Err(err) => err.status(),
            },
            latency: start.elapsed(),
            error: error_kind,
        }
        .record();

        result
    }
}
