use super::{TransportRequest, TransportResponse};
use crate::error::{Error, TransportErrorKind};
use async_trait::async_trait;
use reqwest::{Client, Proxy};
use std::{sync::Arc, time::Duration};

#[cfg(feature = "rustls")]
fn ensure_rustls_provider() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[cfg(not(feature = "rustls"))]
fn ensure_rustls_provider() {}

/// Trait implemented by any async HTTP layer.
#[async_trait]
pub trait AsyncTransport: Send + Sync + 'static {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error>;
}

pub type DynAsyncTransport = Arc<dyn AsyncTransport>;

#[async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for Arc<T> {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        (**self).send(req).await
    }
}

/// Options for [`ReqwestAsync::try_new`].
#[derive(Clone, Debug)]
pub struct ReqwestOptions<'a> {
    pub user_agent: &'a str,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Ignore system proxy environment variables.
    pub no_system_proxy: bool,
    /// Explicit proxy URL, already validated.
    pub proxy: Option<&'a str>,
}

/// Default async transport built on `reqwest`.
#[derive(Clone)]
pub struct ReqwestAsync {
    client: Client,
}

impl ReqwestAsync {
    /// Construct a new transport with its own connection pool.
    pub fn try_new(options: ReqwestOptions<'_>) -> Result<Self, Error> {
        ensure_rustls_provider();

        let mut builder = Client::builder()
            .user_agent(options.user_agent)
            .connect_timeout(options.connect_timeout)
            .timeout(options.timeout)
            .pool_max_idle_per_host(50);

        if options.no_system_proxy {
            builder = builder.no_proxy();
        }

        if let Some(proxy) = options.proxy {
            let proxy = Proxy::all(proxy).map_err(|err| Error::InvalidConfig {
                message: "invalid proxy URL".into(),
                source: Some(Box::new(err)),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|err| Error::InvalidConfig {
            message: "failed to build async HTTP client".into(),
            source: Some(Box::new(err)),
        })?;

        Ok(Self { client })
    }
}

fn transport_error(method: &http::Method, url: &url::Url, err: reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Other
    };
    Error::Transport {
        method: method.clone(),
        path: url.path().to_string().into_boxed_str(),
        kind,
        source: Box::new(err),
    }
}

#[async_trait]
impl AsyncTransport for ReqwestAsync {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let TransportRequest {
            method,
            url,
            headers,
            query,
            body,
            timeout,
        } = req;
        let mut req = self
            .client
            .request(method.clone(), url.clone())
            .query(&query)
            .timeout(timeout)
            .headers(headers);

        if let Some(body) = body {
            if let Some(content_type) = body.content_type {
                req = req.header(http::header::CONTENT_TYPE, content_type);
            }
            req = req.body(body.bytes);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| transport_error(&method, &url, e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| transport_error(&method, &url, e))?;
        Ok(TransportResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
