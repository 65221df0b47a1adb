//! Request metrics, labelled by API area (`listings`, `me`, `trades`, ...).

use crate::ErrorKind;
use http::{Method, StatusCode};
use std::time::Duration;

pub(crate) struct InFlightGuard {
    gauge: metrics::Gauge,
}

impl InFlightGuard {
    pub(crate) fn new(area: &str) -> Self {
        let gauge = metrics::gauge!("csfloat_sdk_inflight", "area" => area.to_owned());
        gauge.increment(1.0);
        Self { gauge }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gauge.decrement(1.0);
    }
}

/// Result of one dispatched request.
pub(crate) struct Outcome<'a> {
    pub method: &'a Method,
    pub area: &'a str,
    pub status: Option<StatusCode>,
    pub latency: Duration,
    pub error: Option<ErrorKind>,
}

impl Outcome<'_> {
    fn label(&self) -> &'static str {
        match self.error {
            None => "ok",
            Some(ErrorKind::Auth) => "auth",
            Some(ErrorKind::NotFound) => "not_found",
            Some(ErrorKind::RateLimited) => "rate_limited",
            Some(ErrorKind::Api) => "api",
            Some(ErrorKind::Transport) => "transport",
            Some(ErrorKind::Decode) => "decode",
            Some(ErrorKind::InvalidConfig) => "invalid_config",
        }
    }

    pub(crate) fn record(&self) {
        let method = self.method.as_str().to_owned();
        let area = self.area.to_owned();

        metrics::counter!(
            "csfloat_sdk_requests_total",
            "method" => method.clone(),
            "area" => area.clone(),
            "outcome" => self.label()
        )
        .increment(1);
        metrics::histogram!(
            "csfloat_sdk_request_duration_seconds",
            "method" => method,
            "area" => area.clone()
        )
        .record(self.latency);

        if self.status == Some(StatusCode::TOO_MANY_REQUESTS) {
            metrics::counter!("csfloat_sdk_rate_limited_total", "area" => area).increment(1);
        }
    }
}
