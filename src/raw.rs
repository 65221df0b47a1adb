//! Unstable escape hatch exposing internal request/transport pieces.
//!
//! This module is behind the `unstable-raw` feature and is not SemVer-stable.

pub use crate::transport::request::{Request, RequestBody, Response};

pub mod transport {
    pub use crate::transport::async_transport::{
        AsyncTransport, DynAsyncTransport, ReqwestAsync, ReqwestOptions,
    };
    pub use crate::transport::{TransportBody, TransportRequest, TransportResponse};
}
