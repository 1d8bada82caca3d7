//! Registry transport implementations.

mod http;

pub use http::{HttpTransportConfig, ReqwestTransport};
