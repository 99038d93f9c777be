//! HTTP transport shared by every client operation.

mod http;

pub use http::{HttpTransport, TransportError};
