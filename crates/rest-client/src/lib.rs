//! Verb-oriented HTTP request façade
//!
//! This crate is a thin convenience layer over an injected HTTP transport.
//! A [`RestClient`] holds a base URI and an optional [`Logger`] and exposes
//! verb methods (get/post/put/patch/delete/upload) that assemble request
//! options (headers, query parameters, body encoding, basic auth, multipart
//! parts) and hand them to the [`Transport`] for the actual network I/O.
//!
//! Connection pooling, TLS, timeouts and retries are the transport's
//! concern; configure them on the wrapped client and pass it in via
//! [`ReqwestTransport::from_reqwest`]. Non-2xx responses are returned as
//! ordinary [`RawResponse`] values, never as errors.
//!
//! # Example
//!
//! ```no_run
//! use rest_client::RestClient;
//! use serde_json::json;
//!
//! async fn example() -> rest_client::Response<()> {
//!     let client = RestClient::new("https://api.example.com");
//!
//!     let response = client
//!         .post("/items")
//!         .json(json!({"name": "widget"}))
//!         .basic_auth("user", "pass")
//!         .send()
//!         .await?;
//!
//!     if response.is_success() {
//!         let body = response.json_body();
//!         println!("created: {}", body["id"]);
//!     }
//!     Ok(())
//! }
//! ```

mod builder;
mod client;
mod error;
mod logger;
mod request;
mod response;
mod transport;

pub use builder::{RequestBuilder, UploadBuilder};
pub use client::RestClient;
pub use error::HttpError;
pub use logger::{Logger, TracingLogger};
pub use request::{BasicAuth, Body, FilePart, Method, MultipartForm, RequestOptions};
pub use response::{RawResponse, Response};
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
pub use transport::Transport;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
