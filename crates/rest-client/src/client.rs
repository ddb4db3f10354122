//! Verb-oriented façade over the HTTP transport

use std::sync::Arc;

use serde_json::json;

use crate::builder::{RequestBuilder, UploadBuilder};
use crate::logger::Logger;
use crate::request::{Method, RequestOptions};
use crate::response::{RawResponse, Response};
use crate::transport::Transport;

/// HTTP request façade
///
/// Holds a base URI, an injected [`Transport`] and an optional [`Logger`],
/// and exposes verb methods returning per-request builders. Every request
/// is stateless; the full URL is the base URI with the relative URL
/// appended by plain string concatenation, so trailing-slash handling is
/// the caller's responsibility.
///
/// # Example
///
/// ```no_run
/// use rest_client::RestClient;
///
/// async fn example() -> rest_client::Response<()> {
///     let client = RestClient::new("https://api.example.com");
///     let response = client
///         .get("/items")
///         .query("page", "2")
///         .send()
///         .await?;
///     let items = response.json_body();
///     let _ = items;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
    base_uri: String,
    logger: Option<Arc<dyn Logger>>,
}

impl RestClient {
    /// Create a client over the default reqwest transport
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self::with_transport(base_uri, Arc::new(crate::transport::ReqwestTransport::new()))
    }

    /// Create a client over a custom transport
    pub fn with_transport(base_uri: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_uri: base_uri.into(),
            logger: None,
        }
    }

    /// Attach a logger; without one, dispatch is silent
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The base URI prepended to every relative URL
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Replace the base URI
    ///
    /// No validation or normalization is performed.
    pub fn set_base_uri(&mut self, base_uri: impl Into<String>) {
        self.base_uri = base_uri.into();
    }

    /// GET request builder
    pub fn get(&self, url: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Get, url)
    }

    /// POST request builder
    pub fn post(&self, url: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Post, url)
    }

    /// PUT request builder
    pub fn put(&self, url: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Put, url)
    }

    /// PATCH request builder
    pub fn patch(&self, url: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Patch, url)
    }

    /// DELETE request builder
    pub fn delete(&self, url: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Delete, url)
    }

    /// Multipart upload builder, dispatched as a POST
    pub fn upload(&self, url: &str) -> UploadBuilder<'_> {
        UploadBuilder::new(self, url)
    }

    /// Forward an assembled request to the transport, logging around the
    /// call when a logger is configured
    ///
    /// Transport failures are logged at error level and propagated
    /// unchanged; there are no retries and no error translation at this
    /// layer.
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Response<RawResponse> {
        let full_url = format!("{}{}", self.base_uri, url);

        if let Some(logger) = &self.logger {
            let context = json!({
                "method": method,
                "url": full_url,
                "options": serde_json::to_value(&options).unwrap_or_default(),
            });
            logger.info("request sent", Some(&context));
        }

        match self.transport.request(method, &full_url, options).await {
            Ok(response) => {
                if let Some(logger) = &self.logger {
                    let context = json!({
                        "method": method,
                        "url": full_url,
                        "status": response.status(),
                    });
                    logger.info("response received", Some(&context));
                }
                Ok(response)
            }
            Err(err) => {
                if let Some(logger) = &self.logger {
                    let context = json!({
                        "method": method,
                        "url": full_url,
                        "error": err.to_string(),
                    });
                    logger.error("request failed", Some(&context));
                }
                Err(err)
            }
        }
    }
}
