//! HTTP transport trait with a default reqwest implementation

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::HttpError;
use crate::request::{Body, Method, RequestOptions};
use crate::response::RawResponse;

/// The underlying HTTP client performing actual network I/O
///
/// Implementations return `Ok` for every completed HTTP exchange, whatever
/// the status code; only connection-level failures (DNS, refused
/// connections, timeouts, TLS) are errors. Timeouts, pooling and TLS are
/// the transport's own concern, not configured through this trait.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Perform a single HTTP request and buffer the response
    async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<RawResponse, HttpError>;
}

/// Default [`Transport`] backed by a shared [`reqwest::Client`]
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    /// Create a transport with default client settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured [`reqwest::Client`]
    ///
    /// This is the hook for timeouts, proxies and TLS settings, which the
    /// façade itself does not expose.
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<RawResponse, HttpError> {
        let mut request = self.client.request(method.into(), url);

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(auth) = &options.auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        match options.body {
            Body::Raw(raw) => request = request.body(raw),
            Body::Json(value) => request = request.json(&value),
            Body::None => {}
        }

        if let Some(form) = options.multipart {
            let mut multipart = reqwest::multipart::Form::new();
            for (name, value) in form.fields {
                multipart = multipart.text(name, value);
            }
            for file in form.files {
                let contents = tokio::fs::read(&file.path).await?;
                let part = reqwest::multipart::Part::bytes(contents).file_name(file.file_name);
                multipart = multipart.part(file.name, part);
            }
            request = request.multipart(multipart);
        }

        let response = request.send().await.map_err(HttpError::from)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(HttpError::from)?.to_vec();

        Ok(RawResponse::new(status, body))
    }
}
