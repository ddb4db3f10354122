//! Per-request builders returned by the verb methods

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::client::RestClient;
use crate::request::{BasicAuth, Body, FilePart, Method, MultipartForm, RequestOptions};
use crate::response::{RawResponse, Response};

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Builder for a single non-upload request
///
/// Construct one via the verb methods on [`RestClient`], then call
/// [`send`](Self::send). The content type defaults to `application/json`
/// and drives both default-header injection and body serialization.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    client: &'a RestClient,
    method: Method,
    url: String,
    content_type: String,
    options: RequestOptions,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(client: &'a RestClient, method: Method, url: &str) -> Self {
        Self {
            client,
            method,
            url: url.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            options: RequestOptions::default(),
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(name.into(), value.into());
        self
    }

    /// Merge a set of headers into the request
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.options.headers.extend(headers);
        self
    }

    /// Add a query parameter
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.query.insert(name.into(), value.into());
        self
    }

    /// Merge a set of query parameters
    pub fn queries(mut self, query: HashMap<String, String>) -> Self {
        self.options.query.extend(query);
        self
    }

    /// Set a pre-encoded body, passed through to the transport verbatim
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.options.body = Body::Raw(body.into());
        self
    }

    /// Set a structured body, serialized during dispatch when the content
    /// type contains "json"
    pub fn json(mut self, body: Value) -> Self {
        self.options.body = Body::Json(body);
        self
    }

    /// Attach basic-auth credentials
    pub fn basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.options.auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Override the content type, `application/json` by default
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Assemble the options and dispatch the request
    ///
    /// Unless the content type contains "multipart", `Content-Type` and
    /// `Accept` are injected when the caller did not set them. A
    /// [`Body::Json`] body is serialized to a string for JSON content
    /// types and passed through unchanged for any other.
    pub async fn send(self) -> Response<RawResponse> {
        let mut options = self.options;

        if !self.content_type.contains("multipart") {
            if !options.has_header("Content-Type") {
                options
                    .headers
                    .insert("Content-Type".to_string(), self.content_type.clone());
            }
            if !options.has_header("Accept") {
                options
                    .headers
                    .insert("Accept".to_string(), self.content_type.clone());
            }
        }

        if self.content_type.contains("json") {
            if let Body::Json(value) = &options.body {
                options.body = Body::Raw(serde_json::to_string(value)?);
            }
        }

        self.client.dispatch(self.method, &self.url, options).await
    }
}

/// Builder for a multipart upload, dispatched as a POST
///
/// No default `Content-Type`/`Accept` headers are injected; the transport
/// sets the multipart boundary header itself.
#[derive(Debug)]
pub struct UploadBuilder<'a> {
    client: &'a RestClient,
    url: String,
    form: MultipartForm,
    options: RequestOptions,
}

impl<'a> UploadBuilder<'a> {
    pub(crate) fn new(client: &'a RestClient, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            form: MultipartForm::default(),
            options: RequestOptions::default(),
        }
    }

    /// Add a named text field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.fields.push((name.into(), value.into()));
        self
    }

    /// Add a named file part, read from `path` by the transport; the file
    /// name sent with the part is the path's last segment
    pub fn file(mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.form.files.push(FilePart::new(name, path));
        self
    }

    /// Add a header to the request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(name.into(), value.into());
        self
    }

    /// Merge a set of headers into the request
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.options.headers.extend(headers);
        self
    }

    /// Attach basic-auth credentials
    pub fn basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.options.auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Dispatch the upload
    pub async fn send(self) -> Response<RawResponse> {
        let mut options = self.options;
        options.multipart = Some(self.form);

        self.client.dispatch(Method::Post, &self.url, options).await
    }
}
