//! Request options assembled by the verb builders and handed to the transport

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

/// HTTP method of a dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// The method name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body
///
/// A structured [`Body::Json`] value is serialized to a string during
/// dispatch when the content type contains "json"; otherwise it reaches the
/// transport untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum Body {
    /// No body
    #[default]
    None,
    /// Pre-encoded body passed through verbatim
    Raw(String),
    /// Structured value, serialized during dispatch for JSON content types
    Json(Value),
}

impl Body {
    /// Whether a body is present
    pub fn is_some(&self) -> bool {
        !matches!(self, Body::None)
    }
}

/// Basic-auth credentials attached to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicAuth {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

/// A named file part of a multipart form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePart {
    /// Part name
    pub name: String,
    /// File name sent with the part, the last segment of `path`
    pub file_name: String,
    /// Path the transport reads the part contents from
    pub path: PathBuf,
}

impl FilePart {
    /// Create a file part, deriving the file name from the path's last segment
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name: name.into(),
            file_name,
            path,
        }
    }
}

/// Multipart form payload: named text fields and named file parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultipartForm {
    /// Named text fields
    pub fields: Vec<(String, String)>,
    /// Named file parts
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    /// Whether the form has any parts
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.files.is_empty()
    }
}

/// The options bundle forwarded to the transport with every request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestOptions {
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters appended to the URL
    pub query: HashMap<String, String>,
    /// Request body
    pub body: Body,
    /// Basic-auth credentials, present only when both username and password
    /// were supplied
    pub auth: Option<BasicAuth>,
    /// Multipart payload, set only by uploads
    pub multipart: Option<MultipartForm>,
}

impl RequestOptions {
    /// Whether a header with the given name is present, compared
    /// case-insensitively as header names are on the wire
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.keys().any(|k| k.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(format!("{}", Method::Delete), "DELETE");
    }

    #[test]
    fn test_file_part_name_from_last_segment() {
        let part = FilePart::new("doc", "/tmp/a.txt");
        assert_eq!(part.name, "doc");
        assert_eq!(part.file_name, "a.txt");
        assert_eq!(part.path, PathBuf::from("/tmp/a.txt"));
    }

    #[test]
    fn test_file_part_bare_name() {
        let part = FilePart::new("doc", "report.pdf");
        assert_eq!(part.file_name, "report.pdf");
    }

    #[test]
    fn test_has_header_case_insensitive() {
        let mut options = RequestOptions::default();
        options
            .headers
            .insert("content-type".to_string(), "text/plain".to_string());

        assert!(options.has_header("Content-Type"));
        assert!(options.has_header("CONTENT-TYPE"));
        assert!(!options.has_header("Accept"));
    }

    #[test]
    fn test_body_default_is_none() {
        assert_eq!(Body::default(), Body::None);
        assert!(!Body::None.is_some());
        assert!(Body::Raw("x".to_string()).is_some());
    }

    #[test]
    fn test_options_serialize_for_logging() {
        let options = RequestOptions {
            body: Body::Json(serde_json::json!({"a": 1})),
            auth: Some(BasicAuth {
                username: "alice".to_string(),
                password: "secret".to_string(),
            }),
            ..RequestOptions::default()
        };

        let context = serde_json::to_value(&options).expect("Options should serialize");
        assert_eq!(context["auth"]["username"], "alice");
    }
}
