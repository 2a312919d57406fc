//! Transport-neutral HTTP request and response records

use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// HTTP method of a [`UrlRequest`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrlMethod {
    #[default]
    Get,
    Put,
    Post,
    Patch,
    Delete,
}

impl_domain_enum_conversions!(UrlMethod {
    Get => "get",
    Put => "put",
    Post => "post",
    Patch => "patch",
    Delete => "delete",
});

/// How much of a request/response exchange the transport logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Method, URL and status only.
    #[default]
    Basic,
    /// Also headers (signatures redacted) and bodies.
    Detailed,
}

impl_domain_enum_conversions!(LogLevel {
    Basic => "basic",
    Detailed => "detailed",
});

/// Outbound request envelope.
///
/// Headers are kept as `name: value` lines in insertion order so signers
/// can append to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRequest {
    pub url: String,
    pub method: UrlMethod,
    pub headers: Vec<String>,
    pub content: String,
    pub content_type: String,
}

impl UrlRequest {
    pub fn new(method: UrlMethod, url: impl Into<String>) -> Self {
        Self { url: url.into(), method, ..Self::default() }
    }

    /// Append a `name: value` header line.
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push(format!("{name}: {value}"));
    }

    /// Iterate headers as `(name, value)` pairs; malformed lines are skipped.
    pub fn header_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim(), value.trim()))
    }

    /// First value for `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_pairs().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, value)| value)
    }
}

/// Response delivered by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResponse {
    pub url: String,
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl UrlResponse {
    pub fn with_status(url: impl Into<String>, status_code: u16) -> Self {
        Self { url: url.into(), status_code, ..Self::default() }
    }
}
