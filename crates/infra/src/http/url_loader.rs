//! `UrlLoader` backed by reqwest
//!
//! Translates transport-neutral [`UrlRequest`]s into reqwest calls and logs
//! the exchange at the verbosity the caller asks for.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use rewards_core::UrlLoader;
use rewards_domain::{LogLevel, Result, UrlMethod, UrlRequest, UrlResponse};
use tracing::{debug, warn};

use super::HttpClient;
use crate::errors::InfraError;

/// Header names whose values never reach logs.
const REDACTED_HEADERS: [&str; 4] = ["signature", "authorization", "cookie", "x-api-key"];

/// Production transport for grant service endpoints.
#[derive(Clone)]
pub struct ReqwestUrlLoader {
    http: HttpClient,
}

impl ReqwestUrlLoader {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl UrlLoader for ReqwestUrlLoader {
    async fn load(&self, request: UrlRequest, log_level: LogLevel) -> Result<UrlResponse> {
        log_request(&request, log_level);

        let mut builder = self.http.request(to_method(request.method), request.url.as_str());
        for (name, value) in request.header_pairs() {
            builder = builder.header(name, value);
        }
        if !request.content.is_empty() {
            if !request.content_type.is_empty() {
                builder = builder.header(CONTENT_TYPE, request.content_type.as_str());
            }
            builder = builder.body(request.content.clone());
        }

        let response = self.http.send(builder).await?;

        let url = response.url().to_string();
        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect();
        // The status is already known; a broken body does not undo it.
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                let err = InfraError::from(err).0;
                warn!(%url, status = status_code, error = %err, "failed to read response body");
                String::new()
            }
        };

        let response = UrlResponse { url, status_code, headers, body };
        log_response(&response, log_level);
        Ok(response)
    }
}

fn to_method(method: UrlMethod) -> Method {
    match method {
        UrlMethod::Get => Method::GET,
        UrlMethod::Put => Method::PUT,
        UrlMethod::Post => Method::POST,
        UrlMethod::Patch => Method::PATCH,
        UrlMethod::Delete => Method::DELETE,
    }
}

fn redact_headers(request: &UrlRequest) -> Vec<String> {
    request
        .header_pairs()
        .map(|(name, value)| {
            if REDACTED_HEADERS.iter().any(|hidden| hidden.eq_ignore_ascii_case(name)) {
                format!("{name}: <redacted>")
            } else {
                format!("{name}: {value}")
            }
        })
        .collect()
}

fn log_request(request: &UrlRequest, log_level: LogLevel) {
    match log_level {
        LogLevel::Basic => {
            debug!(method = %request.method, url = %request.url, "[ REQUEST ]");
        }
        LogLevel::Detailed => {
            debug!(
                method = %request.method,
                url = %request.url,
                headers = ?redact_headers(request),
                content_type = %request.content_type,
                content = %request.content,
                "[ REQUEST ]"
            );
        }
    }
}

fn log_response(response: &UrlResponse, log_level: LogLevel) {
    match log_level {
        LogLevel::Basic => {
            debug!(url = %response.url, status = response.status_code, "[ RESPONSE ]");
        }
        LogLevel::Detailed => {
            debug!(
                url = %response.url,
                status = response.status_code,
                body = %response.body,
                "[ RESPONSE ]"
            );
        }
    }
}
