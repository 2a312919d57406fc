//! HTTP transport

pub mod client;
pub mod url_loader;

pub use client::{HttpClient, HttpClientBuilder};
pub use url_loader::ReqwestUrlLoader;
