//! Shared helpers for endpoint implementations

pub mod url_helpers;
