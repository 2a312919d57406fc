//! Shared test helpers for `rewards-core` integration tests.
//!
//! In-memory stand-ins for the wallet, signing and transport ports plus a
//! tracing layer that records emitted events.

#![allow(dead_code)]

pub mod logs;
pub mod mocks;
