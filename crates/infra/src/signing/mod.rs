//! HTTP request signing bound to rewards wallet credentials

pub mod request_signer;

pub use request_signer::{Ed25519RequestSigner, Ed25519SignerFactory};
