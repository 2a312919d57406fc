//! Grant service endpoints

pub mod errors;
pub mod promotion;

pub use errors::EndpointError;
