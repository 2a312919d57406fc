//! Domain types and models

pub mod result;
pub mod url;
pub mod wallet;

pub use result::LossReportResult;
pub use url::{LogLevel, UrlMethod, UrlRequest, UrlResponse};
pub use wallet::RewardsWallet;
