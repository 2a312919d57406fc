//! Promotion (grant) endpoints

pub mod post_bat_loss;

pub use post_bat_loss::LossReportClient;
