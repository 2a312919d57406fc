//! Endpoint result codes

use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Outcome of a loss report delivered to the caller.
///
/// Deliberately two-valued: the reason behind a failure is only visible in
/// logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LossReportResult {
    Ok,
    Failed,
}

impl_domain_enum_conversions!(LossReportResult {
    Ok => "ok",
    Failed => "failed",
});
