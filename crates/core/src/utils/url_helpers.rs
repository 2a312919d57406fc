//! URL resolution helpers for service endpoints

use rewards_domain::{Result, RewardsError};
use url::Url;

/// Resolve `segments` against `base`.
///
/// The segments are concatenated verbatim and the result is resolved as a
/// relative reference, so a leading `/` replaces any path on `base`. No
/// escaping is applied beyond what URL parsing does.
///
/// # Errors
/// Returns `RewardsError::Config` if `base` is not an absolute URL and
/// `RewardsError::InvalidInput` if the joined path cannot be resolved.
pub fn resolve(base: &str, segments: &[&str]) -> Result<Url> {
    let base = Url::parse(base)
        .map_err(|e| RewardsError::Config(format!("invalid base URL '{base}': {e}")))?;

    let path = segments.concat();
    base.join(&path).map_err(|e| RewardsError::InvalidInput(format!("cannot resolve '{path}': {e}")))
}
