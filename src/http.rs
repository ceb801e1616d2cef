//! Blocking HTTP clients shared by the catalog, transcript and audio code.

use std::time::Duration;

/// Build a blocking client whose whole-request limit is `timeout`.
///
/// `None` waits forever. The timeout is always set explicitly because the
/// blocking builder otherwise caps every request at 30 seconds.
pub fn blocking_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder().timeout(timeout).build()
}

/// Map a `*_timeout_secs` setting to a timeout; 0 means none.
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
pub(crate) mod testing;
