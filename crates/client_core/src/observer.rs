use shared::{FetchError, UserRecord};
use tracing::{error, info, warn};

use crate::LookupError;

/// Hooks called by the fetch pipeline as a lookup progresses.
///
/// All methods default to doing nothing so implementors only override what they need.
pub trait FetchObserver: Send + Sync {
    fn on_request(&self, _url: &str) {}
    fn on_response(&self, _status: u16) {}
    fn on_success(&self, _user: &UserRecord) {}
    fn on_failure(&self, _error: &FetchError) {}
    /// A lookup ended without rendering anything.
    fn on_lookup_failed(&self, _user_id: &str, _error: &LookupError) {}
}

pub struct SilentObserver;

impl FetchObserver for SilentObserver {}

/// Forwards every hook to `tracing`.
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_request(&self, url: &str) {
        info!(url, "lookup: request sent");
    }

    fn on_response(&self, status: u16) {
        info!(status, "lookup: response received");
    }

    fn on_success(&self, user: &UserRecord) {
        info!(login = %user.login, "lookup: user record parsed");
    }

    fn on_failure(&self, error: &FetchError) {
        warn!(status = ?error.status_code(), "lookup: request failed: {error}");
    }

    fn on_lookup_failed(&self, user_id: &str, error: &LookupError) {
        error!(user_id, "lookup: an error occurred ({error})");
    }
}
