use std::time::Duration;

/// Timeouts applied at the HTTP and database edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Whole-request budget for an HTTP handler
    pub http_request: Duration,

    /// How long to wait for a pooled connection or a locked database
    pub db_query: Duration,

    /// Grace period for in-flight requests after a shutdown signal
    pub shutdown_grace: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            db_query: Duration::from_secs(10),
            shutdown_grace: Duration::from_secs(10),
        }
    }
}
