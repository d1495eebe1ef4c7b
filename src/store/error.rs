use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a single remote-store call.
///
/// Every call site gets an explicit outcome and decides for itself whether
/// the failure aborts the run (bootstrap) or is reported and skipped
/// (per-issue updates, backlog creation).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a usable response (DNS, TLS, connection).
    #[error("request to the tracker failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The tracker answered with a non-success status.
    #[error("tracker returned HTTP {status} for {what}")]
    Status { what: String, status: u16 },

    /// The requested issue does not exist.
    #[error("issue #{0} does not exist")]
    NotFound(u64),

    /// The response body did not match the expected shape.
    #[error("could not decode the tracker response for {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: reqwest::Error,
    },
}
