use std::path::PathBuf;

use thiserror::Error;

/// Errors from calls to the blogging service.
///
/// Only two kinds matter to the UI: the transport failed before a response
/// arrived, or a response arrived with a status other than the expected
/// one. Both are surfaced identically (a transient toast) and local state
/// keeps its last known-good value. The variants exist so the log line can
/// say which it was.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout,
    /// broken connection).
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than the success status.
    #[error("{endpoint} rejected with status {status}")]
    Rejected {
        endpoint: &'static str,
        status: u16,
    },

    /// A success response whose body did not match the expected shape.
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The featured image could not be read from disk before upload.
    #[error("could not read image file '{path}': {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
