//! Error taxonomy for the export pipeline.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A request to the YouTube Data API did not produce a successful response.
    #[error("YouTube API {endpoint} request failed")]
    RemoteRequest {
        endpoint: &'static str,
        #[source]
        source: RemoteFailure,
    },

    /// The API answered with a success status, but the body did not have the expected shape.
    #[error("malformed YouTube API {endpoint} response")]
    MalformedResponse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("no channel found for handle {handle:?}")]
    ChannelNotFound { handle: String },

    #[error("write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialize video records")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Why a remote request failed.
#[derive(Debug, Error)]
pub enum RemoteFailure {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("status {status}: {body}")]
    Status {
        status: http::StatusCode,
        body: String,
    },
}

impl Error {
    pub fn is_remote_request(&self) -> bool {
        matches!(self, Error::RemoteRequest { .. })
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            Error::MalformedResponse { .. } | Error::ChannelNotFound { .. }
        )
    }

    /// The HTTP status the API answered with, if the failure was a non-success status.
    pub fn status(&self) -> Option<http::StatusCode> {
        match self {
            Error::RemoteRequest {
                source: RemoteFailure::Status { status, .. },
                ..
            } => Some(*status),
            Error::RemoteRequest {
                source: RemoteFailure::Transport(e),
                ..
            } => e.status(),
            _ => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
