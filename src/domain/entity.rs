//! Domain Layer - Core Entity Trait
//!
//! Basic contract for records held in a list snapshot, plus the single
//! error kind every remote operation reports.

use thiserror::Error;

/// Core trait for records kept in a snapshot
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for remote operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Failure talking to the remote todo collection.
///
/// Messages are captured as strings so the error stays `Clone` and can be
/// kept next to a snapshot or compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection, DNS or IO failure before a response was received
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("{method} {url} returned status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The response body was not the expected JSON
    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl TransportError {
    /// Status code for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
