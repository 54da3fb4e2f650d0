//! Error types for the item API client.
//!
//! # Design
//! `ApiError` describes what went wrong on the wire and is meant for logs.
//! `Failure` is what the user sees: one static message per operation, with
//! no distinction between transport, 4xx and 5xx problems.

/// Errors returned by `ItemClient` parse methods and by hosts executing a
/// request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404 — the requested item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The host could not complete the round-trip at all.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// User-facing failure of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Failure {
    pub fn message(self) -> &'static str {
        match self {
            Failure::Fetch => "Failed to fetch items. Please try again.",
            Failure::Create => "Failed to add item.",
            Failure::Update => "Failed to update item.",
            Failure::Delete => "Failed to delete item.",
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
