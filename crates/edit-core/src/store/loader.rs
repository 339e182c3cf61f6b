use thiserror::Error;

/// Errors surfaced by the external retrieval collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport layer failed before a response was received.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The collaborator answered with a non-success status.
    #[error("unexpected response status {status}")]
    Status { status: u16 },
    /// The fetch exceeded its deadline. Implementations must report this
    /// instead of hanging the caller.
    #[error("fetch deadline exceeded")]
    DeadlineExceeded,
}

/// Defines the seam to the external structure-retrieval collaborator.
///
/// The store calls this exactly once per cache miss to obtain the canonical
/// coordinate text for a validated accession. Implementations own transport,
/// retry, and timeout policy; this crate ships no network client of its own.
pub trait StructureFetcher {
    /// Fetches canonical structure text for a validated, upper-cased
    /// accession.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on any transport failure, non-success
    /// response, or deadline overrun. The store is left unmodified when a
    /// fetch fails.
    fn fetch(&self, accession: &str) -> Result<String, FetchError>;
}
