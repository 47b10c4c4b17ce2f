//! Error types for the API client.

/// Errors that can occur when talking to the DirectoryDock service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The endpoint responded 404. Either the API key baked into the base URL
    /// is invalid or the data file does not exist; the service does not
    /// distinguish the two.
    #[error("Invalid API key or file not found")]
    InvalidCredential,
    /// A network-level failure, a non-success response other than 404, or a
    /// response body that could not be read or decoded. Details are logged at
    /// the failure site.
    #[error("Request failed")]
    Transport,
    /// A slug lookup completed but no entry matched.
    #[error("Entry with slug {slug:?} not found")]
    NotFound { slug: String },
}
