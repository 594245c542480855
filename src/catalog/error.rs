use thiserror::Error;

/// Failures talking to the stock or catalog backend.
///
/// A missing record is not an error here; lookups answer `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
