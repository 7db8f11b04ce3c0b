//! Service-layer error taxonomy.

use thiserror::Error;

use crate::validation::Violations;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure from the document store collaborator.
///
/// Opaque to the service layer: never recovered or retried here, it bubbles
/// up to the transport boundary as a 5xx.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not complete the operation.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// The store accepted a save but did not assign an identifier.
    #[error("document store did not assign an identifier")]
    MissingId,
}

/// Outcome signal of one pipeline run.
///
/// `Validation` and `NotFound` are expected control-flow outcomes, produced
/// intentionally by the handler/service and interpreted only at the response
/// boundary. They are not program errors and must not be logged as such.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input failed validation; carries the field/message violations.
    #[error("validation failed")]
    Validation(Violations),

    /// An id-scoped operation targeted a non-existent document.
    #[error("not found")]
    NotFound,

    /// Persistence failure, propagated unchanged from the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}
