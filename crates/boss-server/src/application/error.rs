//! Application-level error taxonomy.
//!
//! Every service operation fails with a [`ServiceError`].  The HTTP layer maps
//! each variant to a status code; nothing here knows about HTTP.

use thiserror::Error;

use boss_core::{ChallengeError, CompletionError};

use super::repository::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The named boss is not in the catalog.
    #[error("unknown boss: {0}")]
    NotFound(String),

    /// Generation was requested with every boss disabled.
    #[error("No bosses enabled")]
    NoBossesEnabled,

    /// A completion request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] CompletionError),

    /// A state file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ChallengeError> for ServiceError {
    fn from(err: ChallengeError) -> Self {
        match err {
            ChallengeError::NoBossesEnabled => ServiceError::NoBossesEnabled,
        }
    }
}
