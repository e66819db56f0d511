//! Error types for the sync layer.

use ordo_types::EntityId;
use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in sync operations.
///
/// None of these roll back local state: an optimistic mutation stays
/// applied even when its remote confirmation fails.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network or server error reported by the remote store.
    #[error("remote error: {0}")]
    Remote(String),

    /// The remote store does not know the entity.
    #[error("entity not found remotely: {0}")]
    NotFound(EntityId),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// The remote call did not answer within the configured timeout.
    #[error("operation timed out")]
    Timeout,

    /// A background task panicked or was cancelled.
    #[error("background task failed: {0}")]
    TaskJoin(String),
}
