//! Core type definitions for Ordo.
//!
//! This crate defines the primitive types shared by every other crate in
//! the workspace:
//! - Entity identifiers (integer ids assigned by the remote store)
//! - Request identifiers (UUID v7) for tracking outstanding remote calls
//! - `Timestamp` for the authoritative `modifiedAt` of an entity
//!
//! Entity shapes (projects, labels, tasks, ...) live in `ordo-model`; the
//! ordering machinery lives in `ordo-order`.

mod ids;
mod timestamp;

pub use ids::{EntityId, RequestId};
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid entity id: {0}")]
    InvalidEntityId(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
