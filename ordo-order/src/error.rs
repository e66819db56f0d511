use ordo_types::EntityId;

/// Result type for derived hierarchy computations.
pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Structural problems found while walking parent chains.
///
/// These fail only the computation that hit them; the collection itself is
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    #[error("entity {0} not found")]
    UnknownEntity(EntityId),

    #[error("entity {child} references missing parent {parent}")]
    MissingParent { child: EntityId, parent: EntityId },

    #[error("cycle in parent chain at entity {0}")]
    Cycle(EntityId),
}
