//! Order key allocation.
//!
//! Every function here works on the raw entity slice of a collection and
//! returns the key the new (or moved) entity must take. Keys above the
//! insertion point are shifted up by exactly one so relative order is kept
//! and no two entities collide. Gaps left behind by moves and deletes are
//! fine; collisions are not.
//!
//! The moved entity is always excluded from the shift pass of a move, so it
//! never shares a key with a neighbour, not even before it is reassigned.
//!
//! A key that would have to grow past `i64::MAX` makes the whole operation
//! fail with `None` before any entity is touched.

use crate::Ordered;
use ordo_types::EntityId;

/// Which keys a shift pass touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    /// `order > threshold`
    Above(i64),
    /// `order >= threshold`
    AtOrAbove(i64),
}

impl Bound {
    fn includes(self, order: i64) -> bool {
        match self {
            Bound::Above(t) => order > t,
            Bound::AtOrAbove(t) => order >= t,
        }
    }
}

/// Shifts every qualifying key by +1, skipping `exclude`.
///
/// Returns how many entities were touched, or `None` (touching nothing) if
/// a qualifying key is already `i64::MAX`.
fn shift<E: Ordered>(
    entities: &mut [E],
    bound: Bound,
    exclude: Option<EntityId>,
) -> Option<usize> {
    let qualifies = |e: &E| Some(e.id()) != exclude && bound.includes(e.order());
    if entities.iter().any(|e| qualifies(e) && e.order() == i64::MAX) {
        return None;
    }
    let mut shifted = 0;
    for e in entities.iter_mut() {
        if qualifies(&*e) {
            e.set_order(e.order() + 1);
            shifted += 1;
        }
    }
    Some(shifted)
}

/// Smallest key among `entities`, ignoring `exclude`.
fn min_order<E: Ordered>(entities: &[E], exclude: Option<EntityId>) -> Option<i64> {
    entities
        .iter()
        .filter(|e| Some(e.id()) != exclude)
        .map(Ordered::order)
        .min()
}

/// Largest key plus one, ignoring `exclude`. 1 when nothing else is there.
fn past_max<E: Ordered>(entities: &[E], exclude: Option<EntityId>) -> Option<i64> {
    entities
        .iter()
        .filter(|e| Some(e.id()) != exclude)
        .map(Ordered::order)
        .max()
        .map_or(Some(1), |max| max.checked_add(1))
}

/// The key that makes an entity strictly first: 1, or the current minimum
/// when some key already sits below 1.
fn first_slot<E: Ordered>(entities: &[E], exclude: Option<EntityId>) -> i64 {
    min_order(entities, exclude).map_or(1, |min| min.min(1))
}

/// Makes room directly after `existing` and returns `existing + 1`.
pub fn insert_after<E: Ordered>(entities: &mut [E], existing: i64) -> Option<i64> {
    let target = existing.checked_add(1)?;
    shift(entities, Bound::Above(existing), None)?;
    Some(target)
}

/// Makes room at `existing`, pushing it and everything above up by one,
/// and returns `existing`.
pub fn insert_before<E: Ordered>(entities: &mut [E], existing: i64) -> Option<i64> {
    shift(entities, Bound::AtOrAbove(existing), None)?;
    Some(existing)
}

/// Pushes every key up by one and returns the first slot.
pub fn insert_as_first<E: Ordered>(entities: &mut [E]) -> Option<i64> {
    let target = first_slot(entities, None);
    shift(entities, Bound::AtOrAbove(target), None)?;
    Some(target)
}

/// One past the largest key, or 1 for an empty collection.
pub fn next_order<E: Ordered>(entities: &[E]) -> Option<i64> {
    past_max(entities, None)
}

/// Moves `moved` directly after the key `existing`.
///
/// Returns the new key, or `None` if `moved` is not in `entities` or the
/// keys above `existing` cannot grow.
pub fn move_after<E: Ordered>(entities: &mut [E], moved: EntityId, existing: i64) -> Option<i64> {
    let pos = entities.iter().position(|e| e.id() == moved)?;
    let target = existing.checked_add(1)?;
    shift(entities, Bound::Above(existing), Some(moved))?;
    entities[pos].set_order(target);
    Some(target)
}

/// Moves `moved` into the key `existing`, pushing the current holder and
/// everything above it up by one.
pub fn move_before<E: Ordered>(entities: &mut [E], moved: EntityId, existing: i64) -> Option<i64> {
    let pos = entities.iter().position(|e| e.id() == moved)?;
    shift(entities, Bound::AtOrAbove(existing), Some(moved))?;
    entities[pos].set_order(existing);
    Some(existing)
}

/// Moves `moved` to the front of the collection.
pub fn move_as_first<E: Ordered>(entities: &mut [E], moved: EntityId) -> Option<i64> {
    let pos = entities.iter().position(|e| e.id() == moved)?;
    let target = first_slot(entities, Some(moved));
    shift(entities, Bound::AtOrAbove(target), Some(moved))?;
    entities[pos].set_order(target);
    Some(target)
}

/// Moves `moved` past the current last entity. Nothing else is shifted.
pub fn move_as_last<E: Ordered>(entities: &mut [E], moved: EntityId) -> Option<i64> {
    let pos = entities.iter().position(|e| e.id() == moved)?;
    let target = past_max(entities, Some(moved))?;
    entities[pos].set_order(target);
    Some(target)
}
