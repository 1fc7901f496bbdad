//! Object registry
//!
//! Maps entity ids to live, shared entities. The registry is an ordinary
//! value owned by whoever drives the simulation (the demo binary, a test);
//! there is no process-wide instance.
//!
//! Entities are built first and registered second: the caller wraps the
//! entity in a [`Handle`], keeps the typed handle for itself and hands a
//! clone to [`ObjectRegistry::register`]. Both point at the same object, so
//! state changes made through either side are visible to the other.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Entity, EntityId, EntityKind, EntitySnapshot};

/// Shared, lockable entity of a known type
pub type Handle<T> = Arc<RwLock<T>>;

/// Shared, lockable entity of any type, as stored in the registry
pub type EntityHandle = Arc<RwLock<dyn Entity>>;

/// Wrap an entity so it can be shared with a registry
pub fn share<T: Entity>(entity: T) -> Handle<T> {
    Arc::new(RwLock::new(entity))
}

/// Lock access that survives a panicked writer.
///
/// Entity methods either apply their change completely or not at all, so the
/// data behind a poisoned lock is still consistent.
pub trait LockExt<T: ?Sized> {
    fn read_lock(&self) -> RwLockReadGuard<'_, T>;

    fn write_lock(&self) -> RwLockWriteGuard<'_, T>;
}

impl<T: ?Sized> LockExt<T> for RwLock<T> {
    fn read_lock(&self) -> RwLockReadGuard<'_, T> {
        self.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, T> {
        self.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Store of live entities keyed by id. At most one entry per id.
#[derive(Default)]
pub struct ObjectRegistry {
    entries: HashMap<EntityId, EntityHandle>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for the entity's id. Always succeeds.
    pub fn register(&mut self, entity: EntityHandle) -> EntityId {
        let (id, kind) = {
            let guard = entity.read_lock();
            (guard.id(), guard.kind())
        };

        if self.entries.insert(id, entity).is_some() {
            tracing::debug!(id = %id, kind = %kind, "Re-registered entity (replaced previous entry)");
        } else {
            tracing::debug!(id = %id, kind = %kind, "Registered entity");
        }
        id
    }

    /// Share and register in one step, returning the typed handle
    pub fn insert<T: Entity>(&mut self, entity: T) -> Handle<T> {
        let handle = share(entity);
        self.register(handle.clone());
        handle
    }

    /// Look up a live entity; `None` if the id is not registered
    pub fn lookup(&self, id: &EntityId) -> Option<EntityHandle> {
        match self.entries.get(id) {
            Some(entity) => {
                tracing::debug!(id = %id, "Retrieved entity");
                Some(Arc::clone(entity))
            }
            None => {
                tracing::warn!(id = %id, "Entity not found");
                None
            }
        }
    }

    /// Copy of the id -> entity map. Changing the copy leaves the registry
    /// alone; the entities themselves are shared, not cloned.
    pub fn list_all(&self) -> HashMap<EntityId, EntityHandle> {
        self.entries.clone()
    }

    /// Remove an entry; `false` if the id was not registered
    pub fn remove(&mut self, id: &EntityId) -> bool {
        if self.entries.remove(id).is_some() {
            tracing::debug!(id = %id, "Removed entity");
            true
        } else {
            tracing::warn!(id = %id, "Cannot remove: entity not found");
            false
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        tracing::debug!(count = self.entries.len(), "Cleared all entities");
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids of every registered entity of the given kind
    pub fn ids_of_kind(&self, kind: EntityKind) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .entries
            .iter()
            .filter(|(_, entity)| entity.read_lock().kind() == kind)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    /// Snapshots of every registered entity, ordered by name then id
    pub fn snapshots(&self) -> Vec<EntitySnapshot> {
        let mut rows: Vec<(String, EntityId, EntitySnapshot)> = self
            .entries
            .values()
            .map(|entity| {
                let guard = entity.read_lock();
                (guard.name().to_string(), guard.id(), guard.to_dict())
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
        rows.into_iter().map(|(_, _, snapshot)| snapshot).collect()
    }
}

impl std::fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectRegistry")
            .field("len", &self.entries.len())
            .finish()
    }
}
