use std::collections::HashMap;

use dungeon_net_shared::GlobalId;

use super::remote_entity::RemoteEntity;

/// The authoritative set of entities as seen from the multiplayer session,
/// keyed by global id.
#[derive(Debug, Default)]
pub struct RemoteSnapshot {
    entities: HashMap<GlobalId, RemoteEntity>,
    observed: bool,
}

impl RemoteSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Whether any spawn or accepted snapshot arrived since the last
    /// `clear`. An empty snapshot that was observed still means every
    /// mirrored entity is gone.
    pub fn has_observed(&self) -> bool {
        self.observed
    }

    pub fn mark_observed(&mut self) {
        self.observed = true;
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn contains(&self, global_id: &GlobalId) -> bool {
        self.entities.contains_key(global_id)
    }

    pub fn get(&self, global_id: &GlobalId) -> Option<&RemoteEntity> {
        self.entities.get(global_id)
    }

    pub fn get_mut(&mut self, global_id: &GlobalId) -> Option<&mut RemoteEntity> {
        self.entities.get_mut(global_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &GlobalId> {
        self.entities.keys()
    }

    /// Inserts an entity, replacing any previous entity with the same id.
    pub fn insert(&mut self, global_id: GlobalId, entity: RemoteEntity) -> Option<RemoteEntity> {
        self.observed = true;
        self.entities.insert(global_id, entity)
    }

    pub fn remove(&mut self, global_id: &GlobalId) -> Option<RemoteEntity> {
        self.entities.remove(global_id)
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.observed = false;
    }
}
