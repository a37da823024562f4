use std::vec::IntoIter;

use dungeon_net_shared::GlobalId;

/// Changes the reconciliation loop made to the local world during one tick.
pub struct SyncEvents<E> {
    spawns: Vec<(GlobalId, E)>,
    despawns: Vec<(GlobalId, E)>,
    empty: bool,
}

impl<E> Default for SyncEvents<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SyncEvents<E> {
    pub(crate) fn new() -> Self {
        Self {
            spawns: Vec::new(),
            despawns: Vec::new(),
            empty: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: SyncEvent<E>>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: SyncEvent<E>>(&self) -> bool {
        V::has(self)
    }

    pub(crate) fn push_spawn(&mut self, global_id: GlobalId, entity: E) {
        self.spawns.push((global_id, entity));
        self.empty = false;
    }

    pub(crate) fn push_despawn(&mut self, global_id: GlobalId, entity: E) {
        self.despawns.push((global_id, entity));
        self.empty = false;
    }
}

// Event Trait
pub trait SyncEvent<E> {
    type Iter;

    fn iter(events: &mut SyncEvents<E>) -> Self::Iter;

    fn has(events: &SyncEvents<E>) -> bool;
}

// Spawn Entity Event
pub struct SpawnEntityEvent;
impl<E> SyncEvent<E> for SpawnEntityEvent {
    type Iter = IntoIter<(GlobalId, E)>;

    fn iter(events: &mut SyncEvents<E>) -> Self::Iter {
        let list = std::mem::take(&mut events.spawns);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SyncEvents<E>) -> bool {
        !events.spawns.is_empty()
    }
}

// Despawn Entity Event
pub struct DespawnEntityEvent;
impl<E> SyncEvent<E> for DespawnEntityEvent {
    type Iter = IntoIter<(GlobalId, E)>;

    fn iter(events: &mut SyncEvents<E>) -> Self::Iter {
        let list = std::mem::take(&mut events.despawns);
        IntoIterator::into_iter(list)
    }

    fn has(events: &SyncEvents<E>) -> bool {
        !events.despawns.is_empty()
    }
}
