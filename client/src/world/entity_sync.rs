use std::{collections::HashSet, hash::Hash};

use log::{debug, info};

use dungeon_net_shared::{
    DrawComponent, GlobalId, PositionComponent, VelocityComponent, WorldMutType,
};

use super::{components::MirroredEntity, remote_snapshot::RemoteSnapshot};
use crate::{ConnectionStatus, SyncEvents};

/// Mirrors the remote snapshot into the local world once per game tick.
///
/// While connected, four passes run in order, each over a full scan of the
/// world: additions, removals, position sync and animation sync. Once
/// disconnected, every mirrored entity is removed.
#[derive(Debug, Default)]
pub struct EntitySynchronizer;

impl EntitySynchronizer {
    pub fn new() -> Self {
        Self
    }

    pub fn sync<E: Copy + Eq + Hash, W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        status: ConnectionStatus,
        snapshot: &RemoteSnapshot,
    ) -> SyncEvents<E> {
        let mut events = SyncEvents::new();

        if !status.is_connected() {
            let removed = self.remove_mirrored(world, &mut events, |_| true);
            if removed > 0 {
                info!("Removed {} mirrored entities after disconnect", removed);
            }
            return events;
        }

        if !snapshot.has_observed() {
            return events;
        }

        let added = self.add_missing(world, snapshot, &mut events);
        let removed =
            self.remove_mirrored(world, &mut events, |global_id| !snapshot.contains(global_id));
        self.sync_positions(world, snapshot);
        self.sync_animations(world, snapshot);

        if added > 0 || removed > 0 {
            debug!(
                "Reconciled {} remote entities: {} added, {} removed",
                snapshot.len(),
                added,
                removed
            );
        }
        events
    }

    fn add_missing<E: Copy + Eq + Hash, W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        snapshot: &RemoteSnapshot,
        events: &mut SyncEvents<E>,
    ) -> usize {
        let local_ids: HashSet<GlobalId> = world
            .entities()
            .iter()
            .filter_map(|entity| world.global_id(entity))
            .collect();

        let mut missing: Vec<GlobalId> = snapshot
            .ids()
            .filter(|global_id| !local_ids.contains(global_id))
            .copied()
            .collect();
        missing.sort();

        for global_id in &missing {
            let Some(remote) = snapshot.get(global_id) else {
                continue;
            };
            let entity = world.spawn_entity();
            world.set_global_id(&entity, *global_id);
            for component in remote.copy_components() {
                world.insert_boxed_component(&entity, component);
            }
            world.insert_component(&entity, MirroredEntity);
            events.push_spawn(*global_id, entity);
        }
        missing.len()
    }

    fn remove_mirrored<E: Copy + Eq + Hash, W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        events: &mut SyncEvents<E>,
        should_remove: impl Fn(&GlobalId) -> bool,
    ) -> usize {
        let mut removed = 0;
        for entity in world.entities_with::<MirroredEntity>() {
            let Some(global_id) = world.global_id(&entity) else {
                continue;
            };
            if should_remove(&global_id) {
                world.despawn_entity(&entity);
                events.push_despawn(global_id, entity);
                removed += 1;
            }
        }
        removed
    }

    fn sync_positions<E: Copy + Eq + Hash, W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        snapshot: &RemoteSnapshot,
    ) {
        for entity in world.entities_with::<PositionComponent>() {
            let Some(remote) = world
                .global_id(&entity)
                .and_then(|global_id| snapshot.get(&global_id))
                .and_then(|remote| remote.component::<PositionComponent>())
            else {
                continue;
            };
            if let Some(local) = world.component_mut::<PositionComponent>(&entity) {
                *local = *remote;
            }
        }
    }

    fn sync_animations<E: Copy + Eq + Hash, W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        snapshot: &RemoteSnapshot,
    ) {
        for entity in world.entities_with::<VelocityComponent>() {
            let Some(remote) = world
                .global_id(&entity)
                .and_then(|global_id| snapshot.get(&global_id))
                .and_then(|remote| remote.component::<VelocityComponent>())
            else {
                continue;
            };
            if let Some(draw) = world.component_mut::<DrawComponent>(&entity) {
                draw.animation = draw.animation.for_velocity(remote.velocity.x);
            }
        }
    }
}
