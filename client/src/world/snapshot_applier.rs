use std::{collections::HashMap, time::Instant};

use log::{debug, info, warn};

use dungeon_net_shared::{
    c2s::RequestEntitySpawn,
    s2c::{EntityDespawnEvent, EntitySpawnEvent, EntityState, SnapshotMessage},
    DrawComponent, GlobalId, PositionComponent, ServerTick, Vector2, VelocityComponent,
};

use super::{
    components::{HealthComponent, ManaComponent},
    remote_entity::RemoteEntity,
    remote_snapshot::RemoteSnapshot,
};
use crate::ClientConfig;

/// Keeps a [`RemoteSnapshot`] current from decoded server messages.
pub struct SnapshotApplier {
    config: ClientConfig,
    latest_tick: Option<ServerTick>,
    spawn_requested_at: HashMap<GlobalId, Instant>,
    spawn_requests: Vec<RequestEntitySpawn>,
}

impl SnapshotApplier {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            latest_tick: None,
            spawn_requested_at: HashMap::new(),
            spawn_requests: Vec::new(),
        }
    }

    /// Newest server tick applied since the last watermark reset.
    pub fn latest_tick(&self) -> Option<ServerTick> {
        self.latest_tick
    }

    pub fn apply_spawn(&mut self, snapshot: &mut RemoteSnapshot, event: &EntitySpawnEvent) {
        let global_id = GlobalId::new(event.entity_id);
        let mut entity = RemoteEntity::new();
        entity.insert_component(event.position);
        entity.insert_component(VelocityComponent::default());
        entity.insert_component(DrawComponent::new(event.draw_info.clone()));

        self.spawn_requested_at.remove(&global_id);
        if snapshot.insert(global_id, entity).is_some() {
            debug!("Remote entity {} respawned", global_id);
        } else {
            debug!("Remote entity {} spawned", global_id);
        }
    }

    pub fn apply_despawn(&mut self, snapshot: &mut RemoteSnapshot, event: &EntityDespawnEvent) {
        let global_id = GlobalId::new(event.entity_id);
        self.spawn_requested_at.remove(&global_id);
        if snapshot.remove(&global_id).is_none() {
            debug!(
                "Despawn for unknown remote entity {} ignored ({})",
                global_id, event.reason
            );
        }
    }

    /// Applies every entity state of a snapshot that is newer than the last
    /// one accepted. Returns whether the snapshot was applied.
    pub fn apply_snapshot(
        &mut self,
        snapshot: &mut RemoteSnapshot,
        message: &SnapshotMessage,
        now: Instant,
    ) -> bool {
        if !self.accept_tick(message.server_tick) {
            return false;
        }
        snapshot.mark_observed();

        for state in &message.entities {
            let global_id = GlobalId::new(state.entity_id);
            match snapshot.get_mut(&global_id) {
                Some(entity) => {
                    self.spawn_requested_at.remove(&global_id);
                    apply_state(entity, state);
                }
                None => self.request_spawn(global_id, now),
            }
        }
        true
    }

    /// Spawn requests produced since the last call, oldest first.
    pub fn take_spawn_requests(&mut self) -> Vec<RequestEntitySpawn> {
        std::mem::take(&mut self.spawn_requests)
    }

    /// Forgets the tick watermark and any pending spawn requests.
    pub fn reset(&mut self) {
        self.latest_tick = None;
        self.spawn_requested_at.clear();
        self.spawn_requests.clear();
    }

    fn accept_tick(&mut self, server_tick: ServerTick) -> bool {
        if server_tick < 0 {
            warn!("Dropping snapshot with negative server tick {}", server_tick);
            return false;
        }

        let reset_above = i32::MAX.saturating_sub(self.config.stale_tick_reset_threshold);
        if server_tick > reset_above {
            info!(
                "Server tick {} is close to wrapping, resetting watermark {:?}",
                server_tick, self.latest_tick
            );
            self.latest_tick = None;
            return true;
        }

        if let Some(latest) = self.latest_tick {
            if server_tick <= latest {
                warn!(
                    "Dropping stale snapshot for server tick {}, latest is {}",
                    server_tick, latest
                );
                return false;
            }
        }
        self.latest_tick = Some(server_tick);
        true
    }

    fn request_spawn(&mut self, global_id: GlobalId, now: Instant) {
        let due = match self.spawn_requested_at.get(&global_id) {
            Some(last) => now.saturating_duration_since(*last) >= self.config.spawn_request_cooldown,
            None => true,
        };
        if !due {
            debug!("Spawn request for {} still cooling down", global_id);
            return;
        }

        warn!("No remote entity {} for snapshot state, requesting spawn", global_id);
        self.spawn_requested_at.insert(global_id, now);
        self.spawn_requests.push(RequestEntitySpawn {
            entity_id: global_id.value(),
        });
    }
}

fn apply_state(entity: &mut RemoteEntity, state: &EntityState) {
    let mut moved_by = None;
    if let Some(position) = entity.component_mut::<PositionComponent>() {
        if let Some(point) = state.position {
            moved_by = Some(Vector2::new(
                point.x - position.position.x,
                point.y - position.position.y,
            ));
            position.position = point;
        }
        if let Some(view_direction) = state.view_direction {
            position.view_direction = view_direction;
        }
        if let Some(rotation) = state.rotation {
            position.rotation = rotation;
        }
        if let Some(scale) = state.scale {
            position.scale = scale;
        }
    }

    if let Some(velocity) = moved_by {
        match entity.component_mut::<VelocityComponent>() {
            Some(component) => component.velocity = velocity,
            None => entity.insert_component(VelocityComponent { velocity }),
        }
    }

    match entity.component_mut::<HealthComponent>() {
        Some(health) => {
            if let Some(current) = state.current_health {
                health.current = current;
            }
            if let Some(max) = state.max_health {
                health.max = max;
            }
        }
        None => {
            if let Some(max) = state.max_health {
                entity.insert_component(HealthComponent {
                    current: state.current_health.unwrap_or(max),
                    max,
                });
            }
        }
    }

    match entity.component_mut::<ManaComponent>() {
        Some(mana) => {
            if let Some(current) = state.current_mana {
                mana.current = current;
            }
            if let Some(max) = state.max_mana {
                mana.max = max;
            }
        }
        None => {
            if let Some(max) = state.max_mana {
                entity.insert_component(ManaComponent {
                    current: state.current_mana.unwrap_or(max),
                    max,
                });
            }
        }
    }
}
