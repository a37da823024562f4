mod components;
mod entity_sync;
mod remote_entity;
mod remote_snapshot;
mod snapshot_applier;

pub use components::{HealthComponent, ManaComponent, MirroredEntity};
pub use entity_sync::EntitySynchronizer;
pub use remote_entity::RemoteEntity;
pub use remote_snapshot::RemoteSnapshot;
pub use snapshot_applier::SnapshotApplier;
