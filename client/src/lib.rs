//! # Dungeon Net Client
//! Client side of the dungeon network protocol: applies decoded server
//! messages to a remote snapshot and mirrors that snapshot into a local
//! entity world once per game tick.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod shared {
    pub use dungeon_net_shared::*;
}

mod client;
mod client_config;
mod connection_status;
mod sync_events;
mod world;

pub use client::Client;
pub use client_config::ClientConfig;
pub use connection_status::ConnectionStatus;
pub use sync_events::{DespawnEntityEvent, SpawnEntityEvent, SyncEvent, SyncEvents};
pub use world::{
    EntitySynchronizer, HealthComponent, ManaComponent, MirroredEntity, RemoteEntity,
    RemoteSnapshot, SnapshotApplier,
};
