use std::{hash::Hash, sync::Arc, time::Instant};

use log::{info, warn};

use dungeon_net_shared::{
    c2s::RequestEntitySpawn,
    s2c::{
        ConnectAck, ConnectReject, EntityDespawnEvent, EntitySpawnBatch, EntitySpawnEvent,
        SnapshotMessage,
    },
    CodecError, NetworkMessage, Protocol, WorldMutType,
};

use crate::{
    world::{EntitySynchronizer, RemoteSnapshot, SnapshotApplier},
    ClientConfig, ConnectionStatus, SyncEvents,
};

/// Client session state: decodes server envelopes, tracks the connection,
/// keeps the remote snapshot current and mirrors it into a local world.
pub struct Client {
    protocol: Arc<Protocol>,
    status: ConnectionStatus,
    snapshot: RemoteSnapshot,
    applier: SnapshotApplier,
    synchronizer: EntitySynchronizer,
}

impl Client {
    /// Create a new Client
    pub fn new(protocol: Arc<Protocol>, config: ClientConfig) -> Self {
        Self {
            protocol,
            status: ConnectionStatus::Disconnected,
            snapshot: RemoteSnapshot::new(),
            applier: SnapshotApplier::new(config),
            synchronizer: EntitySynchronizer::new(),
        }
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }

    pub fn remote_snapshot(&self) -> &RemoteSnapshot {
        &self.snapshot
    }

    /// Encode an outgoing message into an envelope.
    pub fn send(&self, message: &dyn NetworkMessage) -> Result<Vec<u8>, CodecError> {
        self.protocol.encode(message)
    }

    /// Decode an incoming envelope and route it. Entity messages are
    /// consumed here, every other message is handed back.
    pub fn receive(
        &mut self,
        envelope: &[u8],
        now: Instant,
    ) -> Result<Option<Box<dyn NetworkMessage>>, CodecError> {
        let message = self.protocol.decode(envelope)?;
        Ok(self.handle(message, now))
    }

    /// Route an already decoded message.
    pub fn handle(
        &mut self,
        message: Box<dyn NetworkMessage>,
        now: Instant,
    ) -> Option<Box<dyn NetworkMessage>> {
        let received: &dyn NetworkMessage = &*message;

        if let Some(ack) = received.downcast_ref::<ConnectAck>() {
            info!("Connected as client {}", ack.client_id);
            self.status = ConnectionStatus::Connected {
                client_id: ack.client_id,
            };
            return Some(message);
        }
        if let Some(reject) = received.downcast_ref::<ConnectReject>() {
            info!("Connection rejected: {:?}", reject.reason);
            self.disconnect();
            return Some(message);
        }

        let is_entity_message = received.is::<EntitySpawnEvent>()
            || received.is::<EntitySpawnBatch>()
            || received.is::<EntityDespawnEvent>()
            || received.is::<SnapshotMessage>();
        if !is_entity_message {
            return Some(message);
        }
        if !self.status.is_connected() {
            warn!("Dropping {} received while disconnected", received.kind());
            return None;
        }

        if let Some(event) = received.downcast_ref::<EntitySpawnEvent>() {
            self.applier.apply_spawn(&mut self.snapshot, event);
        } else if let Some(batch) = received.downcast_ref::<EntitySpawnBatch>() {
            for event in &batch.entities {
                self.applier.apply_spawn(&mut self.snapshot, event);
            }
        } else if let Some(event) = received.downcast_ref::<EntityDespawnEvent>() {
            self.applier.apply_despawn(&mut self.snapshot, event);
        } else if let Some(snapshot) = received.downcast_ref::<SnapshotMessage>() {
            self.applier.apply_snapshot(&mut self.snapshot, snapshot, now);
        }
        None
    }

    /// Spawn requests for unknown remote entities, to be sent by the caller.
    pub fn take_spawn_requests(&mut self) -> Vec<RequestEntitySpawn> {
        self.applier.take_spawn_requests()
    }

    /// Drop the session. The next [`Client::tick`] removes every mirrored
    /// entity.
    pub fn disconnect(&mut self) {
        if self.status.is_connected() {
            info!("Disconnected");
        }
        self.status = ConnectionStatus::Disconnected;
        self.snapshot.clear();
        self.applier.reset();
    }

    /// Run one reconciliation pass against the local world.
    pub fn tick<E: Copy + Eq + Hash, W: WorldMutType<E>>(&mut self, world: &mut W) -> SyncEvents<E> {
        self.synchronizer.sync(world, self.status, &self.snapshot)
    }
}
