//! Built-in converters for every message of the dungeon protocol.

mod c2s;
mod s2c;

pub use c2s::{
    ConnectRequestConverter, DialogResponseConverter, InputMessageConverter,
    RegisterUdpConverter, RequestEntitySpawnConverter, SoundFinishedConverter,
};
pub use s2c::{
    ConnectAckConverter, ConnectRejectConverter, DialogCloseConverter, DialogShowConverter,
    EntityDespawnConverter, EntitySpawnBatchConverter, EntitySpawnConverter,
    EntityStateConverter, GameOverConverter, LevelChangeConverter, RegisterAckConverter,
    SnapshotConverter, SoundPlayConverter, SoundStopConverter,
};

use super::{ConverterRegistry, RegistrationError};

/// Fixed wire type ids. These are a contract between peers and must never be
/// renumbered or reused.
pub mod wire_ids {
    use crate::types::WireTypeId;

    pub const CONNECT_REQUEST: WireTypeId = 1;
    pub const INPUT: WireTypeId = 2;
    pub const DIALOG_RESPONSE: WireTypeId = 3;
    pub const REGISTER_UDP: WireTypeId = 4;
    pub const REQUEST_ENTITY_SPAWN: WireTypeId = 5;
    pub const SOUND_FINISHED: WireTypeId = 6;
    pub const CONNECT_ACK: WireTypeId = 7;
    pub const CONNECT_REJECT: WireTypeId = 8;
    pub const DIALOG_SHOW: WireTypeId = 9;
    pub const DIALOG_CLOSE: WireTypeId = 10;
    pub const ENTITY_SPAWN: WireTypeId = 11;
    pub const ENTITY_DESPAWN: WireTypeId = 12;
    pub const ENTITY_STATE: WireTypeId = 13;
    pub const ENTITY_SPAWN_BATCH: WireTypeId = 14;
    pub const GAME_OVER: WireTypeId = 15;
    pub const LEVEL_CHANGE: WireTypeId = 16;
    pub const REGISTER_ACK: WireTypeId = 17;
    pub const SNAPSHOT: WireTypeId = 18;
    pub const SOUND_PLAY: WireTypeId = 19;
    pub const SOUND_STOP: WireTypeId = 20;
}

/// Register every built-in converter (wire ids 1 through 20).
pub fn register_default_converters(
    registry: &mut ConverterRegistry,
) -> Result<(), RegistrationError> {
    registry.register(ConnectRequestConverter)?;
    registry.register(InputMessageConverter)?;
    registry.register(DialogResponseConverter)?;
    registry.register(RegisterUdpConverter)?;
    registry.register(RequestEntitySpawnConverter)?;
    registry.register(SoundFinishedConverter)?;
    registry.register(ConnectAckConverter)?;
    registry.register(ConnectRejectConverter)?;
    registry.register(DialogShowConverter)?;
    registry.register(DialogCloseConverter)?;
    registry.register(EntitySpawnConverter)?;
    registry.register(EntityDespawnConverter)?;
    registry.register(EntityStateConverter)?;
    registry.register(EntitySpawnBatchConverter)?;
    registry.register(GameOverConverter)?;
    registry.register(LevelChangeConverter)?;
    registry.register(RegisterAckConverter)?;
    registry.register(SnapshotConverter)?;
    registry.register(SoundPlayConverter)?;
    registry.register(SoundStopConverter)?;
    Ok(())
}
