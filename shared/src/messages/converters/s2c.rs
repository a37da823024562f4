use dungeon_net_wire::{self as wire, s2c::RejectReason as WireRejectReason};

use super::wire_ids;
use crate::{
    dialog::DialogContext,
    messages::{
        s2c::{
            ConnectAck, ConnectReject, DialogClose, DialogShow, EntityDespawnEvent,
            EntitySpawnBatch, EntitySpawnEvent, EntityState, GameOver, LevelChange, PlayerInfo,
            RegisterAck, RejectReason, SnapshotMessage, SoundPlay, SoundStop,
        },
        ConvertContext, MessageConverter,
    },
    types::WireTypeId,
    values::{
        item_from_wire, item_to_wire, narrow, ConvertError, Direction, DrawInfo, PositionComponent,
        SoundSpec,
    },
};

pub struct ConnectAckConverter;

impl MessageConverter for ConnectAckConverter {
    type Message = ConnectAck;
    type Wire = wire::s2c::ConnectAck;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::CONNECT_ACK
    }

    fn to_wire(&self, message: &ConnectAck, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::ConnectAck {
            client_id: message.client_id.into(),
            session_id: message.session_id,
            session_token: message.session_token.clone(),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<ConnectAck, ConvertError> {
        Ok(ConnectAck {
            client_id: narrow("ConnectAck.client_id", wire.client_id)?,
            session_id: wire.session_id,
            session_token: wire.session_token.clone(),
        })
    }
}

pub struct ConnectRejectConverter;

impl MessageConverter for ConnectRejectConverter {
    type Message = ConnectReject;
    type Wire = wire::s2c::ConnectReject;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::CONNECT_REJECT
    }

    fn to_wire(&self, message: &ConnectReject, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        let reason = match message.reason {
            RejectReason::InvalidName => WireRejectReason::InvalidName,
            RejectReason::IncompatibleVersion => WireRejectReason::IncompatibleVersion,
            RejectReason::NoSessionFound => WireRejectReason::NoSessionFound,
            RejectReason::InvalidSessionToken => WireRejectReason::InvalidSessionToken,
            RejectReason::Other => WireRejectReason::Other,
        };
        Ok(wire::s2c::ConnectReject {
            reason: reason as i32,
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<ConnectReject, ConvertError> {
        let reason = match WireRejectReason::try_from(wire.reason) {
            Ok(WireRejectReason::InvalidName) => RejectReason::InvalidName,
            Ok(WireRejectReason::IncompatibleVersion) => RejectReason::IncompatibleVersion,
            Ok(WireRejectReason::NoSessionFound) => RejectReason::NoSessionFound,
            Ok(WireRejectReason::InvalidSessionToken) => RejectReason::InvalidSessionToken,
            Ok(WireRejectReason::Other) => RejectReason::Other,
            Ok(WireRejectReason::Unspecified) | Err(_) => {
                return Err(ConvertError::UnknownEnumValue {
                    field: "ConnectReject.reason",
                    value: wire.reason,
                });
            }
        };
        Ok(ConnectReject { reason })
    }
}

pub struct DialogShowConverter;

impl MessageConverter for DialogShowConverter {
    type Message = DialogShow;
    type Wire = wire::s2c::DialogShow;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::DIALOG_SHOW
    }

    fn to_wire(&self, message: &DialogShow, ctx: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::DialogShow {
            context: Some(message.context.to_wire(ctx.attributes)?),
            can_be_closed: message.can_be_closed,
        })
    }

    fn from_wire(&self, wire: &Self::Wire, ctx: &ConvertContext) -> Result<DialogShow, ConvertError> {
        let context = wire.context.as_ref().ok_or(ConvertError::MissingField {
            field: "DialogShow.context",
        })?;
        Ok(DialogShow {
            context: DialogContext::from_wire(context, ctx.attributes)?,
            can_be_closed: wire.can_be_closed,
        })
    }
}

pub struct DialogCloseConverter;

impl MessageConverter for DialogCloseConverter {
    type Message = DialogClose;
    type Wire = wire::s2c::DialogClose;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::DIALOG_CLOSE
    }

    fn to_wire(&self, message: &DialogClose, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::DialogClose {
            dialog_id: message.dialog_id.clone(),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<DialogClose, ConvertError> {
        Ok(DialogClose {
            dialog_id: wire.dialog_id.clone(),
        })
    }
}

fn spawn_to_wire(event: &EntitySpawnEvent) -> Result<wire::s2c::EntitySpawnEvent, ConvertError> {
    let character_class_id = (event.player.is_some() || event.character_class_id != 0)
        .then_some(i32::from(event.character_class_id));
    Ok(wire::s2c::EntitySpawnEvent {
        entity_id: event.entity_id,
        position_info: Some((&event.position).into()),
        draw_info: Some(wire::DrawInfo::try_from(&event.draw_info)?),
        is_persistent: event.is_persistent,
        player_info: event.player.as_ref().map(|player| wire::s2c::PlayerInfo {
            player_name: player.player_name.clone(),
            is_local_player: player.is_local_player,
        }),
        character_class_id,
    })
}

fn spawn_from_wire(event: &wire::s2c::EntitySpawnEvent) -> Result<EntitySpawnEvent, ConvertError> {
    let position_info = event.position_info.as_ref().ok_or(ConvertError::MissingField {
        field: "EntitySpawnEvent.position_info",
    })?;
    let draw_info = event.draw_info.as_ref().ok_or(ConvertError::MissingField {
        field: "EntitySpawnEvent.draw_info",
    })?;
    Ok(EntitySpawnEvent {
        entity_id: event.entity_id,
        position: PositionComponent::try_from(position_info)?,
        draw_info: DrawInfo::try_from(draw_info)?,
        is_persistent: event.is_persistent,
        player: event.player_info.as_ref().map(|player| PlayerInfo {
            player_name: player.player_name.clone(),
            is_local_player: player.is_local_player,
        }),
        character_class_id: narrow(
            "EntitySpawnEvent.character_class_id",
            event.character_class_id.unwrap_or(0),
        )?,
    })
}

pub struct EntitySpawnConverter;

impl MessageConverter for EntitySpawnConverter {
    type Message = EntitySpawnEvent;
    type Wire = wire::s2c::EntitySpawnEvent;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::ENTITY_SPAWN
    }

    fn to_wire(&self, message: &EntitySpawnEvent, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        spawn_to_wire(message)
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<EntitySpawnEvent, ConvertError> {
        spawn_from_wire(wire)
    }
}

pub struct EntitySpawnBatchConverter;

impl MessageConverter for EntitySpawnBatchConverter {
    type Message = EntitySpawnBatch;
    type Wire = wire::s2c::EntitySpawnBatch;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::ENTITY_SPAWN_BATCH
    }

    fn to_wire(&self, message: &EntitySpawnBatch, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::EntitySpawnBatch {
            entities: message
                .entities
                .iter()
                .map(spawn_to_wire)
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<EntitySpawnBatch, ConvertError> {
        Ok(EntitySpawnBatch {
            entities: wire
                .entities
                .iter()
                .map(spawn_from_wire)
                .collect::<Result<_, _>>()?,
        })
    }
}

pub struct EntityDespawnConverter;

impl MessageConverter for EntityDespawnConverter {
    type Message = EntityDespawnEvent;
    type Wire = wire::s2c::EntityDespawnEvent;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::ENTITY_DESPAWN
    }

    fn to_wire(&self, message: &EntityDespawnEvent, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::EntityDespawnEvent {
            entity_id: message.entity_id,
            reason: message.reason.clone(),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<EntityDespawnEvent, ConvertError> {
        Ok(EntityDespawnEvent {
            entity_id: wire.entity_id,
            reason: wire.reason.clone(),
        })
    }
}

fn state_to_wire(
    state: &EntityState,
    ctx: &ConvertContext,
) -> Result<wire::s2c::EntityState, ConvertError> {
    let has_orientation =
        state.view_direction.is_some() || state.rotation.is_some() || state.scale.is_some();
    if state.position.is_none() && has_orientation {
        return Err(ConvertError::Inconsistent {
            message: "EntityState",
            reason: "position is required to send view direction, rotation or scale",
        });
    }

    let mut inventory = Vec::new();
    for (index, slot) in state.inventory.iter().flatten().enumerate() {
        if index >= ctx.max_inventory_slots {
            return Err(slot_out_of_range(index as i64));
        }
        inventory.push(wire::s2c::ItemSlot {
            slot_index: narrow("EntityState.inventory.slot_index", index as i64)?,
            item: slot
                .as_ref()
                .map(|item| item_to_wire(&**item, ctx.items))
                .transpose()?,
        });
    }

    Ok(wire::s2c::EntityState {
        entity_id: state.entity_id,
        entity_name: state.entity_name.clone(),
        position: state.position.map(Into::into),
        view_direction: state
            .view_direction
            .map_or(wire::Direction::Unspecified, Direction::to_wire) as i32,
        rotation: state.rotation,
        scale: state.scale.map(Into::into),
        current_health: state.current_health,
        max_health: state.max_health,
        current_mana: state.current_mana,
        max_mana: state.max_mana,
        state_name: state.state_name.clone(),
        tint_color: state.tint_color,
        inventory,
    })
}

fn slot_out_of_range(slot_index: i64) -> ConvertError {
    ConvertError::OutOfRange {
        field: "EntityState.inventory.slot_index",
        value: slot_index,
        target: "max_inventory_slots",
    }
}

/// An empty repeated inventory means "no inventory update".
fn state_from_wire(
    state: &wire::s2c::EntityState,
    ctx: &ConvertContext,
) -> Result<EntityState, ConvertError> {
    let inventory = if state.inventory.is_empty() {
        None
    } else {
        let mut highest = 0;
        for slot in &state.inventory {
            if slot.slot_index < 0 {
                return Err(ConvertError::NegativeSlotIndex {
                    slot_index: slot.slot_index,
                });
            }
            if slot.slot_index as usize >= ctx.max_inventory_slots {
                return Err(slot_out_of_range(slot.slot_index.into()));
            }
            highest = highest.max(slot.slot_index);
        }
        let mut slots = Vec::new();
        slots.resize_with(highest as usize + 1, || None);
        for slot in &state.inventory {
            if let Some(item) = &slot.item {
                slots[slot.slot_index as usize] = Some(item_from_wire(item, ctx.items)?);
            }
        }
        Some(slots)
    };

    Ok(EntityState {
        entity_id: state.entity_id,
        entity_name: state.entity_name.clone(),
        position: state.position.map(Into::into),
        view_direction: Direction::from_wire_optional(state.view_direction),
        rotation: state.rotation,
        scale: state.scale.map(Into::into),
        current_health: state.current_health,
        max_health: state.max_health,
        current_mana: state.current_mana,
        max_mana: state.max_mana,
        state_name: state.state_name.clone(),
        tint_color: state.tint_color,
        inventory,
    })
}

pub struct EntityStateConverter;

impl MessageConverter for EntityStateConverter {
    type Message = EntityState;
    type Wire = wire::s2c::EntityState;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::ENTITY_STATE
    }

    fn to_wire(&self, message: &EntityState, ctx: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        state_to_wire(message, ctx)
    }

    fn from_wire(&self, wire: &Self::Wire, ctx: &ConvertContext) -> Result<EntityState, ConvertError> {
        state_from_wire(wire, ctx)
    }
}

pub struct SnapshotConverter;

impl MessageConverter for SnapshotConverter {
    type Message = SnapshotMessage;
    type Wire = wire::s2c::SnapshotMessage;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::SNAPSHOT
    }

    fn to_wire(&self, message: &SnapshotMessage, ctx: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::SnapshotMessage {
            server_tick: message.server_tick,
            entities: message
                .entities
                .iter()
                .map(|state| state_to_wire(state, ctx))
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_wire(&self, wire: &Self::Wire, ctx: &ConvertContext) -> Result<SnapshotMessage, ConvertError> {
        Ok(SnapshotMessage {
            server_tick: wire.server_tick,
            entities: wire
                .entities
                .iter()
                .map(|state| state_from_wire(state, ctx))
                .collect::<Result<_, _>>()?,
        })
    }
}

pub struct GameOverConverter;

impl MessageConverter for GameOverConverter {
    type Message = GameOver;
    type Wire = wire::s2c::GameOver;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::GAME_OVER
    }

    fn to_wire(&self, message: &GameOver, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::GameOver {
            reason: message.reason.clone(),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<GameOver, ConvertError> {
        Ok(GameOver {
            reason: wire.reason.clone(),
        })
    }
}

pub struct LevelChangeConverter;

impl MessageConverter for LevelChangeConverter {
    type Message = LevelChange;
    type Wire = wire::s2c::LevelChange;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::LEVEL_CHANGE
    }

    fn to_wire(&self, message: &LevelChange, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::LevelChange {
            level_name: message.level_name.clone(),
            level_data: message.level_data.clone(),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<LevelChange, ConvertError> {
        Ok(LevelChange {
            level_name: wire.level_name.clone(),
            level_data: wire.level_data.clone(),
        })
    }
}

pub struct RegisterAckConverter;

impl MessageConverter for RegisterAckConverter {
    type Message = RegisterAck;
    type Wire = wire::s2c::RegisterAck;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::REGISTER_ACK
    }

    fn to_wire(&self, message: &RegisterAck, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::RegisterAck { ok: message.ok })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<RegisterAck, ConvertError> {
        Ok(RegisterAck { ok: wire.ok })
    }
}

pub struct SoundPlayConverter;

impl MessageConverter for SoundPlayConverter {
    type Message = SoundPlay;
    type Wire = wire::s2c::SoundPlay;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::SOUND_PLAY
    }

    fn to_wire(&self, message: &SoundPlay, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::SoundPlay {
            entity_id: message.entity_id,
            spec: Some((&message.spec).into()),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<SoundPlay, ConvertError> {
        let spec = wire.spec.as_ref().ok_or(ConvertError::MissingField {
            field: "SoundPlay.spec",
        })?;
        Ok(SoundPlay {
            entity_id: wire.entity_id,
            spec: SoundSpec::from(spec),
        })
    }
}

pub struct SoundStopConverter;

impl MessageConverter for SoundStopConverter {
    type Message = SoundStop;
    type Wire = wire::s2c::SoundStop;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::SOUND_STOP
    }

    fn to_wire(&self, message: &SoundStop, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::s2c::SoundStop {
            sound_instance_id: message.sound_instance_id,
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<SoundStop, ConvertError> {
        Ok(SoundStop {
            sound_instance_id: wire.sound_instance_id,
        })
    }
}
