use dungeon_net_wire::{
    self as wire,
    c2s::{dialog_response::Payload, input_message::Action},
};

use super::wire_ids;
use crate::{
    messages::{
        c2s::{
            ConnectRequest, DialogPayload, DialogResponse, InputAction, InputMessage, RegisterUdp,
            RequestEntitySpawn, SoundFinished,
        },
        ConvertContext, MessageConverter,
    },
    types::WireTypeId,
    values::{narrow, ConvertError},
};

/// Callback key sent when a dialog was closed without a choice.
const CLOSED_CALLBACK_KEY: &str = "CLOSED";

pub struct ConnectRequestConverter;

impl MessageConverter for ConnectRequestConverter {
    type Message = ConnectRequest;
    type Wire = wire::c2s::ConnectRequest;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::CONNECT_REQUEST
    }

    fn to_wire(&self, message: &ConnectRequest, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::c2s::ConnectRequest {
            protocol_version: message.protocol_version.into(),
            player_name: message.player_name.clone(),
            session_id: (message.session_id != 0).then_some(message.session_id),
            session_token: (!message.session_token.is_empty())
                .then(|| message.session_token.clone()),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<ConnectRequest, ConvertError> {
        Ok(ConnectRequest {
            protocol_version: narrow("ConnectRequest.protocol_version", wire.protocol_version)?,
            player_name: wire.player_name.clone(),
            session_id: wire.session_id.unwrap_or(0),
            session_token: wire.session_token.clone().unwrap_or_default(),
        })
    }
}

pub struct InputMessageConverter;

impl InputMessageConverter {
    fn action_to_wire(action: &InputAction) -> Action {
        match action {
            InputAction::Move { direction } => Action::Move(wire::c2s::MoveAction {
                direction: Some((*direction).into()),
            }),
            InputAction::CastSkill { target, main_skill } => Action::CastSkill(wire::c2s::CastSkill {
                target: Some((*target).into()),
                main_skill: *main_skill,
            }),
            InputAction::Interact { target } => Action::Interact(wire::c2s::Interact {
                target: Some((*target).into()),
            }),
            InputAction::NextSkill { main_skill } => Action::SkillChange(wire::c2s::SkillChange {
                next_skill: true,
                main_skill: *main_skill,
            }),
            InputAction::PrevSkill { main_skill } => Action::SkillChange(wire::c2s::SkillChange {
                next_skill: false,
                main_skill: *main_skill,
            }),
            InputAction::InventoryDrop { slot_index } => Action::InvDrop(wire::c2s::InventoryDrop {
                slot_index: *slot_index,
            }),
            InputAction::InventoryMove { from_slot, to_slot } => {
                Action::InvMove(wire::c2s::InventoryMove {
                    from_slot: *from_slot,
                    to_slot: *to_slot,
                })
            }
            InputAction::InventoryUse { slot_index } => Action::InvUse(wire::c2s::InventoryUse {
                slot_index: *slot_index,
            }),
            InputAction::ToggleInventory => Action::ToggleInventory(wire::c2s::ToggleInventory {}),
            InputAction::Custom {
                command_id,
                payload,
                schema_version,
            } => Action::Custom(wire::c2s::CustomAction {
                command_id: command_id.clone(),
                payload: payload.clone(),
                schema_version: *schema_version,
            }),
        }
    }

    fn action_from_wire(action: &Action) -> Result<InputAction, ConvertError> {
        Ok(match action {
            Action::Move(movement) => InputAction::Move {
                direction: movement
                    .direction
                    .ok_or(ConvertError::MissingField {
                        field: "InputMessage.move.direction",
                    })?
                    .into(),
            },
            Action::CastSkill(cast) => InputAction::CastSkill {
                target: cast
                    .target
                    .ok_or(ConvertError::MissingField {
                        field: "InputMessage.cast_skill.target",
                    })?
                    .into(),
                main_skill: cast.main_skill,
            },
            Action::Interact(interact) => InputAction::Interact {
                target: interact
                    .target
                    .ok_or(ConvertError::MissingField {
                        field: "InputMessage.interact.target",
                    })?
                    .into(),
            },
            Action::SkillChange(change) if change.next_skill => InputAction::NextSkill {
                main_skill: change.main_skill,
            },
            Action::SkillChange(change) => InputAction::PrevSkill {
                main_skill: change.main_skill,
            },
            Action::InvDrop(dropped) => InputAction::InventoryDrop {
                slot_index: dropped.slot_index,
            },
            Action::InvMove(movement) => InputAction::InventoryMove {
                from_slot: movement.from_slot,
                to_slot: movement.to_slot,
            },
            Action::InvUse(use_item) => InputAction::InventoryUse {
                slot_index: use_item.slot_index,
            },
            Action::ToggleInventory(_) => InputAction::ToggleInventory,
            // Peers that predate schema versioning send 0; any version
            // below 1 is treated the same way
            Action::Custom(custom) => InputAction::Custom {
                command_id: custom.command_id.clone(),
                payload: custom.payload.clone(),
                schema_version: custom.schema_version.max(1),
            },
        })
    }
}

impl MessageConverter for InputMessageConverter {
    type Message = InputMessage;
    type Wire = wire::c2s::InputMessage;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::INPUT
    }

    fn to_wire(&self, message: &InputMessage, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::c2s::InputMessage {
            session_id: message.session_id,
            client_tick: message.client_tick,
            sequence: message.sequence.into(),
            action: Some(Self::action_to_wire(&message.action)),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<InputMessage, ConvertError> {
        let action = wire.action.as_ref().ok_or(ConvertError::MissingField {
            field: "InputMessage.action",
        })?;
        Ok(InputMessage {
            session_id: wire.session_id,
            client_tick: wire.client_tick,
            sequence: narrow("InputMessage.sequence", wire.sequence)?,
            action: Self::action_from_wire(action)?,
        })
    }
}

pub struct DialogResponseConverter;

impl MessageConverter for DialogResponseConverter {
    type Message = DialogResponse;
    type Wire = wire::c2s::DialogResponse;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::DIALOG_RESPONSE
    }

    fn to_wire(&self, message: &DialogResponse, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        let payload = message.payload.as_ref().map(|payload| match payload {
            DialogPayload::String(value) => Payload::StringValue(value.clone()),
            DialogPayload::Int(value) => Payload::IntValue(*value),
            DialogPayload::Long(value) => Payload::LongValue(*value),
            DialogPayload::Float(value) => Payload::FloatValue(*value),
            DialogPayload::Double(value) => Payload::DoubleValue(*value),
            DialogPayload::Bool(value) => Payload::BoolValue(*value),
            DialogPayload::StringList(values) => Payload::StringList(wire::StringList {
                values: values.clone(),
            }),
            DialogPayload::IntList(values) => Payload::IntList(wire::IntList {
                values: values.clone(),
            }),
        });

        Ok(wire::c2s::DialogResponse {
            dialog_id: message.dialog_id.clone(),
            callback_key: message
                .callback_key
                .clone()
                .unwrap_or_else(|| CLOSED_CALLBACK_KEY.to_string()),
            payload,
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<DialogResponse, ConvertError> {
        let payload = wire.payload.as_ref().map(|payload| match payload {
            Payload::StringValue(value) => DialogPayload::String(value.clone()),
            Payload::IntValue(value) => DialogPayload::Int(*value),
            Payload::LongValue(value) => DialogPayload::Long(*value),
            Payload::FloatValue(value) => DialogPayload::Float(*value),
            Payload::DoubleValue(value) => DialogPayload::Double(*value),
            Payload::BoolValue(value) => DialogPayload::Bool(*value),
            Payload::StringList(list) => DialogPayload::StringList(list.values.clone()),
            Payload::IntList(list) => DialogPayload::IntList(list.values.clone()),
        });

        Ok(DialogResponse {
            dialog_id: wire.dialog_id.clone(),
            callback_key: (wire.callback_key != CLOSED_CALLBACK_KEY)
                .then(|| wire.callback_key.clone()),
            payload,
        })
    }
}

pub struct RegisterUdpConverter;

impl MessageConverter for RegisterUdpConverter {
    type Message = RegisterUdp;
    type Wire = wire::c2s::RegisterUdp;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::REGISTER_UDP
    }

    fn to_wire(&self, message: &RegisterUdp, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::c2s::RegisterUdp {
            session_id: message.session_id,
            session_token: message.session_token.clone(),
            client_id: message.client_id.into(),
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<RegisterUdp, ConvertError> {
        Ok(RegisterUdp {
            session_id: wire.session_id,
            session_token: wire.session_token.clone(),
            client_id: narrow("RegisterUdp.client_id", wire.client_id)?,
        })
    }
}

pub struct RequestEntitySpawnConverter;

impl MessageConverter for RequestEntitySpawnConverter {
    type Message = RequestEntitySpawn;
    type Wire = wire::c2s::RequestEntitySpawn;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::REQUEST_ENTITY_SPAWN
    }

    fn to_wire(&self, message: &RequestEntitySpawn, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::c2s::RequestEntitySpawn {
            entity_id: message.entity_id,
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<RequestEntitySpawn, ConvertError> {
        Ok(RequestEntitySpawn {
            entity_id: wire.entity_id,
        })
    }
}

pub struct SoundFinishedConverter;

impl MessageConverter for SoundFinishedConverter {
    type Message = SoundFinished;
    type Wire = wire::c2s::SoundFinished;

    fn wire_type_id(&self) -> WireTypeId {
        wire_ids::SOUND_FINISHED
    }

    fn to_wire(&self, message: &SoundFinished, _: &ConvertContext) -> Result<Self::Wire, ConvertError> {
        Ok(wire::c2s::SoundFinished {
            sound_instance_id: message.sound_instance_id,
        })
    }

    fn from_wire(&self, wire: &Self::Wire, _: &ConvertContext) -> Result<SoundFinished, ConvertError> {
        Ok(SoundFinished {
            sound_instance_id: wire.sound_instance_id,
        })
    }
}
