//! Messages sent from client to server.

use crate::{
    impl_network_message,
    values::{Point, Vector2},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectRequest {
    pub protocol_version: i16,
    pub player_name: String,
    /// Zero when joining without a session to resume
    pub session_id: i32,
    /// Empty when joining without a session to resume
    pub session_token: Vec<u8>,
}

impl ConnectRequest {
    pub fn new(protocol_version: i16, player_name: impl Into<String>) -> Self {
        Self {
            protocol_version,
            player_name: player_name.into(),
            session_id: 0,
            session_token: Vec::new(),
        }
    }

    pub fn resume(mut self, session_id: i32, session_token: Vec<u8>) -> Self {
        self.session_id = session_id;
        self.session_token = session_token;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputAction {
    Move { direction: Vector2 },
    CastSkill { target: Point, main_skill: bool },
    Interact { target: Point },
    NextSkill { main_skill: bool },
    PrevSkill { main_skill: bool },
    InventoryDrop { slot_index: i32 },
    InventoryMove { from_slot: i32, to_slot: i32 },
    InventoryUse { slot_index: i32 },
    ToggleInventory,
    Custom {
        command_id: String,
        payload: Vec<u8>,
        schema_version: i32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputMessage {
    pub session_id: i32,
    pub client_tick: i32,
    pub sequence: i16,
    pub action: InputAction,
}

/// Value chosen in a dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogPayload {
    String(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    StringList(Vec<String>),
    IntList(Vec<i32>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogResponse {
    pub dialog_id: String,
    /// `None` when the dialog was closed without choosing a callback
    pub callback_key: Option<String>,
    pub payload: Option<DialogPayload>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterUdp {
    pub session_id: i32,
    pub session_token: Vec<u8>,
    pub client_id: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestEntitySpawn {
    pub entity_id: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundFinished {
    pub sound_instance_id: i64,
}

impl_network_message!(
    ConnectRequest,
    InputMessage,
    DialogResponse,
    RegisterUdp,
    RequestEntitySpawn,
    SoundFinished,
);
