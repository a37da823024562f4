//! Client to server messages, wire type ids 1 through 6.

use crate::{IntList, Point, StringList, Vector2};

#[derive(Clone, PartialEq, prost::Message)]
pub struct ConnectRequest {
    #[prost(int32, tag = "1")]
    pub protocol_version: i32,
    #[prost(string, tag = "2")]
    pub player_name: String,
    #[prost(int32, optional, tag = "3")]
    pub session_id: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub session_token: Option<Vec<u8>>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct MoveAction {
    #[prost(message, optional, tag = "1")]
    pub direction: Option<Vector2>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct CastSkill {
    #[prost(message, optional, tag = "1")]
    pub target: Option<Point>,
    #[prost(bool, tag = "2")]
    pub main_skill: bool,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct Interact {
    #[prost(message, optional, tag = "1")]
    pub target: Option<Point>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct SkillChange {
    #[prost(bool, tag = "1")]
    pub next_skill: bool,
    #[prost(bool, tag = "2")]
    pub main_skill: bool,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct InventoryDrop {
    #[prost(int32, tag = "1")]
    pub slot_index: i32,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct InventoryMove {
    #[prost(int32, tag = "1")]
    pub from_slot: i32,
    #[prost(int32, tag = "2")]
    pub to_slot: i32,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct InventoryUse {
    #[prost(int32, tag = "1")]
    pub slot_index: i32,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct ToggleInventory {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CustomAction {
    #[prost(string, tag = "1")]
    pub command_id: String,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
    #[prost(int32, tag = "3")]
    pub schema_version: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct InputMessage {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(int32, tag = "2")]
    pub client_tick: i32,
    #[prost(int32, tag = "3")]
    pub sequence: i32,
    #[prost(oneof = "input_message::Action", tags = "4, 5, 6, 7, 8, 9, 10, 11, 12")]
    pub action: Option<input_message::Action>,
}

pub mod input_message {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Action {
        #[prost(message, tag = "4")]
        Move(super::MoveAction),
        #[prost(message, tag = "5")]
        CastSkill(super::CastSkill),
        #[prost(message, tag = "6")]
        Interact(super::Interact),
        #[prost(message, tag = "7")]
        SkillChange(super::SkillChange),
        #[prost(message, tag = "8")]
        InvDrop(super::InventoryDrop),
        #[prost(message, tag = "9")]
        InvMove(super::InventoryMove),
        #[prost(message, tag = "10")]
        InvUse(super::InventoryUse),
        #[prost(message, tag = "11")]
        ToggleInventory(super::ToggleInventory),
        #[prost(message, tag = "12")]
        Custom(super::CustomAction),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DialogResponse {
    #[prost(string, tag = "1")]
    pub dialog_id: String,
    #[prost(string, tag = "2")]
    pub callback_key: String,
    #[prost(oneof = "dialog_response::Payload", tags = "3, 4, 5, 6, 7, 8, 9, 10")]
    pub payload: Option<dialog_response::Payload>,
}

pub mod dialog_response {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Payload {
        #[prost(string, tag = "3")]
        StringValue(String),
        #[prost(int32, tag = "4")]
        IntValue(i32),
        #[prost(int64, tag = "5")]
        LongValue(i64),
        #[prost(float, tag = "6")]
        FloatValue(f32),
        #[prost(double, tag = "7")]
        DoubleValue(f64),
        #[prost(bool, tag = "8")]
        BoolValue(bool),
        #[prost(message, tag = "9")]
        StringList(super::StringList),
        #[prost(message, tag = "10")]
        IntList(super::IntList),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RegisterUdp {
    #[prost(int32, tag = "1")]
    pub session_id: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub session_token: Vec<u8>,
    #[prost(int32, tag = "3")]
    pub client_id: i32,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct RequestEntitySpawn {
    #[prost(int32, tag = "1")]
    pub entity_id: i32,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct SoundFinished {
    #[prost(int64, tag = "1")]
    pub sound_instance_id: i64,
}
