//! Server to client messages, wire type ids 7 through 20.

use crate::{DialogContext, Direction, DrawInfo, Item, Point, PositionInfo, SoundSpec, Vector2};

#[derive(Clone, PartialEq, prost::Message)]
pub struct ConnectAck {
    #[prost(int32, tag = "1")]
    pub client_id: i32,
    #[prost(int32, tag = "2")]
    pub session_id: i32,
    #[prost(bytes = "vec", tag = "3")]
    pub session_token: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum RejectReason {
    Unspecified = 0,
    InvalidName = 1,
    IncompatibleVersion = 2,
    NoSessionFound = 3,
    InvalidSessionToken = 4,
    Other = 5,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct ConnectReject {
    #[prost(enumeration = "RejectReason", tag = "1")]
    pub reason: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DialogShow {
    #[prost(message, optional, tag = "1")]
    pub context: Option<DialogContext>,
    #[prost(bool, tag = "2")]
    pub can_be_closed: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DialogClose {
    #[prost(string, tag = "1")]
    pub dialog_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PlayerInfo {
    #[prost(string, tag = "1")]
    pub player_name: String,
    #[prost(bool, tag = "2")]
    pub is_local_player: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EntitySpawnEvent {
    #[prost(int32, tag = "1")]
    pub entity_id: i32,
    #[prost(message, optional, tag = "2")]
    pub position_info: Option<PositionInfo>,
    #[prost(message, optional, tag = "3")]
    pub draw_info: Option<DrawInfo>,
    #[prost(bool, tag = "4")]
    pub is_persistent: bool,
    #[prost(message, optional, tag = "5")]
    pub player_info: Option<PlayerInfo>,
    #[prost(int32, optional, tag = "6")]
    pub character_class_id: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EntityDespawnEvent {
    #[prost(int32, tag = "1")]
    pub entity_id: i32,
    #[prost(string, tag = "2")]
    pub reason: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ItemSlot {
    #[prost(int32, tag = "1")]
    pub slot_index: i32,
    #[prost(message, optional, tag = "2")]
    pub item: Option<Item>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EntityState {
    #[prost(int32, tag = "1")]
    pub entity_id: i32,
    #[prost(string, optional, tag = "2")]
    pub entity_name: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub position: Option<Point>,
    #[prost(enumeration = "Direction", tag = "4")]
    pub view_direction: i32,
    #[prost(float, optional, tag = "5")]
    pub rotation: Option<f32>,
    #[prost(message, optional, tag = "6")]
    pub scale: Option<Vector2>,
    #[prost(int32, optional, tag = "7")]
    pub current_health: Option<i32>,
    #[prost(int32, optional, tag = "8")]
    pub max_health: Option<i32>,
    #[prost(float, optional, tag = "9")]
    pub current_mana: Option<f32>,
    #[prost(float, optional, tag = "10")]
    pub max_mana: Option<f32>,
    #[prost(string, optional, tag = "11")]
    pub state_name: Option<String>,
    #[prost(int32, optional, tag = "12")]
    pub tint_color: Option<i32>,
    #[prost(message, repeated, tag = "13")]
    pub inventory: Vec<ItemSlot>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EntitySpawnBatch {
    #[prost(message, repeated, tag = "1")]
    pub entities: Vec<EntitySpawnEvent>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GameOver {
    #[prost(string, tag = "1")]
    pub reason: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LevelChange {
    #[prost(string, tag = "1")]
    pub level_name: String,
    #[prost(string, tag = "2")]
    pub level_data: String,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct RegisterAck {
    #[prost(bool, tag = "1")]
    pub ok: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SnapshotMessage {
    #[prost(int32, tag = "1")]
    pub server_tick: i32,
    #[prost(message, repeated, tag = "2")]
    pub entities: Vec<EntityState>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SoundPlay {
    #[prost(int32, tag = "1")]
    pub entity_id: i32,
    #[prost(message, optional, tag = "2")]
    pub spec: Option<SoundSpec>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct SoundStop {
    #[prost(int64, tag = "1")]
    pub sound_instance_id: i64,
}
