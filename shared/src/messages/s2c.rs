//! Messages sent from server to client.

use crate::{
    dialog::DialogContext,
    impl_network_message,
    items::Item,
    types::ServerTick,
    values::{Direction, DrawInfo, Point, PositionComponent, SoundSpec, Vector2},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectAck {
    pub client_id: i16,
    pub session_id: i32,
    pub session_token: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    InvalidName,
    IncompatibleVersion,
    NoSessionFound,
    InvalidSessionToken,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectReject {
    pub reason: RejectReason,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogShow {
    pub context: DialogContext,
    pub can_be_closed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogClose {
    pub dialog_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfo {
    pub player_name: String,
    pub is_local_player: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntitySpawnEvent {
    pub entity_id: i32,
    pub position: PositionComponent,
    pub draw_info: DrawInfo,
    pub is_persistent: bool,
    pub player: Option<PlayerInfo>,
    pub character_class_id: i8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityDespawnEvent {
    pub entity_id: i32,
    pub reason: String,
}

/// Partial update of one entity; every `None` field is left untouched by
/// the receiver.
#[derive(Clone, Debug, Default)]
pub struct EntityState {
    pub entity_id: i32,
    pub entity_name: Option<String>,
    pub position: Option<Point>,
    pub view_direction: Option<Direction>,
    pub rotation: Option<f32>,
    pub scale: Option<Vector2>,
    pub current_health: Option<i32>,
    pub max_health: Option<i32>,
    pub current_mana: Option<f32>,
    pub max_mana: Option<f32>,
    pub state_name: Option<String>,
    pub tint_color: Option<i32>,
    /// Slot-indexed inventory contents, `None` for an empty slot
    pub inventory: Option<Vec<Option<Box<dyn Item>>>>,
}

impl EntityState {
    pub fn new(entity_id: i32) -> Self {
        Self {
            entity_id,
            ..Self::default()
        }
    }
}

fn same_item(a: &Option<Box<dyn Item>>, b: &Option<Box<dyn Item>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.item_class() == b.item_class()
                && a.stack_size() == b.stack_size()
                && a.max_stack_size() == b.max_stack_size()
                && a.item_data() == b.item_data()
        }
        _ => false,
    }
}

impl PartialEq for EntityState {
    fn eq(&self, other: &Self) -> bool {
        let inventories_match = match (&self.inventory, &other.inventory) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same_item(a, b))
            }
            _ => false,
        };
        inventories_match
            && self.entity_id == other.entity_id
            && self.entity_name == other.entity_name
            && self.position == other.position
            && self.view_direction == other.view_direction
            && self.rotation == other.rotation
            && self.scale == other.scale
            && self.current_health == other.current_health
            && self.max_health == other.max_health
            && self.current_mana == other.current_mana
            && self.max_mana == other.max_mana
            && self.state_name == other.state_name
            && self.tint_color == other.tint_color
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntitySpawnBatch {
    pub entities: Vec<EntitySpawnEvent>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelChange {
    pub level_name: String,
    pub level_data: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterAck {
    pub ok: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotMessage {
    pub server_tick: ServerTick,
    pub entities: Vec<EntityState>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SoundPlay {
    pub entity_id: i32,
    pub spec: SoundSpec,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundStop {
    pub sound_instance_id: i64,
}

impl_network_message!(
    ConnectAck,
    ConnectReject,
    DialogShow,
    DialogClose,
    EntitySpawnEvent,
    EntityDespawnEvent,
    EntityState,
    EntitySpawnBatch,
    GameOver,
    LevelChange,
    RegisterAck,
    SnapshotMessage,
    SoundPlay,
    SoundStop,
);
