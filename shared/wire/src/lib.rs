//! # Dungeon Net Wire
//! Protocol buffer shapes for every message exchanged between dungeon clients
//! and servers. These types only describe the schema; conversion to and from
//! in-process values lives in `dungeon-net-shared`.
//!
//! Field tags are part of the wire contract and must never be renumbered.

mod attributes;
mod common;
mod draw;

pub mod c2s;
pub mod s2c;

pub use attributes::{dialog_attribute, CustomValue, DialogAttribute, DialogContext, IntList, StringList};
pub use common::{Direction, Item, Point, PositionInfo, SoundSpec, Vector2};
pub use draw::{
    AnimationConfig, CurrentAnimation, DrawInfo, DrawStateInfo, DrawStateType, SpritesheetConfig,
    StateAnimationInfo,
};
