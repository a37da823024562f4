pub mod helpers;
pub mod test_world;

pub use helpers::*;
pub use test_protocol::{
    protocol, EnchantedSword, Potion, QuestMarker, QuestMarkerCodec, Scroll, Unregistered,
};
pub use test_world::{TestEntity, TestWorld};
