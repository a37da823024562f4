//! # Dungeon Net Shared
//! Message protocol, value converters, dialog attribute codec and entity-sync
//! primitives shared between dungeon clients and servers.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use dungeon_net_wire as wire;

mod attributes;
mod connection;
mod dialog;
mod items;
mod messages;
mod protocol;
mod types;
mod values;
mod world;

pub use attributes::{
    AttributeCodec, AttributeCodecs, AttributeError, AttributePayload, AttributeValue,
    CustomAttribute, DynAttributeCodec,
};
pub use connection::{connection_config::ConnectionConfig, decoder::Decoder, encoder::Encoder};
pub use dialog::{DialogContext, DialogType};
pub use items::{Item, ItemBase, ItemFactory, ItemRegistry};
pub use messages::{
    c2s, converters, parse_wire, s2c, CodecError, ConvertContext, ConverterRegistry,
    DynConverter, MessageConverter, MessageKind, NetworkMessage, RegistrationError, WireError,
    WireKind, WireKinds, WireMessage, WireParser,
};
pub use protocol::{Protocol, ProtocolError, ProtocolPlugin};
pub use types::{ServerTick, WireTypeId, RESERVED_WIRE_TYPE_ID};
pub use values::{
    item_from_wire, item_to_wire, narrow, AnimationConfig, ConvertError, CurrentAnimation,
    Direction, DrawInfo, DrawStateInfo, DrawStateKind, Point, PositionComponent, SoundSpec,
    SpritesheetConfig, StateAnimation, Vector2,
};
pub use world::{
    Component, ComponentBase, ComponentKind, CoreAnimation, DrawComponent, GlobalId,
    VelocityComponent, WorldMutType, WorldRefType,
};
