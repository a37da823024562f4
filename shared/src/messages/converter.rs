use std::any::type_name;

use super::{
    parse_wire, CodecError, MessageKind, NetworkMessage, WireKind, WireMessage, WireParser,
};
use crate::{
    attributes::AttributeCodecs, connection::connection_config::ConnectionConfig,
    items::ItemRegistry, types::WireTypeId, values::ConvertError,
};

/// Registries a converter may consult while mapping a message.
#[derive(Clone, Copy)]
pub struct ConvertContext<'a> {
    pub items: &'a ItemRegistry,
    pub attributes: &'a AttributeCodecs,
    /// Upper bound (exclusive) for inventory slot indices
    pub max_inventory_slots: usize,
}

impl<'a> ConvertContext<'a> {
    pub fn new(items: &'a ItemRegistry, attributes: &'a AttributeCodecs) -> Self {
        Self {
            items,
            attributes,
            max_inventory_slots: ConnectionConfig::default().max_inventory_slots,
        }
    }

    pub fn with_max_inventory_slots(mut self, max_inventory_slots: usize) -> Self {
        self.max_inventory_slots = max_inventory_slots;
        self
    }
}

/// Binds one domain message type to one wire message shape under one wire
/// type id.
pub trait MessageConverter: Send + Sync + 'static {
    type Message: NetworkMessage;
    type Wire: prost::Message + Default + 'static;

    fn wire_type_id(&self) -> WireTypeId;
    fn to_wire(&self, message: &Self::Message, ctx: &ConvertContext) -> Result<Self::Wire, ConvertError>;
    fn from_wire(&self, wire: &Self::Wire, ctx: &ConvertContext) -> Result<Self::Message, ConvertError>;
}

/// Type-erased view of a [`MessageConverter`], dispatched by runtime type.
pub trait DynConverter: Send + Sync {
    fn name(&self) -> &'static str;
    fn wire_type_id(&self) -> WireTypeId;
    fn message_kind(&self) -> MessageKind;
    fn wire_kind(&self) -> WireKind;
    fn parser(&self) -> WireParser;
    fn to_wire_dyn(
        &self,
        message: &dyn NetworkMessage,
        ctx: &ConvertContext,
    ) -> Result<Box<dyn WireMessage>, CodecError>;
    fn from_wire_dyn(
        &self,
        wire: &dyn WireMessage,
        ctx: &ConvertContext,
    ) -> Result<Box<dyn NetworkMessage>, CodecError>;
}

impl<C: MessageConverter> DynConverter for C {
    fn name(&self) -> &'static str {
        type_name::<C>()
    }

    fn wire_type_id(&self) -> WireTypeId {
        MessageConverter::wire_type_id(self)
    }

    fn message_kind(&self) -> MessageKind {
        MessageKind::of::<C::Message>()
    }

    fn wire_kind(&self) -> WireKind {
        WireKind::of::<C::Wire>()
    }

    fn parser(&self) -> WireParser {
        parse_wire::<C::Wire>
    }

    fn to_wire_dyn(
        &self,
        message: &dyn NetworkMessage,
        ctx: &ConvertContext,
    ) -> Result<Box<dyn WireMessage>, CodecError> {
        let message = message
            .downcast_ref::<C::Message>()
            .ok_or(CodecError::UnsupportedType {
                type_name: message.kind().name(),
            })?;
        Ok(Box::new(self.to_wire(message, ctx)?))
    }

    fn from_wire_dyn(
        &self,
        wire: &dyn WireMessage,
        ctx: &ConvertContext,
    ) -> Result<Box<dyn NetworkMessage>, CodecError> {
        let wire = wire
            .downcast_ref::<C::Wire>()
            .ok_or(CodecError::UnsupportedType {
                type_name: wire.wire_kind().name(),
            })?;
        Ok(Box::new(self.from_wire(wire, ctx)?))
    }
}
