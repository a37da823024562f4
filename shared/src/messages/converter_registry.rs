use std::collections::HashMap;

use log::debug;

use super::{
    CodecError, ConvertContext, DynConverter, MessageConverter, MessageKind, NetworkMessage,
    RegistrationError, WireKind, WireKinds, WireMessage,
};
use crate::types::WireTypeId;

/// Dispatches domain and wire messages to their converter by runtime type.
///
/// Each converter is indexed three ways (domain kind, wire kind, wire type
/// id). Registration validates all three before inserting into any of them,
/// so a rejected converter leaves no trace.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: Vec<Box<dyn DynConverter>>,
    by_message: HashMap<MessageKind, usize>,
    by_wire: HashMap<WireKind, usize>,
    wire_kinds: WireKinds,
}

impl ConverterRegistry {
    /// A registry with no converters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C: MessageConverter>(&mut self, converter: C) -> Result<(), RegistrationError> {
        let converter: Box<dyn DynConverter> = Box::new(converter);
        let name = converter.name();
        let id = converter.wire_type_id();
        let message_kind = converter.message_kind();
        let wire_kind = converter.wire_kind();

        if let Some(existing) = self.by_message.get(&message_kind) {
            return Err(RegistrationError::DuplicateMessageKind {
                message: message_kind.name(),
                existing: self.converters[*existing].name(),
                name,
            });
        }
        self.wire_kinds.check_available(id, wire_kind, name)?;

        self.wire_kinds
            .register_owned(id, wire_kind, converter.parser(), name)?;
        let index = self.converters.len();
        self.by_message.insert(message_kind, index);
        self.by_wire.insert(wire_kind, index);
        self.converters.push(converter);

        debug!("Registered converter {} with wire type id {}", name, id);
        Ok(())
    }

    pub fn to_wire(
        &self,
        message: &dyn NetworkMessage,
        ctx: &ConvertContext,
    ) -> Result<Box<dyn WireMessage>, CodecError> {
        let kind = message.kind();
        let converter = self
            .by_message
            .get(&kind)
            .map(|index| &self.converters[*index])
            .ok_or(CodecError::UnsupportedType {
                type_name: kind.name(),
            })?;
        converter.to_wire_dyn(message, ctx)
    }

    pub fn from_wire(
        &self,
        wire: &dyn WireMessage,
        ctx: &ConvertContext,
    ) -> Result<Box<dyn NetworkMessage>, CodecError> {
        self.converter_for_wire(wire)?.from_wire_dyn(wire, ctx)
    }

    pub fn type_id_for(&self, wire: &dyn WireMessage) -> Result<WireTypeId, CodecError> {
        Ok(self.converter_for_wire(wire)?.wire_type_id())
    }

    pub fn parse(&self, id: WireTypeId, bytes: &[u8]) -> Result<Box<dyn WireMessage>, CodecError> {
        Ok(self.wire_kinds.parse(id, bytes)?)
    }

    pub fn wire_kinds(&self) -> &WireKinds {
        &self.wire_kinds
    }

    pub fn contains_id(&self, id: WireTypeId) -> bool {
        self.wire_kinds.contains_id(id)
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    fn converter_for_wire(&self, wire: &dyn WireMessage) -> Result<&dyn DynConverter, CodecError> {
        let kind = wire.wire_kind();
        self.by_wire
            .get(&kind)
            .map(|index| self.converters[*index].as_ref())
            .ok_or(CodecError::UnsupportedType {
                type_name: kind.name(),
            })
    }
}
