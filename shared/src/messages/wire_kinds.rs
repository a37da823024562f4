use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    fmt::{Debug, Formatter},
    hash::{Hash, Hasher},
};

use prost::DecodeError;

use super::{RegistrationError, WireError};
use crate::types::{WireTypeId, RESERVED_WIRE_TYPE_ID};

/// A schema-described message that can be written to the wire.
/// Implemented for every `prost` message.
pub trait WireMessage: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn wire_kind(&self) -> WireKind;
    fn encode_payload(&self) -> Vec<u8>;
}

impl<M: prost::Message + Default + 'static> WireMessage for M {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn wire_kind(&self) -> WireKind {
        WireKind::of::<M>()
    }

    fn encode_payload(&self) -> Vec<u8> {
        self.encode_to_vec()
    }
}

impl dyn WireMessage {
    pub fn downcast_ref<M: WireMessage>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }
}

/// Parses payload bytes into one registered wire message shape.
pub type WireParser = fn(&[u8]) -> Result<Box<dyn WireMessage>, DecodeError>;

pub fn parse_wire<M: prost::Message + Default + 'static>(
    bytes: &[u8],
) -> Result<Box<dyn WireMessage>, DecodeError> {
    Ok(Box::new(M::decode(bytes)?))
}

/// WireKind - should be one unique value for each wire message shape
#[derive(Clone, Copy, Eq)]
pub struct WireKind {
    type_id: TypeId,
    name: &'static str,
}

impl WireKind {
    pub fn of<M: WireMessage>() -> Self {
        Self {
            type_id: TypeId::of::<M>(),
            name: type_name::<M>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for WireKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Hash for WireKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl Debug for WireKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "WireKind({})", self.name)
    }
}

struct WireEntry {
    kind: WireKind,
    owner: &'static str,
    parser: WireParser,
}

/// Maps wire type ids to parseable wire message shapes and back.
#[derive(Default)]
pub struct WireKinds {
    by_id: HashMap<WireTypeId, WireEntry>,
    by_kind: HashMap<WireKind, WireTypeId>,
}

impl WireKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails if `id` is reserved or either `id` or `kind` is taken.
    pub fn check_available(
        &self,
        id: WireTypeId,
        kind: WireKind,
        owner: &'static str,
    ) -> Result<(), RegistrationError> {
        if id == RESERVED_WIRE_TYPE_ID {
            return Err(RegistrationError::ReservedWireTypeId { name: owner });
        }
        if let Some(existing) = self.by_id.get(&id) {
            return Err(RegistrationError::DuplicateWireTypeId {
                id,
                existing: existing.owner,
                name: owner,
            });
        }
        if let Some(existing_id) = self.by_kind.get(&kind) {
            let existing = self
                .by_id
                .get(existing_id)
                .map_or(kind.name(), |entry| entry.owner);
            return Err(RegistrationError::DuplicateWireKind {
                wire: kind.name(),
                existing,
                name: owner,
            });
        }
        Ok(())
    }

    pub fn register(
        &mut self,
        id: WireTypeId,
        kind: WireKind,
        parser: WireParser,
    ) -> Result<(), RegistrationError> {
        self.register_owned(id, kind, parser, kind.name())
    }

    pub fn register_message<M: prost::Message + Default + 'static>(
        &mut self,
        id: WireTypeId,
    ) -> Result<(), RegistrationError> {
        self.register(id, WireKind::of::<M>(), parse_wire::<M>)
    }

    pub(crate) fn register_owned(
        &mut self,
        id: WireTypeId,
        kind: WireKind,
        parser: WireParser,
        owner: &'static str,
    ) -> Result<(), RegistrationError> {
        self.check_available(id, kind, owner)?;
        self.by_kind.insert(kind, id);
        self.by_id.insert(id, WireEntry { kind, owner, parser });
        Ok(())
    }

    pub fn parse(&self, id: WireTypeId, bytes: &[u8]) -> Result<Box<dyn WireMessage>, WireError> {
        let entry = self.by_id.get(&id).ok_or(WireError::UnknownTypeId { id })?;
        (entry.parser)(bytes).map_err(|error| WireError::MalformedPayload {
            id,
            reason: error.to_string(),
        })
    }

    pub fn type_id(&self, message: &dyn WireMessage) -> Result<WireTypeId, WireError> {
        let kind = message.wire_kind();
        self.by_kind
            .get(&kind)
            .copied()
            .ok_or(WireError::UnregisteredWireKind { wire: kind.name() })
    }

    pub fn kind_for(&self, id: WireTypeId) -> Option<WireKind> {
        self.by_id.get(&id).map(|entry| entry.kind)
    }

    pub fn contains_id(&self, id: WireTypeId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
