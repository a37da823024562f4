use thiserror::Error;

use crate::{types::WireTypeId, values::ConvertError};

/// Errors raised while registering converters, attribute codecs or item types
///
/// These indicate a build-time mistake and are expected to abort startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Wire type id 0 is reserved
    #[error("Wire type id 0 is reserved and cannot be assigned to {name}. Pick an unused id between 1 and 255")]
    ReservedWireTypeId { name: &'static str },

    /// Wire type id already taken
    #[error("Wire type id {id} is already registered to {existing}, cannot register {name}")]
    DuplicateWireTypeId {
        id: WireTypeId,
        existing: &'static str,
        name: &'static str,
    },

    /// Wire message shape already has a type id
    #[error("Wire message {wire} is already registered by {existing}, cannot register {name}")]
    DuplicateWireKind {
        wire: &'static str,
        existing: &'static str,
        name: &'static str,
    },

    /// Domain message type already has a converter
    #[error("Message {message} already has a converter ({existing}), cannot register {name}")]
    DuplicateMessageKind {
        message: &'static str,
        existing: &'static str,
        name: &'static str,
    },

    /// Attribute value type already has a codec
    #[error("Attribute value type {value_type} already has a codec ({existing})")]
    DuplicateAttributeType {
        value_type: &'static str,
        existing: &'static str,
    },

    /// Attribute type tag already in use
    #[error("Attribute type tag '{type_tag}' is already used by codec {existing}")]
    DuplicateAttributeTag {
        type_tag: String,
        existing: &'static str,
    },

    /// Item type id already in use
    #[error("Item type id '{item_type}' is already registered to {existing}")]
    DuplicateItemType {
        item_type: String,
        existing: &'static str,
    },

    /// Item class already has a type id
    #[error("Item class {item_class} is already registered as '{existing}'")]
    DuplicateItemClass {
        item_class: &'static str,
        existing: String,
    },
}

/// Errors raised while framing or parsing wire messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// No wire message shape registered for the id (SECURITY: possibly a foreign or newer peer)
    #[error("Unknown wire type id {id}. The peer may be running an incompatible protocol version")]
    UnknownTypeId { id: WireTypeId },

    /// The runtime wire message type was never registered
    #[error("Wire message {wire} is not registered with any wire type id")]
    UnregisteredWireKind { wire: &'static str },

    /// Payload bytes do not match the schema for the id
    #[error("Malformed payload for wire type id {id}: {reason}")]
    MalformedPayload { id: WireTypeId, reason: String },

    /// Envelope had no id byte
    #[error("Received an empty envelope, expected at least the wire type id byte")]
    EmptyEnvelope,

    /// Payload exceeds the configured maximum
    #[error("Payload of {size} bytes for wire type id {id} exceeds the maximum of {max} bytes")]
    PayloadTooLarge {
        id: WireTypeId,
        size: usize,
        max: usize,
    },
}

/// Errors surfaced by the message codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// No converter is registered for the runtime type
    #[error("Unsupported message type {type_name}: no converter registered. Client and server protocol versions may not match")]
    UnsupportedType { type_name: &'static str },

    #[error("Wire error: {0}")]
    Wire(#[from] WireError),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),
}
