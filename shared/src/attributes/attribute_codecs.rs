use std::{
    any::{type_name, TypeId},
    collections::HashMap,
};

use dungeon_net_wire::{dialog_attribute::Value, CustomValue, DialogAttribute, IntList, StringList};
use log::debug;

use super::{AttributeError, AttributePayload, AttributeValue, CustomAttribute};
use crate::messages::RegistrationError;

/// Turns one game-specific value type into tagged bytes and back.
pub trait AttributeCodec: Send + Sync + 'static {
    type Value: AttributePayload;

    /// Stable tag written next to the bytes, never reused for another type.
    fn type_tag(&self) -> &'static str;
    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>, String>;
    fn decode(&self, bytes: &[u8]) -> Result<Self::Value, String>;
}

/// Type-erased view of an [`AttributeCodec`].
pub trait DynAttributeCodec: Send + Sync {
    fn name(&self) -> &'static str;
    fn type_tag(&self) -> &'static str;
    fn value_type(&self) -> TypeId;
    fn encode_payload(&self, key: &str, value: &dyn AttributePayload) -> Result<Vec<u8>, AttributeError>;
    fn decode_payload(&self, key: &str, bytes: &[u8]) -> Result<Box<dyn AttributePayload>, AttributeError>;
}

impl<C: AttributeCodec> DynAttributeCodec for C {
    fn name(&self) -> &'static str {
        type_name::<C>()
    }

    fn type_tag(&self) -> &'static str {
        AttributeCodec::type_tag(self)
    }

    fn value_type(&self) -> TypeId {
        TypeId::of::<C::Value>()
    }

    fn encode_payload(&self, key: &str, value: &dyn AttributePayload) -> Result<Vec<u8>, AttributeError> {
        let Some(value) = value.as_any().downcast_ref::<C::Value>() else {
            return Err(AttributeError::UnsupportedAttributeType {
                key: key.to_string(),
                type_name: value.payload_type_name(),
            });
        };
        self.encode(value).map_err(|reason| AttributeError::CustomCodec {
            key: key.to_string(),
            type_tag: AttributeCodec::type_tag(self).to_string(),
            reason,
        })
    }

    fn decode_payload(&self, key: &str, bytes: &[u8]) -> Result<Box<dyn AttributePayload>, AttributeError> {
        self.decode(bytes)
            .map(|value| Box::new(value) as Box<dyn AttributePayload>)
            .map_err(|reason| AttributeError::CustomCodec {
                key: key.to_string(),
                type_tag: AttributeCodec::type_tag(self).to_string(),
                reason,
            })
    }
}

/// Encodes and decodes dialog attributes, with a sub-registry of custom
/// codecs looked up by value type (encode) and by type tag (decode).
#[derive(Default)]
pub struct AttributeCodecs {
    codecs: Vec<Box<dyn DynAttributeCodec>>,
    by_type: HashMap<TypeId, usize>,
    by_tag: HashMap<String, usize>,
}

impl AttributeCodecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom codec. Fails without side effects if either its
    /// value type or its type tag is already taken.
    pub fn register<C: AttributeCodec>(&mut self, codec: C) -> Result<(), RegistrationError> {
        let value_type = TypeId::of::<C::Value>();
        let type_tag = AttributeCodec::type_tag(&codec);

        if let Some(existing) = self.by_type.get(&value_type) {
            return Err(RegistrationError::DuplicateAttributeType {
                value_type: type_name::<C::Value>(),
                existing: self.codecs[*existing].name(),
            });
        }
        if let Some(existing) = self.by_tag.get(type_tag) {
            return Err(RegistrationError::DuplicateAttributeTag {
                type_tag: type_tag.to_string(),
                existing: self.codecs[*existing].name(),
            });
        }

        debug!("Registered attribute codec '{}' for {}", type_tag, type_name::<C::Value>());
        let index = self.codecs.len();
        self.by_type.insert(value_type, index);
        self.by_tag.insert(type_tag.to_string(), index);
        self.codecs.push(Box::new(codec));
        Ok(())
    }

    pub fn by_type(&self, value_type: TypeId) -> Option<&dyn DynAttributeCodec> {
        self.by_type
            .get(&value_type)
            .map(|index| self.codecs[*index].as_ref())
    }

    pub fn by_tag(&self, type_tag: &str) -> Option<&dyn DynAttributeCodec> {
        self.by_tag
            .get(type_tag)
            .map(|index| self.codecs[*index].as_ref())
    }

    pub fn encode(&self, key: &str, value: &AttributeValue) -> Result<DialogAttribute, AttributeError> {
        let value = match value {
            AttributeValue::String(value) => Value::StringValue(value.clone()),
            AttributeValue::Int(value) => Value::IntValue(*value),
            AttributeValue::Long(value) => Value::LongValue(*value),
            AttributeValue::Float(value) => Value::FloatValue(*value),
            AttributeValue::Double(value) => Value::DoubleValue(*value),
            AttributeValue::Bool(value) => Value::BoolValue(*value),
            AttributeValue::StringList(values) => Value::StringList(StringList {
                values: values.clone(),
            }),
            AttributeValue::IntList(values) => Value::IntList(IntList {
                values: values.clone(),
            }),
            AttributeValue::Custom(custom) => {
                let codec = self.by_type(custom.payload_type_id()).ok_or_else(|| {
                    AttributeError::UnsupportedAttributeType {
                        key: key.to_string(),
                        type_name: custom.payload().payload_type_name(),
                    }
                })?;
                Value::Custom(CustomValue {
                    type_id: codec.type_tag().to_string(),
                    data: codec.encode_payload(key, custom.payload())?,
                })
            }
        };

        Ok(DialogAttribute {
            key: key.to_string(),
            value: Some(value),
        })
    }

    /// Decode one attribute. An unset union case yields `Ok(None)`.
    pub fn decode(&self, attribute: &DialogAttribute) -> Result<Option<AttributeValue>, AttributeError> {
        let Some(value) = &attribute.value else {
            return Ok(None);
        };

        let decoded = match value {
            Value::StringValue(value) => AttributeValue::String(value.clone()),
            Value::IntValue(value) => AttributeValue::Int(*value),
            Value::LongValue(value) => AttributeValue::Long(*value),
            Value::FloatValue(value) => AttributeValue::Float(*value),
            Value::DoubleValue(value) => AttributeValue::Double(*value),
            Value::BoolValue(value) => AttributeValue::Bool(*value),
            Value::StringList(list) => AttributeValue::StringList(list.values.clone()),
            Value::IntList(list) => AttributeValue::IntList(list.values.clone()),
            Value::Custom(custom) => {
                let codec = self.by_tag(&custom.type_id).ok_or_else(|| {
                    AttributeError::UnknownTypeTag {
                        key: attribute.key.clone(),
                        type_tag: custom.type_id.clone(),
                    }
                })?;
                let payload = codec.decode_payload(&attribute.key, &custom.data)?;
                AttributeValue::Custom(CustomAttribute::from_boxed(payload))
            }
        };

        Ok(Some(decoded))
    }
}
