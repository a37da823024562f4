use std::{
    any::{type_name, Any, TypeId},
    fmt::{Debug, Formatter},
};

/// A value type that can ride in [`AttributeValue::Custom`].
///
/// Implemented for every `Clone + PartialEq + Debug` type; a matching
/// [`AttributeCodec`](super::AttributeCodec) must be registered before such a
/// value can be encoded.
pub trait AttributePayload: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn clone_payload(&self) -> Box<dyn AttributePayload>;
    fn eq_payload(&self, other: &dyn AttributePayload) -> bool;
    fn payload_type_name(&self) -> &'static str;
}

impl<T: Any + Debug + Clone + PartialEq + Send + Sync> AttributePayload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_payload(&self) -> Box<dyn AttributePayload> {
        Box::new(self.clone())
    }

    fn eq_payload(&self, other: &dyn AttributePayload) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn payload_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// A game-specific attribute value handled by a custom codec.
pub struct CustomAttribute(Box<dyn AttributePayload>);

impl CustomAttribute {
    pub fn new<T: AttributePayload>(value: T) -> Self {
        Self(Box::new(value))
    }

    pub(crate) fn from_boxed(value: Box<dyn AttributePayload>) -> Self {
        Self(value)
    }

    pub fn payload(&self) -> &dyn AttributePayload {
        self.0.as_ref()
    }

    pub fn payload_type_id(&self) -> TypeId {
        self.0.as_any().type_id()
    }

    pub fn downcast_ref<T: AttributePayload>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Clone for CustomAttribute {
    fn clone(&self) -> Self {
        Self(self.0.clone_payload())
    }
}

impl PartialEq for CustomAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_payload(other.0.as_ref())
    }
}

impl Debug for CustomAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CustomAttribute").field(&self.0).finish()
    }
}

/// One attribute value. Built-in cases map straight onto the wire union;
/// anything else goes through `Custom`.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    String(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    StringList(Vec<String>),
    IntList(Vec<i32>),
    Custom(CustomAttribute),
}

impl AttributeValue {
    pub fn custom<T: AttributePayload>(value: T) -> Self {
        AttributeValue::Custom(CustomAttribute::new(value))
    }

    /// Name of the runtime type held, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::String(_) => type_name::<String>(),
            AttributeValue::Int(_) => type_name::<i32>(),
            AttributeValue::Long(_) => type_name::<i64>(),
            AttributeValue::Float(_) => type_name::<f32>(),
            AttributeValue::Double(_) => type_name::<f64>(),
            AttributeValue::Bool(_) => type_name::<bool>(),
            AttributeValue::StringList(_) => type_name::<Vec<String>>(),
            AttributeValue::IntList(_) => type_name::<Vec<i32>>(),
            AttributeValue::Custom(custom) => custom.payload().payload_type_name(),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Long(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        AttributeValue::StringList(value)
    }
}

impl From<Vec<i32>> for AttributeValue {
    fn from(value: Vec<i32>) -> Self {
        AttributeValue::IntList(value)
    }
}
