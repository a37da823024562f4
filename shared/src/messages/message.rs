use std::{
    any::{type_name, Any, TypeId},
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
};

/// An in-process value representing one network event.
///
/// Implement with [`impl_network_message!`](crate::impl_network_message).
pub trait NetworkMessage: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn kind(&self) -> MessageKind;
}

impl dyn NetworkMessage {
    pub fn is<M: NetworkMessage>(&self) -> bool {
        self.as_any().is::<M>()
    }

    pub fn downcast_ref<M: NetworkMessage>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }
}

/// Implements [`NetworkMessage`] for one or more concrete message types.
#[macro_export]
macro_rules! impl_network_message {
    ($($message:ty),+ $(,)?) => {
        $(
            impl $crate::NetworkMessage for $message {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn kind(&self) -> $crate::MessageKind {
                    $crate::MessageKind::of::<$message>()
                }
            }
        )+
    };
}

/// MessageKind - should be one unique value for each type of domain message
#[derive(Clone, Copy, Eq)]
pub struct MessageKind {
    type_id: TypeId,
    name: &'static str,
}

impl MessageKind {
    pub fn of<M: NetworkMessage>() -> Self {
        Self {
            type_id: TypeId::of::<M>(),
            name: type_name::<M>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for MessageKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Hash for MessageKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl Debug for MessageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MessageKind({})", self.name)
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
