pub mod c2s;
pub mod converters;
pub mod s2c;

mod converter;
mod converter_registry;
mod error;
mod message;
mod wire_kinds;

pub use converter::{ConvertContext, DynConverter, MessageConverter};
pub use converter_registry::ConverterRegistry;
pub use error::{CodecError, RegistrationError, WireError};
pub use message::{MessageKind, NetworkMessage};
pub use wire_kinds::{parse_wire, WireKind, WireKinds, WireMessage, WireParser};
