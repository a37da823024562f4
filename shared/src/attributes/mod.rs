//! Heterogeneous key/value bag carried by dialog messages.

mod attribute_codecs;
mod error;
mod value;

pub use attribute_codecs::{AttributeCodec, AttributeCodecs, DynAttributeCodec};
pub use error::AttributeError;
pub use value::{AttributePayload, AttributeValue, CustomAttribute};
