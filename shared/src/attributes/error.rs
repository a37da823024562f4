use thiserror::Error;

/// Errors raised by the dialog attribute codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// Value type has no built-in case and no registered custom codec
    #[error("Unsupported attribute type {type_name} for key '{key}'. Register an AttributeCodec for it")]
    UnsupportedAttributeType { key: String, type_name: &'static str },

    /// Custom payload tagged with a type tag no codec handles
    #[error("Unknown custom attribute type tag '{type_tag}' for key '{key}'")]
    UnknownTypeTag { key: String, type_tag: String },

    /// A custom codec failed to encode or decode its payload
    #[error("Custom codec '{type_tag}' failed for key '{key}': {reason}")]
    CustomCodec {
        key: String,
        type_tag: String,
        reason: String,
    },
}
