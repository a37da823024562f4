use thiserror::Error;

use crate::attributes::AttributeError;

/// Data integrity errors raised while converting between domain values and wire shapes
///
/// Each variant names the offending field so a version skew can be traced
/// from a single log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A required sub-message or field was absent
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A required string was empty
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A narrowing numeric conversion would truncate
    #[error("{field} out of range for {target}: {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        target: &'static str,
    },

    /// A non-lenient enum carried an unknown or unspecified value
    #[error("{field} has unknown enum value {value}")]
    UnknownEnumValue { field: &'static str, value: i32 },

    /// No item type registered under the id
    #[error("Unknown item type: {item_type}")]
    UnknownItemType { item_type: String },

    /// Item data supplied but the type only has a default constructor
    #[error("Item data provided but no factory registered for item type: {item_type}")]
    ItemDataWithoutFactory { item_type: String },

    /// Item factory rejected the supplied data
    #[error("Failed to construct item of type {item_type}: {reason}")]
    ItemConstruction { item_type: String, reason: String },

    /// Item instance of a class with no registered type id
    #[error("Item class {item_class} is not registered with the item registry")]
    UnregisteredItem { item_class: &'static str },

    /// Inventory slot index below zero
    #[error("Inventory slot index must not be negative: {slot_index}")]
    NegativeSlotIndex { slot_index: i32 },

    /// Fields present in a combination the receiver cannot apply
    #[error("Inconsistent {message}: {reason}")]
    Inconsistent {
        message: &'static str,
        reason: &'static str,
    },

    /// Attribute keys must be unique within a dialog context
    #[error("Duplicate attribute key '{key}' in dialog context")]
    DuplicateAttributeKey { key: String },

    #[error("Attribute error: {0}")]
    Attribute(#[from] AttributeError),
}
