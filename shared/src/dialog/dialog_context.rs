use std::collections::{btree_map::Entry, BTreeMap};

use dungeon_net_wire as wire;

use super::DialogType;
use crate::{
    attributes::{AttributeCodecs, AttributeValue},
    values::ConvertError,
};

/// Everything a peer needs to open a dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogContext {
    pub dialog_id: String,
    pub dialog_type: DialogType,
    pub center: bool,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl DialogContext {
    pub fn new(dialog_id: impl Into<String>, dialog_type: DialogType) -> Self {
        Self {
            dialog_id: dialog_id.into(),
            dialog_type,
            center: true,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn to_wire(&self, codecs: &AttributeCodecs) -> Result<wire::DialogContext, ConvertError> {
        let attributes = self
            .attributes
            .iter()
            .map(|(key, value)| codecs.encode(key, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(wire::DialogContext {
            dialog_id: self.dialog_id.clone(),
            dialog_type: self.dialog_type.name().to_string(),
            center: self.center,
            attributes,
        })
    }

    /// Attributes whose union case is unset are skipped; repeated keys are
    /// rejected.
    pub fn from_wire(
        context: &wire::DialogContext,
        codecs: &AttributeCodecs,
    ) -> Result<Self, ConvertError> {
        let mut attributes = BTreeMap::new();
        for attribute in &context.attributes {
            let Some(value) = codecs.decode(attribute)? else {
                continue;
            };
            match attributes.entry(attribute.key.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
                Entry::Occupied(_) => {
                    return Err(ConvertError::DuplicateAttributeKey {
                        key: attribute.key.clone(),
                    });
                }
            }
        }

        Ok(DialogContext {
            dialog_id: context.dialog_id.clone(),
            dialog_type: DialogType::from_name(&context.dialog_type),
            center: context.center,
            attributes,
        })
    }
}
