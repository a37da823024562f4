use dungeon_net_wire as wire;

use super::{narrow, ConvertError};
use crate::items::{Item, ItemRegistry};

pub fn item_to_wire(item: &dyn Item, registry: &ItemRegistry) -> Result<wire::Item, ConvertError> {
    Ok(wire::Item {
        item_type: registry.id_for(item)?.to_string(),
        stack_size: narrow("Item.stack_size", item.stack_size())?,
        max_stack_size: narrow("Item.max_stack_size", item.max_stack_size())?,
        item_data: item.item_data(),
    })
}

/// Rebuild an item through the registry, then apply the wire stack sizes.
/// A zero max stack size leaves the type's own default in place.
pub fn item_from_wire(
    item: &wire::Item,
    registry: &ItemRegistry,
) -> Result<Box<dyn Item>, ConvertError> {
    let mut rebuilt = registry.construct(&item.item_type, &item.item_data)?;
    let max_stack_size: u32 = narrow("Item.max_stack_size", item.max_stack_size)?;
    if max_stack_size > 0 {
        rebuilt.set_max_stack_size(max_stack_size);
    }
    rebuilt.set_stack_size(narrow("Item.stack_size", item.stack_size)?);
    Ok(rebuilt)
}
