use std::{
    any::{type_name, TypeId},
    collections::HashMap,
};

use log::debug;

use super::Item;
use crate::{messages::RegistrationError, values::ConvertError};

/// Rebuilds a stateful item from its wire data bag.
pub type ItemFactory =
    Box<dyn Fn(&HashMap<String, String>) -> Result<Box<dyn Item>, String> + Send + Sync>;

struct ItemType {
    item_class: &'static str,
    create_default: fn() -> Box<dyn Item>,
    create_from_data: Option<ItemFactory>,
}

fn create_default<T: Item + Default>() -> Box<dyn Item> {
    Box::new(T::default())
}

/// Table of item types keyed by their stable wire id.
#[derive(Default)]
pub struct ItemRegistry {
    types: HashMap<String, ItemType>,
    ids: HashMap<TypeId, String>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item type that is rebuilt with its `Default` impl.
    pub fn register<T: Item + Default>(
        &mut self,
        item_type: impl Into<String>,
    ) -> Result<(), RegistrationError> {
        self.insert::<T>(item_type.into(), None)
    }

    /// Register an item type that can also be rebuilt from a data bag.
    pub fn register_with_data<T, F>(
        &mut self,
        item_type: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistrationError>
    where
        T: Item + Default,
        F: Fn(&HashMap<String, String>) -> Result<T, String> + Send + Sync + 'static,
    {
        let factory: ItemFactory = Box::new(move |data: &HashMap<String, String>| {
            factory(data).map(|item| Box::new(item) as Box<dyn Item>)
        });
        self.insert::<T>(item_type.into(), Some(factory))
    }

    fn insert<T: Item + Default>(
        &mut self,
        item_type: String,
        create_from_data: Option<ItemFactory>,
    ) -> Result<(), RegistrationError> {
        if let Some(existing) = self.types.get(&item_type) {
            return Err(RegistrationError::DuplicateItemType {
                item_type,
                existing: existing.item_class,
            });
        }
        if let Some(existing) = self.ids.get(&TypeId::of::<T>()) {
            return Err(RegistrationError::DuplicateItemClass {
                item_class: type_name::<T>(),
                existing: existing.clone(),
            });
        }

        debug!("Registered item type '{}' ({})", item_type, type_name::<T>());
        self.ids.insert(TypeId::of::<T>(), item_type.clone());
        self.types.insert(
            item_type,
            ItemType {
                item_class: type_name::<T>(),
                create_default: create_default::<T>,
                create_from_data,
            },
        );
        Ok(())
    }

    /// Stable wire id for an item instance.
    pub fn id_for(&self, item: &dyn Item) -> Result<&str, ConvertError> {
        self.ids
            .get(&item.as_any().type_id())
            .map(String::as_str)
            .ok_or(ConvertError::UnregisteredItem {
                item_class: item.item_class(),
            })
    }

    /// Rust type name registered for a wire id.
    pub fn class_for(&self, item_type: &str) -> Option<&'static str> {
        self.types.get(item_type).map(|entry| entry.item_class)
    }

    pub fn contains(&self, item_type: &str) -> bool {
        self.types.contains_key(item_type)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Construct an item for `item_type`, preferring the data factory when
    /// `data` is non-empty.
    pub fn construct(
        &self,
        item_type: &str,
        data: &HashMap<String, String>,
    ) -> Result<Box<dyn Item>, ConvertError> {
        let entry = self
            .types
            .get(item_type)
            .ok_or_else(|| ConvertError::UnknownItemType {
                item_type: item_type.to_string(),
            })?;

        if data.is_empty() {
            return Ok((entry.create_default)());
        }

        let factory =
            entry
                .create_from_data
                .as_ref()
                .ok_or_else(|| ConvertError::ItemDataWithoutFactory {
                    item_type: item_type.to_string(),
                })?;
        factory(data).map_err(|reason| ConvertError::ItemConstruction {
            item_type: item_type.to_string(),
            reason,
        })
    }
}
