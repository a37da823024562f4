use std::{any::Any, collections::HashMap, fmt::Debug};

/// Object-safe plumbing for [`Item`], implemented for every `Item + Clone`.
pub trait ItemBase {
    fn as_any(&self) -> &dyn Any;
    fn clone_item(&self) -> Box<dyn Item>;
    fn item_class(&self) -> &'static str;
}

impl<T: Item + Clone> ItemBase for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_item(&self) -> Box<dyn Item> {
        Box::new(self.clone())
    }

    fn item_class(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// An inventory item that can travel over the wire.
///
/// Stateless items only need a `Default` impl. Items carrying extra state
/// expose it through [`Item::item_data`] and are rebuilt by a factory
/// registered with the [`ItemRegistry`](super::ItemRegistry).
pub trait Item: ItemBase + Debug + Send + Sync + 'static {
    fn stack_size(&self) -> u32;
    fn set_stack_size(&mut self, stack_size: u32);
    fn max_stack_size(&self) -> u32;
    fn set_max_stack_size(&mut self, max_stack_size: u32);

    fn item_data(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

impl Clone for Box<dyn Item> {
    fn clone(&self) -> Self {
        (**self).clone_item()
    }
}

impl dyn Item {
    pub fn downcast_ref<T: Item>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
