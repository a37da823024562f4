mod item;
mod item_registry;

pub use item::{Item, ItemBase};
pub use item_registry::{ItemFactory, ItemRegistry};
