mod component;
mod components;
mod global_id;
mod world_type;

pub use component::{Component, ComponentBase, ComponentKind};
pub use components::{CoreAnimation, DrawComponent, VelocityComponent};
pub use global_id::GlobalId;
pub use world_type::{WorldMutType, WorldRefType};
