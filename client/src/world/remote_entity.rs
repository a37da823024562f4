use std::collections::HashMap;

use dungeon_net_shared::{Component, ComponentKind};

/// The component set of one entity as last reported by the server.
#[derive(Default)]
pub struct RemoteEntity {
    components: HashMap<ComponentKind, Box<dyn Component>>,
}

impl RemoteEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_component<C: Component>(&self) -> bool {
        self.components.contains_key(&ComponentKind::of::<C>())
    }

    pub fn component<C: Component>(&self) -> Option<&C> {
        self.components
            .get(&ComponentKind::of::<C>())
            .and_then(|component| component.downcast_ref::<C>())
    }

    pub fn component_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components
            .get_mut(&ComponentKind::of::<C>())
            .and_then(|component| component.downcast_mut::<C>())
    }

    pub fn component_kinds(&self) -> impl Iterator<Item = &ComponentKind> {
        self.components.keys()
    }

    /// Boxed copies of every component, for attaching to a local mirror.
    pub fn copy_components(&self) -> Vec<Box<dyn Component>> {
        self.components
            .values()
            .map(|component| component.copy_to_box())
            .collect()
    }

    /// Inserts or replaces the component of the same kind.
    pub fn insert_component<C: Component>(&mut self, component: C) {
        self.components
            .insert(ComponentKind::of::<C>(), Box::new(component));
    }

    pub fn remove_component<C: Component>(&mut self) -> Option<Box<dyn Component>> {
        self.components.remove(&ComponentKind::of::<C>())
    }
}

impl std::fmt::Debug for RemoteEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.components.keys()).finish()
    }
}
