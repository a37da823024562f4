use super::{Component, ComponentKind, GlobalId};

/// Read access to the local entity world the sync layer mirrors into.
pub trait WorldRefType<E> {
    fn has_entity(&self, entity: &E) -> bool;
    fn entities(&self) -> Vec<E>;
    fn has_component<C: Component>(&self, entity: &E) -> bool;
    fn component<C: Component>(&self, entity: &E) -> Option<&C>;
    fn component_kinds(&self, entity: &E) -> Vec<ComponentKind>;
    /// Global id the entity is tagged with, if it mirrors or is known to the session
    fn global_id(&self, entity: &E) -> Option<GlobalId>;

    fn entities_with<C: Component>(&self) -> Vec<E> {
        self.entities()
            .into_iter()
            .filter(|entity| self.has_component::<C>(entity))
            .collect()
    }
}

/// Mutable access to the local entity world.
pub trait WorldMutType<E>: WorldRefType<E> {
    fn spawn_entity(&mut self) -> E;
    fn despawn_entity(&mut self, entity: &E);
    fn set_global_id(&mut self, entity: &E, global_id: GlobalId);
    fn component_mut<C: Component>(&mut self, entity: &E) -> Option<&mut C>;
    fn insert_boxed_component(&mut self, entity: &E, component: Box<dyn Component>);

    fn insert_component<C: Component>(&mut self, entity: &E, component: C) {
        self.insert_boxed_component(entity, Box::new(component));
    }
}
