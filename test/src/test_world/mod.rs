/// Simple World implementation for integration testing

use std::collections::HashMap;

use dungeon_net_shared::{Component, ComponentKind, GlobalId, WorldMutType, WorldRefType};

// TestEntity - Simple u64-based entity
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct TestEntity(u64);

impl TestEntity {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

// TestWorld - Simple HashMap-based world
#[derive(Default)]
pub struct TestWorld {
    pub entities: HashMap<TestEntity, HashMap<ComponentKind, Box<dyn Component>>>,
    global_ids: HashMap<TestEntity, GlobalId>,
    next_entity: u64,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The local entity tagged with `global_id`, if any.
    pub fn entity_for(&self, global_id: GlobalId) -> Option<TestEntity> {
        self.global_ids
            .iter()
            .find(|(_, id)| **id == global_id)
            .map(|(entity, _)| *entity)
    }
}

// WorldRefType implementation
impl WorldRefType<TestEntity> for TestWorld {
    fn has_entity(&self, entity: &TestEntity) -> bool {
        self.entities.contains_key(entity)
    }

    fn entities(&self) -> Vec<TestEntity> {
        let mut entities: Vec<TestEntity> = self.entities.keys().copied().collect();
        entities.sort();
        entities
    }

    fn has_component<C: Component>(&self, entity: &TestEntity) -> bool {
        self.entities
            .get(entity)
            .map(|components| components.contains_key(&ComponentKind::of::<C>()))
            .unwrap_or(false)
    }

    fn component<C: Component>(&self, entity: &TestEntity) -> Option<&C> {
        self.entities
            .get(entity)?
            .get(&ComponentKind::of::<C>())?
            .downcast_ref::<C>()
    }

    fn component_kinds(&self, entity: &TestEntity) -> Vec<ComponentKind> {
        self.entities
            .get(entity)
            .map(|components| components.keys().copied().collect())
            .unwrap_or_default()
    }

    fn global_id(&self, entity: &TestEntity) -> Option<GlobalId> {
        self.global_ids.get(entity).copied()
    }
}

// WorldMutType implementation
impl WorldMutType<TestEntity> for TestWorld {
    fn spawn_entity(&mut self) -> TestEntity {
        self.next_entity += 1;
        let entity = TestEntity(self.next_entity);
        self.entities.insert(entity, HashMap::new());
        entity
    }

    fn despawn_entity(&mut self, entity: &TestEntity) {
        self.entities.remove(entity);
        self.global_ids.remove(entity);
    }

    fn set_global_id(&mut self, entity: &TestEntity, global_id: GlobalId) {
        self.global_ids.insert(*entity, global_id);
    }

    fn component_mut<C: Component>(&mut self, entity: &TestEntity) -> Option<&mut C> {
        self.entities
            .get_mut(entity)?
            .get_mut(&ComponentKind::of::<C>())?
            .downcast_mut::<C>()
    }

    fn insert_boxed_component(&mut self, entity: &TestEntity, component: Box<dyn Component>) {
        if let Some(components) = self.entities.get_mut(entity) {
            components.insert(component.kind(), component);
        }
    }
}
