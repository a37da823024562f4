use dungeon_net_shared::{
    s2c::{EntitySpawnEvent, EntityState},
    CoreAnimation, CurrentAnimation, DrawComponent, DrawInfo, GlobalId, Point,
    PositionComponent, VelocityComponent, WorldMutType,
};

use crate::{TestEntity, TestWorld};

/// Fluent builder for local test entities
pub struct TestEntityBuilder {
    global_id: Option<GlobalId>,
    position: Option<Point>,
    velocity: Option<(f32, f32)>,
    animation: Option<CoreAnimation>,
}

impl TestEntityBuilder {
    pub fn new() -> Self {
        Self {
            global_id: None,
            position: None,
            velocity: None,
            animation: None,
        }
    }

    pub fn global_id(mut self, global_id: i32) -> Self {
        self.global_id = Some(GlobalId::new(global_id));
        self
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    pub fn velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Some((x, y));
        self
    }

    pub fn animation(mut self, animation: CoreAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Spawn the entity into `world`
    pub fn spawn(self, world: &mut TestWorld) -> TestEntity {
        let entity = world.spawn_entity();
        if let Some(global_id) = self.global_id {
            world.set_global_id(&entity, global_id);
        }
        if let Some(position) = self.position {
            world.insert_component(&entity, PositionComponent::new(position));
        }
        if let Some((x, y)) = self.velocity {
            world.insert_component(&entity, VelocityComponent::new(x, y));
        }
        if let Some(animation) = self.animation {
            let mut draw = DrawComponent::new(DrawInfo::new("character/knight"));
            draw.animation = animation;
            world.insert_component(&entity, draw);
        }
        entity
    }
}

impl Default for TestEntityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the server messages describing one remote entity
pub struct RemoteEntityBuilder {
    entity_id: i32,
    position: Point,
}

impl RemoteEntityBuilder {
    pub fn new(entity_id: i32) -> Self {
        Self {
            entity_id,
            position: Point::default(),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn spawn_event(&self) -> EntitySpawnEvent {
        let mut draw_info = DrawInfo::new("character/knight");
        draw_info.current_animation = Some(CurrentAnimation {
            name: CoreAnimation::IdleRight.name().to_string(),
            frame: 0,
        });
        EntitySpawnEvent {
            entity_id: self.entity_id,
            position: PositionComponent::new(self.position),
            draw_info,
            is_persistent: false,
            player: None,
            character_class_id: 0,
        }
    }

    pub fn state(&self) -> EntityState {
        let mut state = EntityState::new(self.entity_id);
        state.position = Some(self.position);
        state
    }
}
