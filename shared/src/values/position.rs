use dungeon_net_wire as wire;

use super::{ConvertError, Direction, Point, Vector2};
use crate::world::Component;

/// Position and orientation of an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionComponent {
    pub position: Point,
    pub view_direction: Direction,
    pub rotation: f32,
    pub scale: Vector2,
}

impl PositionComponent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Default for PositionComponent {
    fn default() -> Self {
        Self {
            position: Point::default(),
            view_direction: Direction::None,
            rotation: 0.0,
            scale: Vector2::ONE,
        }
    }
}

impl Component for PositionComponent {}

impl From<&PositionComponent> for wire::PositionInfo {
    fn from(component: &PositionComponent) -> Self {
        wire::PositionInfo {
            position: Some(component.position.into()),
            view_direction: component.view_direction.to_wire() as i32,
            rotation: component.rotation,
            scale: Some(component.scale.into()),
        }
    }
}

impl TryFrom<&wire::PositionInfo> for PositionComponent {
    type Error = ConvertError;

    fn try_from(info: &wire::PositionInfo) -> Result<Self, Self::Error> {
        let position = info.position.ok_or(ConvertError::MissingField {
            field: "PositionInfo.position",
        })?;
        let mut component = PositionComponent::new(position.into());
        component.view_direction = Direction::from_wire(info.view_direction);
        component.rotation = info.rotation;
        if let Some(scale) = info.scale {
            component.scale = scale.into();
        }
        Ok(component)
    }
}
