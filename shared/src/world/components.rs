use super::Component;
use crate::values::{DrawInfo, Vector2};

/// Current movement of an entity in world units per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityComponent {
    pub velocity: Vector2,
}

impl VelocityComponent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            velocity: Vector2::new(x, y),
        }
    }
}

impl Component for VelocityComponent {}

/// The four animation states every drawable entity carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CoreAnimation {
    IdleLeft,
    #[default]
    IdleRight,
    RunLeft,
    RunRight,
}

impl CoreAnimation {
    pub fn name(self) -> &'static str {
        match self {
            CoreAnimation::IdleLeft => "idle_left",
            CoreAnimation::IdleRight => "idle_right",
            CoreAnimation::RunLeft => "run_left",
            CoreAnimation::RunRight => "run_right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "idle_left" => Some(CoreAnimation::IdleLeft),
            "idle_right" => Some(CoreAnimation::IdleRight),
            "run_left" => Some(CoreAnimation::RunLeft),
            "run_right" => Some(CoreAnimation::RunRight),
            _ => None,
        }
    }

    /// Animation for a horizontal velocity. Standing still keeps the last
    /// horizontal facing.
    pub fn for_velocity(self, velocity_x: f32) -> Self {
        if velocity_x > 0.0 {
            CoreAnimation::RunRight
        } else if velocity_x < 0.0 {
            CoreAnimation::RunLeft
        } else if matches!(self, CoreAnimation::IdleLeft | CoreAnimation::RunLeft) {
            CoreAnimation::IdleLeft
        } else {
            CoreAnimation::IdleRight
        }
    }
}

/// Render state of an entity.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawComponent {
    pub draw_info: DrawInfo,
    pub animation: CoreAnimation,
}

impl DrawComponent {
    pub fn new(draw_info: DrawInfo) -> Self {
        let animation = draw_info
            .current_animation
            .as_ref()
            .and_then(|current| CoreAnimation::from_name(&current.name))
            .unwrap_or_default();
        Self {
            draw_info,
            animation,
        }
    }
}

impl Component for DrawComponent {}
