use dungeon_net_shared::Component;

/// Tags a local entity that exists only to reflect a remote one. The
/// reconciliation loop never removes entities without it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MirroredEntity;

impl Component for MirroredEntity {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HealthComponent {
    pub current: i32,
    pub max: i32,
}

impl Component for HealthComponent {}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManaComponent {
    pub current: f32,
    pub max: f32,
}

impl Component for ManaComponent {}
