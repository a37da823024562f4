use std::{
    any::{type_name, Any, TypeId},
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
};

/// Object-safe plumbing for [`Component`], implemented for every `Component + Clone`.
pub trait ComponentBase {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn copy_to_box(&self) -> Box<dyn Component>;
    fn kind(&self) -> ComponentKind;
}

impl<T: Component + Clone> ComponentBase for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn copy_to_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::of::<T>()
    }
}

/// State attached to an entity that the sync layer can copy between the
/// remote snapshot and the local world.
pub trait Component: ComponentBase + Debug + Send + Sync + 'static {}

impl dyn Component {
    pub fn downcast_ref<C: Component>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }

    pub fn downcast_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.as_any_mut().downcast_mut::<C>()
    }
}

/// ComponentKind - should be one unique value for each type of Component
#[derive(Clone, Copy, Eq)]
pub struct ComponentKind {
    type_id: TypeId,
    name: &'static str,
}

impl ComponentKind {
    pub fn of<C: Component>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: type_name::<C>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ComponentKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Hash for ComponentKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl Debug for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComponentKind({})", self.name)
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
