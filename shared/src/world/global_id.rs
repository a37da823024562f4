use std::fmt::{Display, Formatter};

/// Cross-session entity identifier assigned by the authoritative session.
/// Distinct from any process-local entity handle and never reused.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct GlobalId(i32);

impl GlobalId {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for GlobalId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Display for GlobalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
