//! Stateless mappings between primitive domain values and their wire shapes.

mod draw;
mod error;
mod geometry;
mod item;
mod numeric;
mod position;
mod sound;

pub use draw::{
    AnimationConfig, CurrentAnimation, DrawInfo, DrawStateInfo, DrawStateKind, SpritesheetConfig,
    StateAnimation,
};
pub use error::ConvertError;
pub use geometry::{Direction, Point, Vector2};
pub use item::{item_from_wire, item_to_wire};
pub use numeric::narrow;
pub use position::PositionComponent;
pub use sound::SoundSpec;
