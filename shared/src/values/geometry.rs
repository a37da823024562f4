use dungeon_net_wire as wire;

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for wire::Point {
    fn from(point: Point) -> Self {
        wire::Point {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<wire::Point> for Point {
    fn from(point: wire::Point) -> Self {
        Point::new(point.x, point.y)
    }
}

/// A 2D vector (velocity, scale, movement direction).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const ONE: Vector2 = Vector2::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for wire::Vector2 {
    fn from(vector: Vector2) -> Self {
        wire::Vector2 {
            x: vector.x,
            y: vector.y,
        }
    }
}

impl From<wire::Vector2> for Vector2 {
    fn from(vector: wire::Vector2) -> Self {
        Vector2::new(vector.x, vector.y)
    }
}

/// Facing of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    pub fn to_wire(self) -> wire::Direction {
        match self {
            Direction::Up => wire::Direction::Up,
            Direction::Down => wire::Direction::Down,
            Direction::Left => wire::Direction::Left,
            Direction::Right => wire::Direction::Right,
            Direction::None => wire::Direction::None,
        }
    }

    /// Decode a raw wire enum value. Unspecified and unrecognized values
    /// decode to `Direction::None`; facing is advisory so this never fails.
    pub fn from_wire(value: i32) -> Self {
        match wire::Direction::try_from(value) {
            Ok(wire::Direction::Up) => Direction::Up,
            Ok(wire::Direction::Down) => Direction::Down,
            Ok(wire::Direction::Left) => Direction::Left,
            Ok(wire::Direction::Right) => Direction::Right,
            Ok(wire::Direction::None) | Ok(wire::Direction::Unspecified) | Err(_) => {
                Direction::None
            }
        }
    }

    /// Like [`Direction::from_wire`] but keeps "not sent" distinct from `None`.
    pub(crate) fn from_wire_optional(value: i32) -> Option<Self> {
        match wire::Direction::try_from(value) {
            Ok(wire::Direction::Unspecified) | Err(_) => None,
            Ok(_) => Some(Self::from_wire(value)),
        }
    }
}
