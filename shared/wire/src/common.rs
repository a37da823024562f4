use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct Point {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct Vector2 {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Direction {
    Unspecified = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
    None = 5,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct PositionInfo {
    #[prost(message, optional, tag = "1")]
    pub position: Option<Point>,
    #[prost(enumeration = "Direction", tag = "2")]
    pub view_direction: i32,
    #[prost(float, tag = "3")]
    pub rotation: f32,
    #[prost(message, optional, tag = "4")]
    pub scale: Option<Vector2>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SoundSpec {
    #[prost(int64, tag = "1")]
    pub instance_id: i64,
    #[prost(string, tag = "2")]
    pub sound_name: String,
    #[prost(float, tag = "3")]
    pub base_volume: f32,
    #[prost(bool, tag = "4")]
    pub looping: bool,
    #[prost(float, tag = "5")]
    pub pitch: f32,
    #[prost(float, tag = "6")]
    pub pan: f32,
    #[prost(float, tag = "7")]
    pub max_distance: f32,
    #[prost(float, tag = "8")]
    pub attenuation_factor: f32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Item {
    #[prost(string, tag = "1")]
    pub item_type: String,
    #[prost(int32, tag = "2")]
    pub stack_size: i32,
    #[prost(int32, tag = "3")]
    pub max_stack_size: i32,
    #[prost(map = "string, string", tag = "4")]
    pub item_data: HashMap<String, String>,
}
