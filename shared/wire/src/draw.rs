#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct AnimationConfig {
    #[prost(int32, tag = "1")]
    pub frames_per_sprite: i32,
    #[prost(bool, tag = "2")]
    pub looping: bool,
    #[prost(bool, tag = "3")]
    pub centered: bool,
    #[prost(bool, tag = "4")]
    pub mirrored: bool,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct SpritesheetConfig {
    #[prost(int32, tag = "1")]
    pub sprite_width: i32,
    #[prost(int32, tag = "2")]
    pub sprite_height: i32,
    #[prost(int32, tag = "3")]
    pub offset_x: i32,
    #[prost(int32, tag = "4")]
    pub offset_y: i32,
    #[prost(int32, tag = "5")]
    pub rows: i32,
    #[prost(int32, tag = "6")]
    pub columns: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CurrentAnimation {
    #[prost(string, tag = "1")]
    pub animation_name: String,
    #[prost(int32, tag = "2")]
    pub current_frame: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StateAnimationInfo {
    #[prost(string, tag = "1")]
    pub texture_path: String,
    #[prost(float, optional, tag = "2")]
    pub scale_x: Option<f32>,
    #[prost(float, optional, tag = "3")]
    pub scale_y: Option<f32>,
    #[prost(message, optional, tag = "4")]
    pub animation_config: Option<AnimationConfig>,
    #[prost(message, optional, tag = "5")]
    pub spritesheet_config: Option<SpritesheetConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DrawStateType {
    Unspecified = 0,
    Basic = 1,
    SimpleDirectional = 2,
    Directional = 3,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DrawStateInfo {
    #[prost(string, tag = "1")]
    pub state_name: String,
    #[prost(enumeration = "DrawStateType", tag = "2")]
    pub state_type: i32,
    #[prost(message, optional, tag = "3")]
    pub base_animation: Option<StateAnimationInfo>,
    #[prost(message, optional, tag = "4")]
    pub left: Option<StateAnimationInfo>,
    #[prost(message, optional, tag = "5")]
    pub up: Option<StateAnimationInfo>,
    #[prost(message, optional, tag = "6")]
    pub right: Option<StateAnimationInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DrawInfo {
    #[prost(string, tag = "1")]
    pub texture_path: String,
    #[prost(float, optional, tag = "2")]
    pub scale_x: Option<f32>,
    #[prost(float, optional, tag = "3")]
    pub scale_y: Option<f32>,
    #[prost(message, optional, tag = "4")]
    pub current_animation: Option<CurrentAnimation>,
    #[prost(message, optional, tag = "5")]
    pub animation_config: Option<AnimationConfig>,
    #[prost(message, optional, tag = "6")]
    pub spritesheet_config: Option<SpritesheetConfig>,
    #[prost(message, repeated, tag = "7")]
    pub states: Vec<DrawStateInfo>,
}
