use dungeon_net_wire as wire;

use super::{narrow, ConvertError};

/// Animation timing shared by every sprite animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    pub frames_per_sprite: i32,
    pub looping: bool,
    pub centered: bool,
    pub mirrored: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames_per_sprite: 5,
            looping: true,
            centered: true,
            mirrored: false,
        }
    }
}

/// Layout of a sprite sheet texture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpritesheetConfig {
    pub sprite_width: i32,
    pub sprite_height: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub rows: i32,
    pub columns: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentAnimation {
    pub name: String,
    pub frame: u32,
}

/// One animation of a draw state.
#[derive(Clone, Debug, PartialEq)]
pub struct StateAnimation {
    pub texture_path: String,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub animation_config: AnimationConfig,
    pub spritesheet: Option<SpritesheetConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawStateKind {
    Basic,
    SimpleDirectional,
    Directional,
}

/// A named draw state with its base animation and optional directional variants.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawStateInfo {
    pub state_name: String,
    pub kind: DrawStateKind,
    pub base: StateAnimation,
    pub left: Option<StateAnimation>,
    pub up: Option<StateAnimation>,
    pub right: Option<StateAnimation>,
}

/// Everything a peer needs to render an entity.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawInfo {
    pub texture_path: String,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub current_animation: Option<CurrentAnimation>,
    pub animation_config: AnimationConfig,
    pub spritesheet: Option<SpritesheetConfig>,
    pub states: Vec<DrawStateInfo>,
}

impl DrawInfo {
    pub fn new(texture_path: impl Into<String>) -> Self {
        Self {
            texture_path: texture_path.into(),
            scale_x: None,
            scale_y: None,
            current_animation: None,
            animation_config: AnimationConfig::default(),
            spritesheet: None,
            states: Vec::new(),
        }
    }
}

/// Blank (empty or whitespace-only) names and paths are rejected.
fn require_path(field: &'static str, path: &str) -> Result<(), ConvertError> {
    if path.trim().is_empty() {
        return Err(ConvertError::EmptyField { field });
    }
    Ok(())
}

impl From<AnimationConfig> for wire::AnimationConfig {
    fn from(config: AnimationConfig) -> Self {
        wire::AnimationConfig {
            frames_per_sprite: config.frames_per_sprite,
            looping: config.looping,
            centered: config.centered,
            mirrored: config.mirrored,
        }
    }
}

impl From<wire::AnimationConfig> for AnimationConfig {
    fn from(config: wire::AnimationConfig) -> Self {
        AnimationConfig {
            frames_per_sprite: config.frames_per_sprite,
            looping: config.looping,
            centered: config.centered,
            mirrored: config.mirrored,
        }
    }
}

impl From<SpritesheetConfig> for wire::SpritesheetConfig {
    fn from(config: SpritesheetConfig) -> Self {
        wire::SpritesheetConfig {
            sprite_width: config.sprite_width,
            sprite_height: config.sprite_height,
            offset_x: config.offset_x,
            offset_y: config.offset_y,
            rows: config.rows,
            columns: config.columns,
        }
    }
}

impl From<wire::SpritesheetConfig> for SpritesheetConfig {
    fn from(config: wire::SpritesheetConfig) -> Self {
        SpritesheetConfig {
            sprite_width: config.sprite_width,
            sprite_height: config.sprite_height,
            offset_x: config.offset_x,
            offset_y: config.offset_y,
            rows: config.rows,
            columns: config.columns,
        }
    }
}

impl DrawStateKind {
    fn to_wire(self) -> wire::DrawStateType {
        match self {
            DrawStateKind::Basic => wire::DrawStateType::Basic,
            DrawStateKind::SimpleDirectional => wire::DrawStateType::SimpleDirectional,
            DrawStateKind::Directional => wire::DrawStateType::Directional,
        }
    }

    fn from_wire(value: i32) -> Result<Self, ConvertError> {
        match wire::DrawStateType::try_from(value) {
            Ok(wire::DrawStateType::Basic) => Ok(DrawStateKind::Basic),
            Ok(wire::DrawStateType::SimpleDirectional) => Ok(DrawStateKind::SimpleDirectional),
            Ok(wire::DrawStateType::Directional) => Ok(DrawStateKind::Directional),
            Ok(wire::DrawStateType::Unspecified) | Err(_) => Err(ConvertError::UnknownEnumValue {
                field: "DrawStateInfo.state_type",
                value,
            }),
        }
    }
}

impl TryFrom<&StateAnimation> for wire::StateAnimationInfo {
    type Error = ConvertError;

    fn try_from(animation: &StateAnimation) -> Result<Self, Self::Error> {
        require_path("StateAnimationInfo.texture_path", &animation.texture_path)?;
        Ok(wire::StateAnimationInfo {
            texture_path: animation.texture_path.clone(),
            scale_x: animation.scale_x,
            scale_y: animation.scale_y,
            animation_config: Some(animation.animation_config.into()),
            spritesheet_config: animation.spritesheet.map(Into::into),
        })
    }
}

impl TryFrom<&wire::StateAnimationInfo> for StateAnimation {
    type Error = ConvertError;

    fn try_from(info: &wire::StateAnimationInfo) -> Result<Self, Self::Error> {
        require_path("StateAnimationInfo.texture_path", &info.texture_path)?;
        let animation_config = info.animation_config.ok_or(ConvertError::MissingField {
            field: "StateAnimationInfo.animation_config",
        })?;
        Ok(StateAnimation {
            texture_path: info.texture_path.clone(),
            scale_x: info.scale_x,
            scale_y: info.scale_y,
            animation_config: animation_config.into(),
            spritesheet: info.spritesheet_config.map(Into::into),
        })
    }
}

fn optional_animation_to_wire(
    animation: &Option<StateAnimation>,
) -> Result<Option<wire::StateAnimationInfo>, ConvertError> {
    animation
        .as_ref()
        .map(wire::StateAnimationInfo::try_from)
        .transpose()
}

fn optional_animation_from_wire(
    info: &Option<wire::StateAnimationInfo>,
) -> Result<Option<StateAnimation>, ConvertError> {
    info.as_ref().map(StateAnimation::try_from).transpose()
}

impl TryFrom<&DrawStateInfo> for wire::DrawStateInfo {
    type Error = ConvertError;

    fn try_from(state: &DrawStateInfo) -> Result<Self, Self::Error> {
        require_path("DrawStateInfo.state_name", &state.state_name)?;
        Ok(wire::DrawStateInfo {
            state_name: state.state_name.clone(),
            state_type: state.kind.to_wire() as i32,
            base_animation: Some(wire::StateAnimationInfo::try_from(&state.base)?),
            left: optional_animation_to_wire(&state.left)?,
            up: optional_animation_to_wire(&state.up)?,
            right: optional_animation_to_wire(&state.right)?,
        })
    }
}

impl TryFrom<&wire::DrawStateInfo> for DrawStateInfo {
    type Error = ConvertError;

    fn try_from(info: &wire::DrawStateInfo) -> Result<Self, Self::Error> {
        require_path("DrawStateInfo.state_name", &info.state_name)?;
        let base = info.base_animation.as_ref().ok_or(ConvertError::MissingField {
            field: "DrawStateInfo.base_animation",
        })?;
        Ok(DrawStateInfo {
            state_name: info.state_name.clone(),
            kind: DrawStateKind::from_wire(info.state_type)?,
            base: StateAnimation::try_from(base)?,
            left: optional_animation_from_wire(&info.left)?,
            up: optional_animation_from_wire(&info.up)?,
            right: optional_animation_from_wire(&info.right)?,
        })
    }
}

impl TryFrom<&DrawInfo> for wire::DrawInfo {
    type Error = ConvertError;

    fn try_from(info: &DrawInfo) -> Result<Self, Self::Error> {
        require_path("DrawInfo.texture_path", &info.texture_path)?;
        let current_animation = match &info.current_animation {
            Some(current) => Some(wire::CurrentAnimation {
                animation_name: current.name.clone(),
                current_frame: narrow("DrawInfo.current_animation.current_frame", current.frame)?,
            }),
            None => None,
        };
        Ok(wire::DrawInfo {
            texture_path: info.texture_path.clone(),
            scale_x: info.scale_x,
            scale_y: info.scale_y,
            current_animation,
            animation_config: Some(info.animation_config.into()),
            spritesheet_config: info.spritesheet.map(Into::into),
            states: info
                .states
                .iter()
                .map(wire::DrawStateInfo::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<&wire::DrawInfo> for DrawInfo {
    type Error = ConvertError;

    fn try_from(info: &wire::DrawInfo) -> Result<Self, Self::Error> {
        require_path("DrawInfo.texture_path", &info.texture_path)?;
        let animation_config = info.animation_config.ok_or(ConvertError::MissingField {
            field: "DrawInfo.animation_config",
        })?;
        let current_animation = match &info.current_animation {
            Some(current) => Some(CurrentAnimation {
                name: current.animation_name.clone(),
                frame: narrow("DrawInfo.current_animation.current_frame", current.current_frame)?,
            }),
            None => None,
        };
        Ok(DrawInfo {
            texture_path: info.texture_path.clone(),
            scale_x: info.scale_x,
            scale_y: info.scale_y,
            current_animation,
            animation_config: animation_config.into(),
            spritesheet: info.spritesheet_config.map(Into::into),
            states: info
                .states
                .iter()
                .map(DrawStateInfo::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}
