use dungeon_net_wire as wire;

/// Parameters of a sound instance played on behalf of an entity.
///
/// `target_entity_ids` addresses the local listeners and is never sent; a
/// decoded spec always has it empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SoundSpec {
    pub instance_id: i64,
    pub sound_name: String,
    pub base_volume: f32,
    pub looping: bool,
    pub pitch: f32,
    pub pan: f32,
    pub max_distance: f32,
    pub attenuation_factor: f32,
    pub target_entity_ids: Vec<i32>,
}

impl From<&SoundSpec> for wire::SoundSpec {
    fn from(spec: &SoundSpec) -> Self {
        wire::SoundSpec {
            instance_id: spec.instance_id,
            sound_name: spec.sound_name.clone(),
            base_volume: spec.base_volume,
            looping: spec.looping,
            pitch: spec.pitch,
            pan: spec.pan,
            max_distance: spec.max_distance,
            attenuation_factor: spec.attenuation_factor,
        }
    }
}

impl From<&wire::SoundSpec> for SoundSpec {
    fn from(spec: &wire::SoundSpec) -> Self {
        SoundSpec {
            instance_id: spec.instance_id,
            sound_name: spec.sound_name.clone(),
            base_volume: spec.base_volume,
            looping: spec.looping,
            pitch: spec.pitch,
            pan: spec.pan,
            max_distance: spec.max_distance,
            attenuation_factor: spec.attenuation_factor,
            target_entity_ids: Vec::new(),
        }
    }
}
