/// PROPERTY-BASED TESTS: value converters
///
/// Key invariants:
/// 1. Points, vectors, positions and sound specs survive a trip through their
///    wire shape unchanged
/// 2. Any wire direction value decodes, unknown values to `Direction::None`
/// 3. Narrowing either succeeds with the same value or names the field

use proptest::prelude::*;

use dungeon_net_shared::{
    narrow, wire, ConvertError, Direction, Point, PositionComponent, SoundSpec, Vector2,
};

fn finite() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::None),
    ]
}

proptest! {
    #[test]
    fn prop_point_round_trips(x in finite(), y in finite()) {
        let point = Point::new(x, y);
        let wire: wire::Point = point.into();
        prop_assert_eq!(Point::from(wire), point);
    }

    #[test]
    fn prop_vector_round_trips(x in finite(), y in finite()) {
        let vector = Vector2::new(x, y);
        let wire: wire::Vector2 = vector.into();
        prop_assert_eq!(Vector2::from(wire), vector);
    }

    #[test]
    fn prop_position_round_trips(
        x in finite(),
        y in finite(),
        view_direction in direction_strategy(),
        rotation in finite(),
        scale_x in finite(),
        scale_y in finite(),
    ) {
        let position = PositionComponent {
            position: Point::new(x, y),
            view_direction,
            rotation,
            scale: Vector2::new(scale_x, scale_y),
        };
        let wire = wire::PositionInfo::from(&position);
        prop_assert_eq!(PositionComponent::try_from(&wire), Ok(position));
    }

    #[test]
    fn prop_any_wire_direction_decodes(value in any::<i32>()) {
        let direction = Direction::from_wire(value);
        if !(1..=5).contains(&value) {
            prop_assert_eq!(direction, Direction::None);
        }
    }

    #[test]
    fn prop_direction_round_trips(direction in direction_strategy()) {
        prop_assert_eq!(Direction::from_wire(direction.to_wire() as i32), direction);
    }

    #[test]
    fn prop_sound_spec_round_trips(
        instance_id in any::<i64>(),
        sound_name in "[a-z_]{1,16}",
        base_volume in 0.0f32..1.0f32,
        looping in any::<bool>(),
        pitch in 0.5f32..2.0f32,
        pan in -1.0f32..1.0f32,
        max_distance in 0.0f32..100.0f32,
        attenuation_factor in 0.0f32..1.0f32,
    ) {
        let spec = SoundSpec {
            instance_id,
            sound_name,
            base_volume,
            looping,
            pitch,
            pan,
            max_distance,
            attenuation_factor,
            target_entity_ids: Vec::new(),
        };
        let wire = wire::SoundSpec::from(&spec);
        prop_assert_eq!(SoundSpec::from(&wire), spec);
    }

    #[test]
    fn prop_narrow_keeps_value_or_names_field(value in any::<i32>()) {
        match narrow::<i16>("sequence", value) {
            Ok(narrowed) => prop_assert_eq!(i32::from(narrowed), value),
            Err(ConvertError::OutOfRange { field, value: reported, .. }) => {
                prop_assert_eq!(field, "sequence");
                prop_assert_eq!(reported, i64::from(value));
                prop_assert!(value < i32::from(i16::MIN) || value > i32::from(i16::MAX));
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

#[test]
fn position_without_point_is_rejected() {
    let wire = wire::PositionInfo {
        position: None,
        view_direction: wire::Direction::Up as i32,
        rotation: 0.0,
        scale: None,
    };

    assert_eq!(
        PositionComponent::try_from(&wire),
        Err(ConvertError::MissingField {
            field: "PositionInfo.position"
        })
    );
}

#[test]
fn position_without_scale_keeps_unit_scale() {
    let wire = wire::PositionInfo {
        position: Some(wire::Point { x: 1.0, y: 2.0 }),
        view_direction: 0,
        rotation: 0.0,
        scale: None,
    };

    let position = PositionComponent::try_from(&wire).unwrap();

    assert_eq!(position.scale, Vector2::ONE);
    assert_eq!(position.view_direction, Direction::None);
}
