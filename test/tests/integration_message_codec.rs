/// Integration tests for envelopes produced and consumed by the protocol:
/// every built-in message survives encode then decode unchanged

use std::fmt::Debug;

use dungeon_net_shared::{
    c2s::{
        ConnectRequest, DialogPayload, DialogResponse, InputAction, InputMessage, RegisterUdp,
        RequestEntitySpawn, SoundFinished,
    },
    converters::wire_ids,
    s2c::{
        ConnectAck, ConnectReject, DialogClose, DialogShow, EntityDespawnEvent, EntitySpawnBatch,
        EntitySpawnEvent, EntityState, GameOver, LevelChange, PlayerInfo, RegisterAck,
        RejectReason, SnapshotMessage, SoundPlay, SoundStop,
    },
    AnimationConfig, AttributeValue, CurrentAnimation, DialogContext, DialogType, Direction, DrawInfo,
    DrawStateInfo, DrawStateKind, Item, NetworkMessage, Point, PositionComponent, Protocol, SoundSpec,
    SpritesheetConfig, StateAnimation, Vector2, WireTypeId,
};
use dungeon_net_test::{init_logging, protocol, EnchantedSword, Potion, QuestMarker};

fn round_trip<M: NetworkMessage + PartialEq + Clone + Debug>(
    protocol: &Protocol,
    message: &M,
    expected_id: WireTypeId,
) -> M {
    let envelope = protocol.encode(message).expect("message should encode");
    assert_eq!(envelope[0], expected_id, "wire type id of {:?}", message);
    let decoded = protocol.decode(&envelope).expect("envelope should decode");
    decoded
        .downcast_ref::<M>()
        .cloned()
        .expect("decoded message should have the original type")
}

fn assert_round_trip<M: NetworkMessage + PartialEq + Clone + Debug>(
    protocol: &Protocol,
    message: M,
    expected_id: WireTypeId,
) {
    assert_eq!(round_trip(protocol, &message, expected_id), message);
}

fn full_draw_info() -> DrawInfo {
    let mut draw_info = DrawInfo::new("character/wizard");
    draw_info.scale_x = Some(1.5);
    draw_info.current_animation = Some(CurrentAnimation {
        name: "run_left".to_string(),
        frame: 4,
    });
    draw_info.animation_config = AnimationConfig {
        frames_per_sprite: 3,
        looping: false,
        centered: true,
        mirrored: true,
    };
    draw_info.spritesheet = Some(SpritesheetConfig {
        sprite_width: 16,
        sprite_height: 32,
        offset_x: 0,
        offset_y: 8,
        rows: 4,
        columns: 6,
    });
    draw_info.states.push(DrawStateInfo {
        state_name: "walk".to_string(),
        kind: DrawStateKind::Directional,
        base: StateAnimation {
            texture_path: "character/wizard/walk_down".to_string(),
            scale_x: None,
            scale_y: Some(2.0),
            animation_config: AnimationConfig::default(),
            spritesheet: None,
        },
        left: Some(StateAnimation {
            texture_path: "character/wizard/walk_left".to_string(),
            scale_x: None,
            scale_y: None,
            animation_config: AnimationConfig::default(),
            spritesheet: None,
        }),
        up: None,
        right: None,
    });
    draw_info
}

fn spawn_event(entity_id: i32) -> EntitySpawnEvent {
    EntitySpawnEvent {
        entity_id,
        position: PositionComponent {
            position: Point::new(4.5, -2.0),
            view_direction: Direction::Left,
            rotation: 90.0,
            scale: Vector2::new(2.0, 2.0),
        },
        draw_info: full_draw_info(),
        is_persistent: true,
        player: Some(PlayerInfo {
            player_name: "Ranger".to_string(),
            is_local_player: false,
        }),
        character_class_id: 3,
    }
}

#[test]
fn client_messages_round_trip() {
    init_logging();
    let protocol = protocol();

    assert_round_trip(&protocol, ConnectRequest::new(2, "Ranger"), wire_ids::CONNECT_REQUEST);
    assert_round_trip(
        &protocol,
        ConnectRequest::new(2, "Ranger").resume(17, vec![1, 2, 3]),
        wire_ids::CONNECT_REQUEST,
    );
    assert_round_trip(
        &protocol,
        RegisterUdp {
            session_id: 17,
            session_token: vec![5, 6],
            client_id: 3,
        },
        wire_ids::REGISTER_UDP,
    );
    assert_round_trip(
        &protocol,
        RequestEntitySpawn { entity_id: 88 },
        wire_ids::REQUEST_ENTITY_SPAWN,
    );
    assert_round_trip(
        &protocol,
        SoundFinished {
            sound_instance_id: 1 << 40,
        },
        wire_ids::SOUND_FINISHED,
    );
}

#[test]
fn every_input_action_round_trips() {
    init_logging();
    let protocol = protocol();
    let actions = vec![
        InputAction::Move {
            direction: Vector2::new(1.0, 0.0),
        },
        InputAction::CastSkill {
            target: Point::new(3.0, 4.0),
            main_skill: true,
        },
        InputAction::Interact {
            target: Point::new(1.0, 1.0),
        },
        InputAction::NextSkill { main_skill: false },
        InputAction::PrevSkill { main_skill: true },
        InputAction::InventoryDrop { slot_index: 2 },
        InputAction::InventoryMove {
            from_slot: 0,
            to_slot: 5,
        },
        InputAction::InventoryUse { slot_index: 1 },
        InputAction::ToggleInventory,
        InputAction::Custom {
            command_id: "emote".to_string(),
            payload: vec![0xCA, 0xFE],
            schema_version: 2,
        },
    ];

    for (sequence, action) in actions.into_iter().enumerate() {
        assert_round_trip(
            &protocol,
            InputMessage {
                session_id: 17,
                client_tick: 1200,
                sequence: sequence as i16,
                action,
            },
            wire_ids::INPUT,
        );
    }
}

#[test]
fn unversioned_custom_action_decodes_as_version_one() {
    init_logging();
    let protocol = protocol();

    for sent_version in [0, -3, i32::MIN] {
        let message = InputMessage {
            session_id: 1,
            client_tick: 1,
            sequence: 1,
            action: InputAction::Custom {
                command_id: "legacy".to_string(),
                payload: Vec::new(),
                schema_version: sent_version,
            },
        };

        let decoded = round_trip(&protocol, &message, wire_ids::INPUT);

        match decoded.action {
            InputAction::Custom { schema_version, .. } => {
                assert_eq!(schema_version, 1, "sent version {}", sent_version)
            }
            other => panic!("Expected custom action but got {:?}", other),
        }
    }
}

#[test]
fn dialog_responses_round_trip() {
    init_logging();
    let protocol = protocol();
    let payloads = vec![
        None,
        Some(DialogPayload::String("yes".to_string())),
        Some(DialogPayload::Int(-4)),
        Some(DialogPayload::Long(1 << 50)),
        Some(DialogPayload::Float(0.25)),
        Some(DialogPayload::Double(0.125)),
        Some(DialogPayload::Bool(true)),
        Some(DialogPayload::StringList(vec!["a".to_string(), "b".to_string()])),
        Some(DialogPayload::IntList(vec![1, 2, 3])),
    ];

    for payload in payloads {
        assert_round_trip(
            &protocol,
            DialogResponse {
                dialog_id: "chest-1".to_string(),
                callback_key: Some("on_confirm".to_string()),
                payload,
            },
            wire_ids::DIALOG_RESPONSE,
        );
    }

    assert_round_trip(
        &protocol,
        DialogResponse {
            dialog_id: "chest-1".to_string(),
            callback_key: None,
            payload: None,
        },
        wire_ids::DIALOG_RESPONSE,
    );
}

#[test]
fn connection_messages_round_trip() {
    init_logging();
    let protocol = protocol();

    assert_round_trip(
        &protocol,
        ConnectAck {
            client_id: 4,
            session_id: 901,
            session_token: vec![7; 16],
        },
        wire_ids::CONNECT_ACK,
    );
    for reason in [
        RejectReason::InvalidName,
        RejectReason::IncompatibleVersion,
        RejectReason::NoSessionFound,
        RejectReason::InvalidSessionToken,
        RejectReason::Other,
    ] {
        assert_round_trip(&protocol, ConnectReject { reason }, wire_ids::CONNECT_REJECT);
    }
    assert_round_trip(&protocol, RegisterAck { ok: true }, wire_ids::REGISTER_ACK);
    assert_round_trip(
        &protocol,
        GameOver {
            reason: "party wiped".to_string(),
        },
        wire_ids::GAME_OVER,
    );
    assert_round_trip(
        &protocol,
        LevelChange {
            level_name: "crypt".to_string(),
            level_data: "{\"rooms\":3}".to_string(),
        },
        wire_ids::LEVEL_CHANGE,
    );
}

#[test]
fn dialog_show_carries_every_attribute_kind() {
    init_logging();
    let protocol = protocol();
    let context = DialogContext::new("quest-board", DialogType::Custom("quest_board".to_string()))
        .with_attribute("title", "Notice board")
        .with_attribute("count", 3_i32)
        .with_attribute("gold", 1_i64 << 40)
        .with_attribute("ratio", 0.5_f32)
        .with_attribute("precise", 0.25_f64)
        .with_attribute("urgent", true)
        .with_attribute("names", vec!["Ada".to_string(), "Bo".to_string()])
        .with_attribute("slots", vec![1_i32, 4, 9])
        .with_attribute(
            "marker",
            AttributeValue::custom(QuestMarker {
                quest: "lost ring".to_string(),
                stage: 2,
            }),
        );

    assert_round_trip(
        &protocol,
        DialogShow {
            context,
            can_be_closed: false,
        },
        wire_ids::DIALOG_SHOW,
    );
    assert_round_trip(
        &protocol,
        DialogClose {
            dialog_id: "quest-board".to_string(),
        },
        wire_ids::DIALOG_CLOSE,
    );
}

#[test]
fn entity_lifecycle_messages_round_trip() {
    init_logging();
    let protocol = protocol();

    assert_round_trip(&protocol, spawn_event(12), wire_ids::ENTITY_SPAWN);

    let mut plain = spawn_event(13);
    plain.player = None;
    plain.character_class_id = 0;
    plain.draw_info = DrawInfo::new("monster/slime");
    assert_round_trip(&protocol, plain.clone(), wire_ids::ENTITY_SPAWN);

    assert_round_trip(
        &protocol,
        EntitySpawnBatch {
            entities: vec![spawn_event(14), plain],
        },
        wire_ids::ENTITY_SPAWN_BATCH,
    );
    assert_round_trip(
        &protocol,
        EntityDespawnEvent {
            entity_id: 14,
            reason: "killed".to_string(),
        },
        wire_ids::ENTITY_DESPAWN,
    );
}

#[test]
fn entity_state_with_inventory_round_trips() {
    init_logging();
    let protocol = protocol();
    let mut potion = Potion::default();
    potion.set_stack_size(5);

    let mut state = EntityState::new(21);
    state.entity_name = Some("Ranger".to_string());
    state.position = Some(Point::new(1.0, 2.0));
    state.view_direction = Some(Direction::Up);
    state.rotation = Some(45.0);
    state.scale = Some(Vector2::new(1.0, 2.0));
    state.current_health = Some(12);
    state.max_health = Some(20);
    state.current_mana = Some(3.5);
    state.max_mana = Some(10.0);
    state.state_name = Some("idle".to_string());
    state.tint_color = Some(0x00FF00);
    state.inventory = Some(vec![
        Some(Box::new(potion) as Box<dyn Item>),
        None,
        Some(Box::new(EnchantedSword::with_enchantment("frost"))),
    ]);

    assert_round_trip(&protocol, state.clone(), wire_ids::ENTITY_STATE);
    assert_round_trip(
        &protocol,
        SnapshotMessage {
            server_tick: 400,
            entities: vec![state, EntityState::new(22)],
        },
        wire_ids::SNAPSHOT,
    );
}

#[test]
fn empty_inventory_means_no_update() {
    init_logging();
    let protocol = protocol();
    let mut state = EntityState::new(5);
    state.inventory = Some(Vec::new());

    let decoded = round_trip(&protocol, &state, wire_ids::ENTITY_STATE);

    assert!(decoded.inventory.is_none());
}

#[test]
fn sound_messages_round_trip() {
    init_logging();
    let protocol = protocol();
    let spec = SoundSpec {
        instance_id: 77,
        sound_name: "door_creak".to_string(),
        base_volume: 0.8,
        looping: true,
        pitch: 1.2,
        pan: -0.5,
        max_distance: 12.0,
        attenuation_factor: 0.9,
        target_entity_ids: Vec::new(),
    };

    assert_round_trip(
        &protocol,
        SoundPlay {
            entity_id: 3,
            spec: spec.clone(),
        },
        wire_ids::SOUND_PLAY,
    );
    assert_round_trip(
        &protocol,
        SoundStop {
            sound_instance_id: 77,
        },
        wire_ids::SOUND_STOP,
    );

    let mut targeted = spec;
    targeted.target_entity_ids = vec![1, 2];
    let decoded = round_trip(
        &protocol,
        &SoundPlay {
            entity_id: 3,
            spec: targeted,
        },
        wire_ids::SOUND_PLAY,
    );
    assert!(decoded.spec.target_entity_ids.is_empty());
}
