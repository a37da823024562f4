/// Integration tests for dialog attributes: built-in cases, custom codecs and
/// the lenient handling of unset values

use dungeon_net_shared::{
    s2c::DialogShow,
    wire::{dialog_attribute::Value, CustomValue, DialogAttribute},
    AttributeCodecs, AttributeError, AttributeValue, CodecError, ConvertError, DialogContext,
    DialogType, Protocol, RegistrationError,
};
use dungeon_net_test::{
    assert_err_matches, init_logging, protocol, QuestMarker, QuestMarkerCodec, Unregistered,
};

fn codecs() -> AttributeCodecs {
    let mut codecs = AttributeCodecs::new();
    codecs.register(QuestMarkerCodec).unwrap();
    codecs
}

#[test]
fn unregistered_custom_type_is_unsupported_and_names_key() {
    init_logging();
    let codecs = codecs();

    let result = codecs.encode("reward", &AttributeValue::custom(Unregistered(3)));

    match result {
        Err(AttributeError::UnsupportedAttributeType { key, type_name }) => {
            assert_eq!(key, "reward");
            assert!(type_name.ends_with("Unregistered"));
        }
        other => panic!("Expected UnsupportedAttributeType but got {:?}", other),
    }
}

#[test]
fn registered_custom_type_round_trips() {
    init_logging();
    let codecs = codecs();
    let marker = QuestMarker {
        quest: "dragon".to_string(),
        stage: 4,
    };

    let encoded = codecs
        .encode("marker", &AttributeValue::custom(marker.clone()))
        .unwrap();
    match &encoded.value {
        Some(Value::Custom(custom)) => assert_eq!(custom.type_id, "quest_marker"),
        other => panic!("Expected custom value but got {:?}", other),
    }

    let decoded = codecs.decode(&encoded).unwrap().unwrap();
    match &decoded {
        AttributeValue::Custom(custom) => {
            assert_eq!(custom.downcast_ref::<QuestMarker>(), Some(&marker));
        }
        other => panic!("Expected custom attribute but got {:?}", other),
    }
    assert_eq!(decoded, AttributeValue::custom(marker));
}

#[test]
fn unset_attribute_decodes_to_nothing() {
    init_logging();
    let codecs = codecs();

    let decoded = codecs
        .decode(&DialogAttribute {
            key: "empty".to_string(),
            value: None,
        })
        .unwrap();

    assert!(decoded.is_none());
}

#[test]
fn unknown_type_tag_is_rejected() {
    init_logging();
    let codecs = codecs();

    let result = codecs.decode(&DialogAttribute {
        key: "mystery".to_string(),
        value: Some(Value::Custom(CustomValue {
            type_id: "mystery_box".to_string(),
            data: vec![1],
        })),
    });

    assert_err_matches!(result, AttributeError::UnknownTypeTag { .. });
}

#[test]
fn failing_custom_decode_names_codec_and_key() {
    init_logging();
    let codecs = codecs();

    let result = codecs.decode(&DialogAttribute {
        key: "marker".to_string(),
        value: Some(Value::Custom(CustomValue {
            type_id: "quest_marker".to_string(),
            data: Vec::new(),
        })),
    });

    match result {
        Err(AttributeError::CustomCodec { key, type_tag, .. }) => {
            assert_eq!(key, "marker");
            assert_eq!(type_tag, "quest_marker");
        }
        other => panic!("Expected CustomCodec but got {:?}", other),
    }
}

#[test]
fn codec_registration_rejects_taken_type_and_tag() {
    init_logging();
    let mut codecs = codecs();

    assert_err_matches!(
        codecs.register(QuestMarkerCodec),
        RegistrationError::DuplicateAttributeType { .. }
    );
}

#[test]
fn dialog_context_skips_unset_and_rejects_duplicate_keys() {
    init_logging();
    let codecs = codecs();
    let mut wire = DialogContext::new("d", DialogType::YesNo)
        .with_attribute("question", "Open the gate?")
        .to_wire(&codecs)
        .unwrap();
    wire.attributes.push(DialogAttribute {
        key: "ignored".to_string(),
        value: None,
    });

    let decoded = DialogContext::from_wire(&wire, &codecs).unwrap();
    assert_eq!(decoded.dialog_type, DialogType::YesNo);
    assert_eq!(decoded.attributes.len(), 1);
    assert_eq!(
        decoded.attribute("question"),
        Some(&AttributeValue::from("Open the gate?"))
    );

    wire.attributes.push(DialogAttribute {
        key: "question".to_string(),
        value: Some(Value::BoolValue(true)),
    });
    assert_err_matches!(
        DialogContext::from_wire(&wire, &codecs),
        ConvertError::DuplicateAttributeKey { .. }
    );
}

#[test]
fn unknown_dialog_type_survives_as_custom() {
    init_logging();
    let codecs = AttributeCodecs::new();
    let wire = DialogContext::new("shop", DialogType::Custom("MERCHANT".to_string()))
        .to_wire(&codecs)
        .unwrap();

    assert_eq!(wire.dialog_type, "MERCHANT");
    let decoded = DialogContext::from_wire(&wire, &codecs).unwrap();
    assert_eq!(decoded.dialog_type, DialogType::Custom("MERCHANT".to_string()));
    assert!(!decoded.dialog_type.is_builtin());
}

#[test]
fn dialog_show_with_unsupported_attribute_fails_to_encode() {
    init_logging();
    let protocol = protocol();
    let show = DialogShow {
        context: DialogContext::new("loot", DialogType::Inventory)
            .with_attribute("bag", AttributeValue::custom(Unregistered(1))),
        can_be_closed: true,
    };

    let result = protocol.encode(&show);

    assert_err_matches!(
        result,
        CodecError::Convert(ConvertError::Attribute(
            AttributeError::UnsupportedAttributeType { .. }
        ))
    );
}

#[test]
fn custom_attributes_need_codec_on_both_sides() {
    init_logging();
    let sender = protocol();
    let receiver = Protocol::builder();
    let show = DialogShow {
        context: DialogContext::new("quest", DialogType::Text).with_attribute(
            "marker",
            AttributeValue::custom(QuestMarker {
                quest: "herbs".to_string(),
                stage: 1,
            }),
        ),
        can_be_closed: true,
    };

    let envelope = sender.encode(&show).unwrap();
    let result = receiver.decode(&envelope);

    assert_err_matches!(
        result,
        CodecError::Convert(ConvertError::Attribute(AttributeError::UnknownTypeTag { .. }))
    );
}
