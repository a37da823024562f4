/// Integration tests for item reconstruction through the item registry

use std::collections::HashMap;

use dungeon_net_shared::{
    item_from_wire, item_to_wire, wire, ConvertError, Item, ItemRegistry, RegistrationError,
};
use dungeon_net_test::{
    assert_err_matches, init_logging, protocol, EnchantedSword, Potion, Scroll,
};

fn wire_item(item_type: &str, data: &[(&str, &str)]) -> wire::Item {
    wire::Item {
        item_type: item_type.to_string(),
        stack_size: 1,
        max_stack_size: 0,
        item_data: data
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    }
}

#[test]
fn stateless_item_round_trips() {
    init_logging();
    let protocol = protocol();
    let mut potion = Potion::default();
    potion.set_stack_size(7);
    potion.set_max_stack_size(20);

    let wire = item_to_wire(&potion, &protocol.items).unwrap();
    assert_eq!(wire.item_type, "potion");
    assert!(wire.item_data.is_empty());

    let rebuilt = item_from_wire(&wire, &protocol.items).unwrap();
    assert_eq!(rebuilt.downcast_ref::<Potion>(), Some(&potion));
}

#[test]
fn stateful_item_is_rebuilt_from_data() {
    init_logging();
    let protocol = protocol();
    let sword = EnchantedSword::with_enchantment("flame");

    let wire = item_to_wire(&sword, &protocol.items).unwrap();
    assert_eq!(wire.item_data.get("enchantment").map(String::as_str), Some("flame"));

    let rebuilt = item_from_wire(&wire, &protocol.items).unwrap();
    assert_eq!(rebuilt.downcast_ref::<EnchantedSword>(), Some(&sword));
}

#[test]
fn stateful_item_without_data_uses_default() {
    init_logging();
    let protocol = protocol();

    let rebuilt = item_from_wire(&wire_item("enchanted_sword", &[]), &protocol.items).unwrap();

    assert_eq!(
        rebuilt.downcast_ref::<EnchantedSword>(),
        Some(&EnchantedSword::default())
    );
}

#[test]
fn data_without_factory_is_rejected() {
    init_logging();
    let protocol = protocol();
    let scroll = Scroll {
        spell: "fireball".to_string(),
    };
    let wire = item_to_wire(&scroll, &protocol.items).unwrap();

    let result = item_from_wire(&wire, &protocol.items);

    match result {
        Err(error @ ConvertError::ItemDataWithoutFactory { .. }) => {
            assert!(error.to_string().contains("scroll"));
        }
        other => panic!("Expected ItemDataWithoutFactory but got {:?}", other),
    }
}

#[test]
fn factory_failure_is_reported() {
    init_logging();
    let protocol = protocol();

    let result = item_from_wire(
        &wire_item("enchanted_sword", &[("charges", "3")]),
        &protocol.items,
    );

    assert_err_matches!(result, ConvertError::ItemConstruction { .. });
}

#[test]
fn unknown_item_type_is_rejected() {
    init_logging();
    let protocol = protocol();

    let result = item_from_wire(&wire_item("banana", &[]), &protocol.items);

    assert_err_matches!(result, ConvertError::UnknownItemType { .. });
}

#[test]
fn unregistered_item_class_cannot_be_sent() {
    init_logging();
    let registry = ItemRegistry::new();

    let result = item_to_wire(&Potion::default(), &registry);

    assert_err_matches!(result, ConvertError::UnregisteredItem { .. });
}

#[test]
fn negative_stack_size_is_out_of_range() {
    init_logging();
    let protocol = protocol();
    let mut wire = wire_item("potion", &[]);
    wire.stack_size = -1;

    let result = item_from_wire(&wire, &protocol.items);

    assert_err_matches!(result, ConvertError::OutOfRange { .. });
}

#[test]
fn item_types_are_registered_once() {
    init_logging();
    let mut registry = ItemRegistry::new();
    registry.register::<Potion>("potion").unwrap();

    assert_err_matches!(
        registry.register::<Scroll>("potion"),
        RegistrationError::DuplicateItemType { .. }
    );
    assert_err_matches!(
        registry.register::<Potion>("healing_potion"),
        RegistrationError::DuplicateItemClass { .. }
    );
    registry
        .register_with_data::<EnchantedSword, _>("sword", EnchantedSword::from_data)
        .unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.construct("sword", &HashMap::new()).unwrap().item_class(),
        std::any::type_name::<EnchantedSword>()
    );
}
