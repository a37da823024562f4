/// Assert that the local entity mirroring `global_id` sits at `(x, y)`
#[macro_export]
macro_rules! assert_mirrored_at {
    ($world:expr, $global_id:expr, $x:expr, $y:expr) => {
        let entity = $world
            .entity_for(::dungeon_net_shared::GlobalId::new($global_id))
            .unwrap_or_else(|| panic!("No local entity for global id {}", $global_id));
        let position = ::dungeon_net_shared::WorldRefType::component::<
            ::dungeon_net_shared::PositionComponent,
        >(&$world, &entity)
        .unwrap_or_else(|| panic!("Entity for global id {} has no position", $global_id))
        .position;
        assert_eq!(position, ::dungeon_net_shared::Point::new($x, $y));
    };
}

/// Assert that a result failed with the given error pattern
#[macro_export]
macro_rules! assert_err_matches {
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            other => panic!(
                "Expected {} but got {:?}",
                stringify!($pattern),
                other.map(|_| ())
            ),
        }
    };
}
