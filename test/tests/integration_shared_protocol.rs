/// A locked protocol is built once and read concurrently by I/O threads

use std::{sync::Arc, thread};

use dungeon_net_shared::{
    s2c::{LevelChange, SoundStop},
    Protocol,
};
use dungeon_net_test::{init_logging, protocol};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn protocol_is_send_and_sync() {
    assert_send_sync::<Protocol>();
}

#[test]
fn concurrent_encode_and_decode() {
    init_logging();

    let mut shared = protocol();
    shared.lock();
    let shared = Arc::new(shared);

    let handles: Vec<_> = (0..4_i64)
        .map(|worker| {
            let protocol = Arc::clone(&shared);
            thread::spawn(move || {
                for sound_instance_id in 0..50 {
                    let message = SoundStop {
                        sound_instance_id: worker * 1000 + sound_instance_id,
                    };
                    let envelope = protocol.encode(&message).unwrap();
                    let decoded = protocol.decode(&envelope).unwrap();
                    assert_eq!(decoded.downcast_ref::<SoundStop>(), Some(&message));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn built_protocol_leaves_builder_empty() {
    let mut builder = Protocol::builder();
    let built = builder.build();

    assert_eq!(built.converters.len(), 20);
    assert!(builder.converters.is_empty());
    assert!(built
        .encode(&LevelChange {
            level_name: "crypt".to_string(),
            level_data: String::new(),
        })
        .is_ok());
}
