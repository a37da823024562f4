/// Integration tests for connection status and message routing in the client

use std::{sync::Arc, time::Instant};

use dungeon_net_client::{Client, ClientConfig, ConnectionStatus};
use dungeon_net_shared::{
    c2s::ConnectRequest,
    s2c::{ConnectAck, ConnectReject, GameOver, RejectReason},
    CodecError, WireError,
};
use dungeon_net_test::{
    assert_err_matches, connected_client, deliver, init_logging, protocol, RemoteEntityBuilder,
    TestWorld,
};

fn new_client() -> Client {
    Client::new(Arc::new(protocol()), ClientConfig::default())
}

#[test]
fn client_starts_disconnected() {
    init_logging();
    let client = new_client();
    assert_eq!(client.status(), ConnectionStatus::Disconnected);
    assert!(!client.is_connected());
}

#[test]
fn connect_ack_connects_and_is_handed_back() {
    init_logging();
    let mut client = new_client();
    let ack = ConnectAck {
        client_id: 12,
        session_id: 900,
        session_token: vec![9, 8, 7],
    };

    let returned = deliver(&mut client, &ack).expect("ConnectAck should be handed back");

    assert_eq!(returned.downcast_ref::<ConnectAck>(), Some(&ack));
    assert_eq!(client.status(), ConnectionStatus::Connected { client_id: 12 });
    assert_eq!(client.status().client_id(), Some(12));
}

#[test]
fn connect_reject_disconnects() {
    init_logging();
    let mut client = connected_client();
    let reject = ConnectReject {
        reason: RejectReason::InvalidSessionToken,
    };

    let returned = deliver(&mut client, &reject).unwrap();

    assert!(returned.is::<ConnectReject>());
    assert!(!client.is_connected());
}

#[test]
fn entity_messages_before_connect_are_dropped() {
    init_logging();
    let mut client = new_client();
    let mut world = TestWorld::new();

    let returned = deliver(&mut client, &RemoteEntityBuilder::new(1).spawn_event());
    client.tick(&mut world);

    assert!(returned.is_none());
    assert!(client.remote_snapshot().is_empty());
    assert!(world.is_empty());
}

#[test]
fn other_messages_are_handed_back() {
    init_logging();
    let mut client = connected_client();
    let game_over = GameOver {
        reason: "hero fell".to_string(),
    };

    let returned = deliver(&mut client, &game_over).unwrap();

    assert_eq!(returned.downcast_ref::<GameOver>(), Some(&game_over));
}

#[test]
fn connect_request_is_sent_with_wire_id_one() {
    init_logging();
    let client = new_client();

    let envelope = client
        .send(&ConnectRequest::new(1, "Ranger").resume(55, vec![4, 4]))
        .unwrap();

    assert_eq!(envelope[0], 1);
    let decoded = client.protocol().decode(&envelope).unwrap();
    let request = decoded.downcast_ref::<ConnectRequest>().unwrap();
    assert_eq!(request.player_name, "Ranger");
    assert_eq!(request.session_id, 55);
    assert_eq!(request.session_token, vec![4, 4]);
}

#[test]
fn garbage_envelope_is_reported() {
    init_logging();
    let mut client = connected_client();

    let result = client.receive(&[99, 1, 2, 3], Instant::now());
    assert_err_matches!(result, CodecError::Wire(WireError::UnknownTypeId { id: 99 }));

    let result = client.receive(&[], Instant::now());
    assert_err_matches!(result, CodecError::Wire(WireError::EmptyEnvelope));
    assert!(client.is_connected());
}

#[test]
fn disconnect_clears_remote_snapshot() {
    init_logging();
    let mut client = connected_client();
    deliver(&mut client, &RemoteEntityBuilder::new(4).spawn_event());
    assert_eq!(client.remote_snapshot().len(), 1);

    client.disconnect();

    assert!(client.remote_snapshot().is_empty());
    assert_eq!(client.status(), ConnectionStatus::Disconnected);
}
