pub mod assertions;
pub mod entity_builder;

pub use entity_builder::{RemoteEntityBuilder, TestEntityBuilder};
pub use message_exchange::{connected_client, deliver, init_logging};
