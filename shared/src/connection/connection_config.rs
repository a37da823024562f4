/// Contains config properties which will be used by a Server or Client
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Largest payload (excluding the id byte) that will be encoded or
    /// accepted. Transports add their own framing on top.
    pub max_payload_bytes: usize,
    /// Number of inventory slots an entity state may address. Slot indices
    /// at or above this are rejected before any slot storage is allocated.
    pub max_inventory_slots: usize,
}

impl ConnectionConfig {
    /// Creates a new ConnectionConfig, used to initialize a Connection
    pub fn new(max_payload_bytes: usize) -> Self {
        Self {
            max_payload_bytes,
            ..Self::default()
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 64 * 1024,
            max_inventory_slots: 256,
        }
    }
}
