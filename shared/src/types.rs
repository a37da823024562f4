/// One-byte identifier of a wire message shape, fixed per message type
pub type WireTypeId = u8;
/// Authoritative simulation tick stamped on snapshots by the server
pub type ServerTick = i32;

pub const RESERVED_WIRE_TYPE_ID: WireTypeId = 0;
