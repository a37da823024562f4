use super::connection_config::ConnectionConfig;
use crate::{messages::WireError, types::WireTypeId};

/// Writes an envelope: the wire type id byte followed by the payload.
#[derive(Clone, Copy, Debug)]
pub struct Encoder {
    max_payload_bytes: usize,
}

impl Encoder {
    pub fn new(config: &ConnectionConfig) -> Self {
        Self {
            max_payload_bytes: config.max_payload_bytes,
        }
    }

    pub fn encode(&self, id: WireTypeId, payload: &[u8]) -> Result<Vec<u8>, WireError> {
        if payload.len() > self.max_payload_bytes {
            return Err(WireError::PayloadTooLarge {
                id,
                size: payload.len(),
                max: self.max_payload_bytes,
            });
        }

        let mut envelope = Vec::with_capacity(payload.len() + 1);
        envelope.push(id);
        envelope.extend_from_slice(payload);
        Ok(envelope)
    }
}
