use super::connection_config::ConnectionConfig;
use crate::{messages::WireError, types::WireTypeId};

/// Splits an envelope into its wire type id and payload.
#[derive(Clone, Copy, Debug)]
pub struct Decoder {
    max_payload_bytes: usize,
}

impl Decoder {
    pub fn new(config: &ConnectionConfig) -> Self {
        Self {
            max_payload_bytes: config.max_payload_bytes,
        }
    }

    /// SECURITY: `envelope` is untrusted network data. Oversized or empty
    /// input returns an error before any parsing happens.
    pub fn decode<'a>(&self, envelope: &'a [u8]) -> Result<(WireTypeId, &'a [u8]), WireError> {
        let (id, payload) = envelope.split_first().ok_or(WireError::EmptyEnvelope)?;
        if payload.len() > self.max_payload_bytes {
            return Err(WireError::PayloadTooLarge {
                id: *id,
                size: payload.len(),
                max: self.max_payload_bytes,
            });
        }
        Ok((*id, payload))
    }
}
