/// Session connectivity as seen by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected { client_id: i16 },
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected { .. })
    }

    pub fn client_id(&self) -> Option<i16> {
        match self {
            ConnectionStatus::Connected { client_id } => Some(*client_id),
            ConnectionStatus::Disconnected => None,
        }
    }
}
