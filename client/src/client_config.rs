use std::{default::Default, time::Duration};

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Minimum time between two spawn requests for the same unknown remote
    /// entity
    pub spawn_request_cooldown: Duration,
    /// A snapshot whose server tick is within this distance of `i32::MAX`
    /// resets the tick watermark, so the wrapped ticks that follow are
    /// accepted
    pub stale_tick_reset_threshold: i32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            spawn_request_cooldown: Duration::from_secs(5),
            stale_tick_reset_threshold: 1000,
        }
    }
}
