use std::time::{SystemTime, UNIX_EPOCH};

use crate::scheduler::Clock;

/// Horloge temps réel (epoch Unix).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // A clock before 1970 would be a host misconfiguration; treat it as t=0.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
