use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::{RoundId, SessionId};

/// Простая генерация ID на основе монотонных счётчиков.
///
/// Счётчики начинаются с 1, так что 0 никогда не выдаётся.
#[derive(Debug)]
pub struct IdGenerator {
    round_counter: AtomicU64,
    session_counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            round_counter: AtomicU64::new(1),
            session_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_round_id(&self) -> RoundId {
        self.round_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_session_id(&self) -> SessionId {
        self.session_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Текущее Unix-время в миллисекундах (0, если часы до эпохи).
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
