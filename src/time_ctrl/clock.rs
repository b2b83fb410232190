// src/time_ctrl/clock.rs
//! Обратный отсчёт до следующего шага раунда.

use serde::{Deserialize, Serialize};

/// Таймер одного ожидаемого шага.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RevealClock {
    /// Сколько миллисекунд осталось до шага (None, если шаг не запланирован).
    remaining_ms: Option<u64>,
}

/// Результат "протекания" времени.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClockState {
    /// Ничего не запланировано.
    Idle,
    /// Шаг ещё не наступил.
    Pending { remaining_ms: u64 },
    /// Время вышло, шаг пора выполнить. Таймер сброшен.
    Due,
}

impl RevealClock {
    pub fn new() -> Self {
        Self { remaining_ms: None }
    }

    /// Запланировать шаг через `delay_ms`.
    pub fn schedule(&mut self, delay_ms: u64) {
        self.remaining_ms = Some(delay_ms);
    }

    pub fn clear(&mut self) {
        self.remaining_ms = None;
    }

    pub fn remaining_ms(&self) -> Option<u64> {
        self.remaining_ms
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Симулируем протекание `delta_ms`. Лишнее время сверх шага не переносится.
    pub fn elapse(&mut self, delta_ms: u64) -> ClockState {
        let Some(remaining) = self.remaining_ms else {
            return ClockState::Idle;
        };

        if delta_ms < remaining {
            let left = remaining - delta_ms;
            self.remaining_ms = Some(left);
            return ClockState::Pending { remaining_ms: left };
        }

        self.remaining_ms = None;
        ClockState::Due
    }
}
